pub(crate) use thiserror::Error;
pub(crate) use itertools::Itertools;
pub(crate) use indexmap::IndexMap;
pub(crate) use serde::Serialize;
pub(crate) use log::{debug, info, warn};

pub use crate::{Partition, Process, PartitionTable, ProcessTable,
    fit::Strategy,
    tables::init,
};

/// The unit in which partitions and requests are measured. `fitcore`
/// attaches no meaning to it (bytes, KiB, pages ... it's all the same).
///
/// Being unsigned, it makes "no partition ever has negative size" a
/// property of the type instead of a runtime check.
pub type MemUnits = usize;

/// Partition ids are positive and never reused within a table.
pub type PartitionId = u32;

/// Process ids are positive and equal to the 1-based position the
/// process had in the setup list.
pub type ProcessId = u32;

#[derive(Error, Debug, PartialEq, Eq)]
/// Appears while building the tables out of caller-supplied sizes.
pub enum SetupError {
    #[error("{0} entries do not fit in the id space")]
    TooMany(usize),
}

#[derive(Error, Debug, PartialEq, Eq)]
/// The one reported, recoverable outcome of the engine.
pub enum ReleaseError {
    #[error("Process {0} not found in any partition")]
    NotFound(ProcessId),
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown fit strategy: {0:?} (expected first, best, worst or next)")]
pub struct StrategyError(pub String);
