//! Welcome to `fitcore`!
//!
//! A fixed-partition memory placement engine. The caller hands over a
//! [`PartitionTable`] and a [`ProcessTable`] (built via [`tables::init`]),
//! and then drives them through [`fit::allocate`], [`release::release`]
//! and [`compact::compact`]. The [`report`] module reads the resulting
//! state without touching it.
//!
//! `fitcore` performs no I/O. Decisions are traced through the [`log`]
//! facade and are silent unless the caller installs a logger.

mod partition;
mod process;
pub mod utils;
pub mod tables;
pub mod fit;
pub mod release;
pub mod compact;
pub mod report;

/// Imports, type aliases, errors ... in general
/// useful stuff that shall be needed in many places.
pub use crate::utils::*;

/// A fixed block of memory.
///
/// > ***ATTENTION:*** [`size`](Partition::size) is *not* the block's
/// > footprint. Every allocation placed into a partition shrinks its
/// > `size` in place, so for an occupied partition `size` is the slack
/// > left inside it, and for a free one it is the capacity on offer.
/// > [`original_size`](Partition::original_size) remembers the footprint.
/// >
/// > A partition hosts at most one process at a time. The occupant's id
/// > lives in an `Option`, so "allocated" and "has an owner" cannot
/// > disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition {
    id:             PartitionId,
    // Remaining, uncommitted capacity.
    size:           MemUnits,
    original_size:  MemUnits,
    occupant:       Option<ProcessId>,
}

/// A request for memory. Only its [`home`](Process::home) ever changes
/// after setup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Process {
    id:                 ProcessId,
    memory_required:    MemUnits,
    home:               Option<PartitionId>,
}

/// The ordered collection of partitions, keyed by id.
///
/// Table order is creation order. Compaction may drop entries and
/// append one merged block at the end; nothing else changes the
/// cardinality of the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartitionTable {
    parts:      IndexMap<PartitionId, Partition>,
    // Never handed out twice, even after the block that got it
    // has been compacted away.
    next_id:    PartitionId,
}

/// The ordered collection of processes, keyed by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessTable {
    procs: IndexMap<ProcessId, Process>,
}
