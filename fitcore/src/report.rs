//! Read-only views over the tables. Nothing in here mutates state;
//! presentation is left entirely to the caller.
use crate::utils::*;
use std::fmt;

/// Leftover capacity, split by whether it sits inside an occupied
/// partition or a vacant one.
///
/// > ***ATTENTION:*** both figures come straight out of the partitions'
/// > `size` field (see [`Partition`]). `internal` is the slack inside
/// > occupied partitions; `external` is all vacant capacity, whether or
/// > not any waiting process could use it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub struct Fragmentation {
    pub internal: MemUnits,
    pub external: MemUnits,
}

pub fn fragmentation(parts: &PartitionTable) -> Fragmentation {
    parts.iter()
        .fold(Fragmentation::default(), |mut acc, p| {
            if p.is_allocated() {
                acc.internal += p.size();
            } else {
                acc.external += p.size();
            }
            acc
        })
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PartitionView {
    pub id:                     PartitionId,
    pub size:                   MemUnits,
    pub allocated:              bool,
    pub allocated_process_id:   Option<ProcessId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProcessView {
    pub id:                     ProcessId,
    pub memory_required:        MemUnits,
    pub allocated:              bool,
    pub allocated_partition_id: Option<PartitionId>,
}

/// A snapshot of both tables, in table order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Status {
    pub partitions: Vec<PartitionView>,
    pub processes:  Vec<ProcessView>,
}

impl From<&Partition> for PartitionView {
    fn from(p: &Partition) -> Self {
        Self {
            id:                     p.id(),
            size:                   p.size(),
            allocated:              p.is_allocated(),
            allocated_process_id:   p.allocated_process_id(),
        }
    }
}

impl From<&Process> for ProcessView {
    fn from(p: &Process) -> Self {
        Self {
            id:                     p.id(),
            memory_required:        p.memory_required(),
            allocated:              p.is_allocated(),
            allocated_partition_id: p.home(),
        }
    }
}

pub fn status(parts: &PartitionTable, procs: &ProcessTable) -> Status {
    Status {
        partitions: parts.iter().map_into().collect(),
        processes:  procs.iter().map_into().collect(),
    }
}

/// Who is sitting in a partition, as far as a memory map cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Occupancy {
    Process(ProcessId),
    Free,
}

impl fmt::Display for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Occupancy::Process(pid) => write!(f, "P{}", pid),
            Occupancy::Free         => f.write_str("Free"),
        }
    }
}

/// One cell of the memory map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub label:  Occupancy,
    pub size:   MemUnits,
}

/// The memory map: one [`Slot`] per partition, in table order.
pub fn visualize(parts: &PartitionTable) -> Vec<Slot> {
    parts.iter()
        .map(|p| Slot {
            label:  p.allocated_process_id()
                .map_or(Occupancy::Free, Occupancy::Process),
            size:   p.size(),
        })
        .collect()
}

/// Number of vacant partitions.
pub fn free_partitions(parts: &PartitionTable) -> usize {
    parts.iter()
        .filter(|p| !p.is_allocated())
        .count()
}
