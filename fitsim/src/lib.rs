pub use std::str::FromStr;
pub use clap::Parser;
use itertools::Itertools;
use serde::Serialize;
use thiserror::Error;

use fitcore::*;
use fitcore::report::{self, Fragmentation, Status};

// Every cell of the memory map is this wide, plus one separator.
const CELL_WIDTH: usize = 12;

/// One scripted action. Each of them stands in for a menu entry of
/// an interactive session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Allocate(Strategy),
    Release(ProcessId),
    Compact,
    Status,
    Map,
    Frag,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StepError {
    #[error("bad process id in {step:?}")]
    BadId { step: String },
    #[error("unknown step {0:?} (expected first|best|worst|next, release=<id>, compact, status, map or frag)")]
    Unknown(String),
}

impl FromStr for Step {
    type Err = StepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(id) = s.strip_prefix("release=") {
            return id.parse::<ProcessId>()
                .map(Step::Release)
                .map_err(|_| StepError::BadId { step: s.to_string() });
        }
        match s.to_ascii_lowercase().as_str() {
            "compact"   => Ok(Step::Compact),
            "status"    => Ok(Step::Status),
            "map"       => Ok(Step::Map),
            "frag"      => Ok(Step::Frag),
            other       => {
                other.parse::<Strategy>()
                    .map(Step::Allocate)
                    .map_err(|_| StepError::Unknown(s.to_string()))
            }
        }
    }
}

/// The two tables, plus whatever the caller wants done to them.
pub struct Session {
    pub parts: PartitionTable,
    pub procs: ProcessTable,
}

impl Session {
    pub fn new(partition_sizes: &[MemUnits], process_demands: &[MemUnits]) -> Result<Self, SetupError> {
        let (parts, procs) = init(partition_sizes, process_demands)?;

        Ok(Self { parts, procs })
    }

    /// Runs one step and returns what should be shown for it.
    pub fn apply(&mut self, step: Step) -> String {
        match step {
            Step::Allocate(s)   => {
                let placed = fit::allocate(s, &mut self.parts, &mut self.procs);
                format!("{}: {} process(es) placed, {} waiting.\n",
                    s, placed, self.procs.waiting().len())
            },
            Step::Release(pid)  => {
                match release::release(&mut self.parts, &mut self.procs, pid) {
                    Ok(_)   => format!("Process {} deallocated.\n", pid),
                    Err(e)  => format!("{}.\n", e),
                }
            },
            Step::Compact       => {
                match compact::compact(&mut self.parts) {
                    Some(_) => String::from("Memory compacted. All free spaces merged into a single block.\n"),
                    None    => String::from("No free space to compact.\n"),
                }
            },
            Step::Status        => render_status(&report::status(&self.parts, &self.procs)),
            Step::Map           => render_map(&self.parts),
            Step::Frag          => render_fragmentation(report::fragmentation(&self.parts)),
        }
    }

    /// Status table, memory map and fragmentation, one after the other.
    pub fn summary(&self) -> String {
        [
            render_status(&report::status(&self.parts, &self.procs)),
            render_map(&self.parts),
            render_fragmentation(report::fragmentation(&self.parts)),
        ].concat()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        #[derive(Serialize)]
        struct Snapshot {
            status:         Status,
            fragmentation:  Fragmentation,
        }

        serde_json::to_string_pretty(&Snapshot {
            status:         report::status(&self.parts, &self.procs),
            fragmentation:  report::fragmentation(&self.parts),
        })
    }
}

fn or_dash<T: ToString>(v: Option<T>) -> String {
    v.map_or(String::from("-"), |x| x.to_string())
}

fn yes_no(b: bool) -> &'static str {
    if b { "Yes" } else { "No" }
}

pub fn render_status(status: &Status) -> String {
    let mut out = String::from("\n================ CURRENT MEMORY STATUS ================\n");
    out += &format!("{:<15}{:<15}{:<15}{:<15}\n", "Partition ID", "Size", "Allocated", "Process ID");
    out += &"-".repeat(60);
    out.push('\n');
    for p in &status.partitions {
        out += &format!("{:<15}{:<15}{:<15}{:<15}\n",
            p.id, p.size, yes_no(p.allocated), or_dash(p.allocated_process_id));
    }

    out += "\n================ PROCESS ALLOCATION STATUS ============\n";
    out += &format!("{:<15}{:<20}{:<15}{:<15}\n", "Process ID", "Memory Required", "Allocated", "Partition ID");
    out += &"-".repeat(65);
    out.push('\n');
    for p in &status.processes {
        out += &format!("{:<15}{:<20}{:<15}{:<15}\n",
            p.id, p.memory_required, yes_no(p.allocated), or_dash(p.allocated_partition_id));
    }
    out += &"=".repeat(60);
    out.push('\n');

    out
}

/// A one-row box diagram of the partitions, in table order.
pub fn render_map(parts: &PartitionTable) -> String {
    let slots = report::visualize(parts);
    let border = format!("+{}\n",
        slots.iter()
            .map(|_| format!("{}+", "-".repeat(CELL_WIDTH)))
            .join(""));
    let row = |cells: Vec<String>| {
        format!("|{}\n", cells.iter()
            .map(|c| format!("{:<w$}|", c, w = CELL_WIDTH))
            .join(""))
    };

    [
        String::from("\n================ MEMORY VISUALIZATION ================\n"),
        border.clone(),
        row(slots.iter().map(|s| s.label.to_string()).collect()),
        row(slots.iter().map(|s| format!("{}u", s.size)).collect()),
        border,
        "=".repeat(53) + "\n",
    ].concat()
}

pub fn render_fragmentation(frag: Fragmentation) -> String {
    format!("\n================ FRAGMENTATION STATISTICS ============\n\
        Total Internal Fragmentation: {} units\n\
        Total External Fragmentation: {} units\n\
        {}\n",
        frag.internal, frag.external, "=".repeat(53))
}
