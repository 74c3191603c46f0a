use crate::utils::*;
use std::{fmt, str::FromStr};

/// The four classic placement policies. The set is closed: all of
/// them go through [`allocate`], and only differ in which admissible
/// partition they pick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Strategy {
    /// First admissible partition in table order.
    First,
    /// Admissible partition with the smallest remaining size.
    Best,
    /// Admissible partition with the largest remaining size.
    Worst,
    /// First Fit, resuming right after the last partition it filled.
    Next,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::First,
        Strategy::Best,
        Strategy::Worst,
        Strategy::Next,
    ];

    /// Picks the index of the partition that should receive `need` units.
    ///
    /// `cursor` is only read by [`Strategy::Next`]: it is where the
    /// circular scan begins.
    fn pick(&self, parts: &PartitionTable, need: MemUnits, cursor: usize) -> Option<usize> {
        let mut admissible = parts.iter()
            .enumerate()
            .filter(|(_, p)| p.admits(need));
        match self {
            Strategy::First => {
                admissible.next()
                    .map(|(idx, _)| idx)
            },
            // Candidates replace the incumbent only when strictly
            // better, so ties go to the earliest partition.
            Strategy::Best  => {
                admissible.reduce(|best, cand| {
                    if cand.1.size() < best.1.size() { cand } else { best }
                }).map(|(idx, _)| idx)
            },
            Strategy::Worst => {
                admissible.reduce(|worst, cand| {
                    if cand.1.size() > worst.1.size() { cand } else { worst }
                }).map(|(idx, _)| idx)
            },
            Strategy::Next  => {
                let n = parts.len();
                (0..n).map(|i| (cursor + i) % n)
                    .find(|&idx| {
                        parts.get_index(idx)
                            .is_some_and(|p| p.admits(need))
                    })
            },
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::First => "First Fit",
            Strategy::Best  => "Best Fit",
            Strategy::Worst => "Worst Fit",
            Strategy::Next  => "Next Fit",
        };
        f.write_str(name)
    }
}

impl FromStr for Strategy {
    type Err = StrategyError;

    /// Accepts full names as well as the one-letter menu codes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" | "f"   => Ok(Strategy::First),
            "best"  | "b"   => Ok(Strategy::Best),
            "worst" | "w"   => Ok(Strategy::Worst),
            "next"  | "n"   => Ok(Strategy::Next),
            _               => Err(StrategyError(s.to_string())),
        }
    }
}

/// Tries to find a home for every process that lacks one, visiting
/// processes in table order. Returns how many got placed by this call.
///
/// A process that fits nowhere is simply left waiting: there is no
/// error for it. Calling again is safe, and only revisits the ones
/// still waiting.
pub fn allocate(
    strategy:   Strategy,
    parts:      &mut PartitionTable,
    procs:      &mut ProcessTable,
) -> usize {
    // Next Fit's resume point. Every call starts from the top.
    let mut cursor = 0;
    let mut placed = 0;

    let waiting = procs.waiting();
    for pid in waiting {
        let Some(proc) = procs.get_mut(pid) else { continue };
        let need = proc.memory_required();
        match strategy.pick(parts, need, cursor) {
            Some(idx)   => {
                let Some(part) = parts.get_index_mut(idx) else { continue };
                proc.settle(part.id());
                part.host(pid, need);
                debug!("{}: process {} ({} units) -> partition {} ({} left)",
                    strategy, pid, need, part.id(), part.size());
                cursor = (idx + 1) % parts.len();
                placed += 1;
            },
            None        => {
                debug!("{}: process {} ({} units) fits nowhere", strategy, pid, need);
            }
        }
    }
    info!("{}: placed {} process(es), {} still waiting.",
        strategy, placed, procs.waiting().len());

    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_codes() {
        assert_eq!("first".parse::<Strategy>(), Ok(Strategy::First));
        assert_eq!("B".parse::<Strategy>(), Ok(Strategy::Best));
        assert_eq!(" Worst ".parse::<Strategy>(), Ok(Strategy::Worst));
        assert_eq!("n".parse::<Strategy>(), Ok(Strategy::Next));
        assert!("fastest".parse::<Strategy>().is_err());
    }

    #[test]
    fn ties_go_to_the_earliest() {
        let (parts, _) = init(&[70, 40, 70, 40], &[]).unwrap();
        assert_eq!(Strategy::Best.pick(&parts, 30, 0), Some(1));
        assert_eq!(Strategy::Worst.pick(&parts, 30, 0), Some(0));
        assert_eq!(Strategy::First.pick(&parts, 50, 0), Some(0));
    }

    #[test]
    fn next_fit_wraps_around() {
        let (parts, _) = init(&[50, 10, 10], &[]).unwrap();
        assert_eq!(Strategy::Next.pick(&parts, 20, 1), Some(0));
        assert_eq!(Strategy::Next.pick(&parts, 60, 1), None);
    }

    #[test]
    fn nothing_to_pick_from() {
        let (parts, _) = init(&[], &[]).unwrap();
        for s in Strategy::ALL {
            assert_eq!(s.pick(&parts, 1, 0), None);
        }
    }
}
