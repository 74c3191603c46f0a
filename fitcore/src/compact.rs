use crate::utils::*;

/// Merges all vacant capacity into one new partition at the end of
/// the table, and drops the vacant partitions it was drained from.
///
/// Occupied partitions are not touched, whatever slack they carry.
/// The merged block gets a never-before-used id, and its
/// `original_size` equals the capacity it gathered. Returns that id,
/// or `None` if there was no vacant capacity to gather. Vacant
/// zero-size partitions are dropped either way.
///
/// Should the table have run out of fresh ids, nothing is touched
/// and `None` is returned.
pub fn compact(parts: &mut PartitionTable) -> Option<PartitionId> {
    let free_total = parts.total_free();
    let merged = if free_total > 0 {
        let Some(id) = parts.push(free_total) else {
            warn!("No fresh partition id left; {} free units stay where they are.", free_total);
            return None;
        };
        parts.iter_mut()
            .filter(|p| !p.is_allocated() && p.id() != id)
            .for_each(|p| { p.drain(); });
        Some(id)
    } else { None };
    let before = parts.len();
    parts.retain(|p| !p.is_exhausted());

    match merged {
        Some(id)    => {
            info!("Compacted {} units into partition {} ({} vacant partition(s) dropped).",
                free_total, id, before - parts.len());
        },
        None        => {
            info!("Nothing to compact.");
        }
    }

    merged
}
