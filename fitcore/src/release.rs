use crate::utils::*;

/// Gives the memory of process `pid` back to the partition hosting it.
///
/// The partition grows by the process's *own* `memory_required`, as
/// found through its id. Both records end up vacant/homeless, and the
/// freed partition's id is returned.
///
/// If no partition is hosting `pid`, [`ReleaseError::NotFound`] is
/// returned and neither table is touched. All lookups happen before
/// the first write, so there is no partial outcome.
pub fn release(
    parts:  &mut PartitionTable,
    procs:  &mut ProcessTable,
    pid:    ProcessId,
) -> Result<PartitionId, ReleaseError> {
    let not_found = || {
        debug!("Process {} not found in any partition.", pid);
        ReleaseError::NotFound(pid)
    };
    let idx = parts.holder_index(pid)
        .ok_or_else(not_found)?;
    let proc = procs.get_mut(pid)
        .ok_or_else(not_found)?;
    let part = parts.get_index_mut(idx)
        .ok_or_else(not_found)?;

    part.evict(proc.memory_required());
    proc.evict();
    info!("Process {} released from partition {} ({} units free).", pid, part.id(), part.size());

    Ok(part.id())
}
