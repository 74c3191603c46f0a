use crate::utils::*;

/// Builds the partition and process tables out of two ordered lists of
/// sizes. Successfully returned tables are guaranteed to be compliant
/// with all of `fitcore`'s assumptions. These are:
/// - partition `i` (counting from 1) gets id `i`, and is vacant
/// - process `i` (counting from 1) gets id `i`, and is homeless
/// - all ids fit in the id type, with room left for compaction
///
/// Zero sizes are accepted on both sides. A vacant zero-size partition
/// admits only zero requests and is dropped by the next compaction.
///
/// This function is the gatekeeper to the rest of the library.
pub fn init(
    partition_sizes:    &[MemUnits],
    process_demands:    &[MemUnits],
) -> Result<(PartitionTable, ProcessTable), SetupError> {
    let (part_ids, proc_ids) = (
        ids_for(partition_sizes.len())?,
        ids_for(process_demands.len())?
    );

    let parts = PartitionTable {
        parts: part_ids.zip(partition_sizes)
            .map(|(id, &size)| (id, Partition::new(id, size)))
            .collect(),
        next_id: partition_sizes.len() as PartitionId + 1,
    };
    let procs = ProcessTable {
        procs: proc_ids.zip(process_demands)
            .map(|(id, &need)| (id, Process::new(id, need)))
            .collect(),
    };
    debug!("Tables ready: {} partitions, {} processes.", parts.len(), procs.len());

    Ok((parts, procs))
}

// Ids are 1-based positions. One slot is kept free so that
// `next_id` is representable too.
fn ids_for(len: usize) -> Result<std::ops::RangeInclusive<u32>, SetupError> {
    match u32::try_from(len) {
        Ok(n) if n < u32::MAX   => Ok(1..=n),
        _                       => Err(SetupError::TooMany(len)),
    }
}

impl PartitionTable {
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Partitions in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Partition> {
        self.parts.values()
    }

    pub fn get(&self, id: PartitionId) -> Option<&Partition> {
        self.parts.get(&id)
    }

    /// The partition currently hosting process `pid`, if any.
    pub fn holder_of(&self, pid: ProcessId) -> Option<&Partition> {
        self.holder_index(pid)
            .and_then(|idx| self.get_index(idx))
    }

    /// Sum of `size` over vacant partitions.
    pub fn total_free(&self) -> MemUnits {
        self.iter()
            .filter(|p| !p.is_allocated())
            .map(|p| p.size())
            .sum()
    }

    pub(crate) fn get_index(&self, idx: usize) -> Option<&Partition> {
        self.parts
            .get_index(idx)
            .map(|(_, p)| p)
    }

    pub(crate) fn get_index_mut(&mut self, idx: usize) -> Option<&mut Partition> {
        self.parts
            .get_index_mut(idx)
            .map(|(_, p)| p)
    }

    pub(crate) fn holder_index(&self, pid: ProcessId) -> Option<usize> {
        self.iter()
            .position(|p| p.allocated_process_id() == Some(pid))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Partition> {
        self.parts.values_mut()
    }

    /// Appends a fresh, vacant partition at the end of the table.
    ///
    /// The id counter saturates: once it cannot be advanced any more,
    /// `None` is returned and the table is left as it was. The last
    /// value of the id type is thus never handed out.
    pub(crate) fn push(&mut self, size: MemUnits) -> Option<PartitionId> {
        let id = self.next_id;
        self.next_id = id.checked_add(1)?;
        self.parts.insert(id, Partition::new(id, size));

        Some(id)
    }

    /// Keeps the relative order of survivors.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&Partition) -> bool) {
        self.parts.retain(|_, p| keep(p));
    }
}

impl ProcessTable {
    pub fn len(&self) -> usize {
        self.procs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.procs.is_empty()
    }

    /// Processes in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.procs.values()
    }

    pub fn get(&self, id: ProcessId) -> Option<&Process> {
        self.procs.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: ProcessId) -> Option<&mut Process> {
        self.procs.get_mut(&id)
    }

    /// Ids of processes still waiting for a home, in table order.
    pub fn waiting(&self) -> Vec<ProcessId> {
        self.iter()
            .filter(|p| !p.is_allocated())
            .map(|p| p.id())
            .collect_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_positions() {
        let (parts, procs) = init(&[10, 20, 30], &[5, 6]).unwrap();
        assert_eq!(parts.iter().map(|p| p.id()).collect_vec(), vec![1, 2, 3]);
        assert_eq!(procs.iter().map(|p| p.id()).collect_vec(), vec![1, 2]);
        assert_eq!(parts.next_id, 4);
        assert!(parts.iter().all(|p| p.size() == p.original_size() && !p.is_allocated()));
    }

    #[test]
    fn zero_sizes_are_accepted() {
        let (parts, procs) = init(&[0, 100], &[0, 50]).unwrap();
        assert_eq!(parts.iter().map(|p| p.size()).collect_vec(), vec![0, 100]);
        assert_eq!(procs.iter().map(|p| p.memory_required()).collect_vec(), vec![0, 50]);
        assert_eq!(parts.next_id, 3);
        assert_eq!(parts.total_free(), 100);
    }

    #[test]
    fn push_stops_at_the_end_of_the_id_space() {
        let (mut parts, _) = init(&[10], &[]).unwrap();
        parts.next_id = PartitionId::MAX - 1;
        assert_eq!(parts.push(5), Some(PartitionId::MAX - 1));
        let before = parts.clone();
        assert_eq!(parts.push(5), None);
        assert_eq!(parts, before);
    }

    #[test]
    fn empty_input_is_fine() {
        let (parts, procs) = init(&[], &[]).unwrap();
        assert!(parts.is_empty() && procs.is_empty());
        assert_eq!(parts.next_id, 1);
    }
}
