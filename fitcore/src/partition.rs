use crate::utils::*;

impl Partition {
    pub(crate) fn new(id: PartitionId, size: MemUnits) -> Self {
        Self {
            id,
            size,
            original_size:  size,
            occupant:       None,
        }
    }

    pub fn id(&self) -> PartitionId {
        self.id
    }

    /// Capacity not yet committed to anyone. See the remarks on
    /// [`Partition`] about why this is not the footprint.
    pub fn size(&self) -> MemUnits {
        self.size
    }

    pub fn original_size(&self) -> MemUnits {
        self.original_size
    }

    pub fn is_allocated(&self) -> bool {
        self.occupant.is_some()
    }

    /// Id of the process currently living here, if any.
    pub fn allocated_process_id(&self) -> Option<ProcessId> {
        self.occupant
    }

    /// Returns `true` if a request of `need` units may be placed here:
    /// the partition must be vacant and large enough.
    pub fn admits(&self, need: MemUnits) -> bool {
        !self.is_allocated() && need <= self.size
    }

    // Callers must have checked `admits` first.
    pub(crate) fn host(&mut self, pid: ProcessId, need: MemUnits) {
        debug_assert!(self.admits(need));
        self.occupant = Some(pid);
        self.size -= need;
    }

    pub(crate) fn evict(&mut self, reclaimed: MemUnits) {
        self.occupant = None;
        self.size += reclaimed;
    }

    /// Zeroes the size of a vacant partition and returns what it held.
    pub(crate) fn drain(&mut self) -> MemUnits {
        debug_assert!(!self.is_allocated());
        std::mem::take(&mut self.size)
    }

    /// A vacant partition that has nothing left to offer.
    pub(crate) fn is_exhausted(&self) -> bool {
        self.size == 0 && !self.is_allocated()
    }
}
