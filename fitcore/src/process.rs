use crate::utils::*;

impl Process {
    pub(crate) fn new(id: ProcessId, memory_required: MemUnits) -> Self {
        Self {
            id,
            memory_required,
            home: None,
        }
    }

    pub fn id(&self) -> ProcessId {
        self.id
    }

    pub fn memory_required(&self) -> MemUnits {
        self.memory_required
    }

    pub fn is_allocated(&self) -> bool {
        self.home.is_some()
    }

    /// The partition this process currently occupies.
    pub fn home(&self) -> Option<PartitionId> {
        self.home
    }

    pub(crate) fn settle(&mut self, part: PartitionId) {
        self.home = Some(part);
    }

    pub(crate) fn evict(&mut self) {
        self.home = None;
    }
}
