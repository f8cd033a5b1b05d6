/// Summary of one `drain_and_apply` pass
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrainReport {
    /// Entries merged into an existing module
    pub applied: usize,
    /// Entries that created a new module
    pub created: usize,
    /// Entries discarded by the game mode gate
    pub skipped: usize,
    /// Entries that failed to decode, apply or register
    pub failed: usize,
    /// Whether the blank progression module was registered this pass
    pub bootstrapped: bool,
}

impl DrainReport {
    /// Number of entries consumed from the queue
    pub fn consumed(&self) -> usize {
        self.applied + self.created + self.skipped + self.failed
    }

    pub fn is_empty(&self) -> bool {
        self.consumed() == 0 && !self.bootstrapped
    }
}

/// Summary of one outbound flush
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlushReport {
    /// Modules handed to the transport, in store order
    pub sent: Vec<String>,
    /// Modules left out because they failed to save
    pub save_failures: Vec<String>,
}

impl FlushReport {
    pub fn sent_count(&self) -> usize {
        self.sent.len()
    }
}
