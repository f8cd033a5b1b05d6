use std::{default::Default, time::Duration};

use scenario_sync_shared::PROGRESSION_MODULE_NAME;

/// What to do with an inbound entry that arrives while a bounded queue is full
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Evict the oldest queued entry to make room
    DropOldest,
    /// Discard the arriving entry
    RejectNewest,
}

/// Contains Config properties which will be used by the sync worker
#[derive(Clone, Debug)]
pub struct SyncConfig {
    /// Minimum time between two outbound flushes of local scenario modules
    pub flush_interval: Duration,
    /// Name of the module that only exists in modes permitting progression
    pub progression_module: String,
    /// Maximum number of queued inbound entries. `None` leaves the queue
    /// unbounded.
    pub inbound_capacity: Option<usize>,
    /// Applied when `inbound_capacity` is set and the queue is full
    pub overflow_policy: OverflowPolicy,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            flush_interval: Duration::from_secs(30),
            progression_module: PROGRESSION_MODULE_NAME.to_string(),
            inbound_capacity: None,
            overflow_policy: OverflowPolicy::DropOldest,
        }
    }
}
