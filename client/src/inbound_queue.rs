use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard},
};

use log::warn;

use scenario_sync_shared::ScenarioEntry;

use crate::OverflowPolicy;

struct QueueState {
    entries: VecDeque<ScenarioEntry>,
    dropped: u64,
}

struct SharedQueue {
    state: Mutex<QueueState>,
    capacity: Option<usize>,
    overflow_policy: OverflowPolicy,
}

impl SharedQueue {
    // A panic while holding the lock cannot leave the deque half-updated, so
    // a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, QueueState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, entry: ScenarioEntry) {
        let mut state = self.lock();

        let Some(capacity) = self.capacity else {
            state.entries.push_back(entry);
            return;
        };

        if state.entries.len() < capacity {
            state.entries.push_back(entry);
            return;
        }

        state.dropped += 1;
        match self.overflow_policy {
            OverflowPolicy::DropOldest if capacity > 0 => {
                if let Some(evicted) = state.entries.pop_front() {
                    warn!(
                        "Inbound scenario queue full ({} entries), dropping oldest entry '{}'",
                        capacity, evicted.name
                    );
                }
                state.entries.push_back(entry);
            }
            _ => {
                warn!(
                    "Inbound scenario queue full ({} entries), rejecting entry '{}'",
                    capacity, entry.name
                );
            }
        }
    }
}

/// FIFO of inbound scenario entries.
///
/// The queue is the only worker state shared with the transport, which may
/// deliver from another thread through an [`EntrySender`].
pub struct InboundQueue {
    shared: Arc<SharedQueue>,
}

impl InboundQueue {
    pub fn unbounded() -> Self {
        Self::new(None, OverflowPolicy::DropOldest)
    }

    pub fn new(capacity: Option<usize>, overflow_policy: OverflowPolicy) -> Self {
        Self {
            shared: Arc::new(SharedQueue {
                state: Mutex::new(QueueState {
                    entries: VecDeque::new(),
                    dropped: 0,
                }),
                capacity,
                overflow_policy,
            }),
        }
    }

    /// Returns a handle the transport can use to enqueue entries
    pub fn sender(&self) -> EntrySender {
        EntrySender {
            shared: self.shared.clone(),
        }
    }

    pub fn push(&self, entry: ScenarioEntry) {
        self.shared.push(entry);
    }

    pub fn pop(&self) -> Option<ScenarioEntry> {
        self.shared.lock().entries.pop_front()
    }

    pub fn len(&self) -> usize {
        self.shared.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.lock().entries.is_empty()
    }

    pub fn clear(&self) {
        self.shared.lock().entries.clear();
    }

    /// Entries lost to the overflow policy since the queue was created
    pub fn dropped_entries(&self) -> u64 {
        self.shared.lock().dropped
    }
}

impl Default for InboundQueue {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Cloneable, thread-safe handle for delivering entries into an [`InboundQueue`]
#[derive(Clone)]
pub struct EntrySender {
    shared: Arc<SharedQueue>,
}

impl EntrySender {
    /// Appends an entry. Never blocks on the consumer and never fails.
    pub fn enqueue(&self, name: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.shared.push(ScenarioEntry::new(name, data));
    }
}
