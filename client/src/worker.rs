use log::{debug, info, warn};

use scenario_sync_shared::{
    blank_progression_node, ConfigNode, GameMode, ScenarioCodec, ScenarioEntry, ScenarioModule,
    ScenarioSender, ScenarioStore, SyncError, TextCodec, Timestamp,
};

use crate::{DrainReport, EntrySender, FlushReport, InboundQueue, SyncConfig};

/// Whether outbound sync is still allowed this session
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncState {
    Normal,
    /// Degraded mode. Holds the first error that tripped it; cleared only by
    /// `reset()`.
    Blocked(SyncError),
}

enum ApplyOutcome {
    Applied,
    Created,
    Skipped,
    Failed,
}

/// Keeps the host's scenario modules in sync with a remote peer.
///
/// Driven entirely by the embedding runtime: `tick` on every update to run
/// the interval-based outbound flush, and `drain_and_apply` to merge queued
/// inbound entries into the store. Any local decode, apply or registration
/// failure switches the worker into degraded mode, after which nothing is
/// sent until `reset`.
pub struct ScenarioSyncWorker<S, T, C = TextCodec> {
    config: SyncConfig,
    game_mode: GameMode,
    store: S,
    sender: T,
    codec: C,
    inbound: InboundQueue,
    enabled: bool,
    sync_state: SyncState,
    progression_loaded: bool,
    last_flush: Timestamp,
}

impl<S: ScenarioStore, T: ScenarioSender> ScenarioSyncWorker<S, T, TextCodec> {
    /// Create a new worker using the text config codec
    pub fn new(config: SyncConfig, game_mode: GameMode, store: S, sender: T) -> Self {
        Self::with_codec(config, game_mode, store, sender, TextCodec)
    }
}

impl<S: ScenarioStore, T: ScenarioSender, C: ScenarioCodec> ScenarioSyncWorker<S, T, C> {
    pub fn with_codec(
        config: SyncConfig,
        game_mode: GameMode,
        store: S,
        sender: T,
        codec: C,
    ) -> Self {
        let inbound = InboundQueue::new(config.inbound_capacity, config.overflow_policy);
        Self {
            config,
            game_mode,
            store,
            sender,
            codec,
            inbound,
            enabled: false,
            sync_state: SyncState::Normal,
            progression_loaded: false,
            last_flush: Timestamp::ZERO,
        }
    }

    // Outbound

    /// Runs the outbound flush if the worker is enabled, not degraded, and
    /// more than one flush interval has passed since the last flush.
    /// Returns what was sent when a flush ran.
    pub fn tick(&mut self, now: Timestamp) -> Option<FlushReport> {
        if !self.enabled || self.is_blocked() {
            return None;
        }
        if now.saturating_duration_since(self.last_flush) <= self.config.flush_interval {
            return None;
        }
        self.last_flush = now;
        Some(self.send_scenario_modules())
    }

    fn send_scenario_modules(&mut self) -> FlushReport {
        let mut report = FlushReport::default();
        let mut payloads: Vec<Vec<u8>> = Vec::new();
        let progression_allowed = self.game_mode.permits_progression();

        for module in self.store.modules() {
            let Some(name) = module.name() else {
                continue;
            };
            if !module.has_payload() {
                continue;
            }
            if name == self.config.progression_module && !progression_allowed {
                continue;
            }
            match module.save() {
                Ok(node) => {
                    report.sent.push(name.to_string());
                    payloads.push(self.codec.encode(&node));
                }
                Err(err) => {
                    warn!("Leaving scenario module '{}' out of this flush: {}", name, err);
                    report.save_failures.push(name.to_string());
                }
            }
        }

        if !report.sent.is_empty() {
            debug!("Sending {} scenario modules", report.sent.len());
            self.sender.send_batch(&report.sent, &payloads);
        }

        report
    }

    // Inbound

    /// Queues an inbound update. Safe to call while a drain is in progress;
    /// see [`Self::entry_sender`] for delivery from another thread.
    pub fn enqueue(&self, name: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.inbound.push(ScenarioEntry::new(name, data));
    }

    /// A handle the transport can keep to enqueue entries from any thread
    pub fn entry_sender(&self) -> EntrySender {
        self.inbound.sender()
    }

    /// Applies every queued entry in arrival order, then bootstraps the
    /// progression module if the game mode needs one and none has arrived.
    /// Each entry is consumed exactly once, whether or not it applies.
    pub fn drain_and_apply(&mut self) -> DrainReport {
        let mut report = DrainReport::default();

        while let Some(entry) = self.inbound.pop() {
            match self.apply_entry(entry) {
                ApplyOutcome::Applied => report.applied += 1,
                ApplyOutcome::Created => report.created += 1,
                ApplyOutcome::Skipped => report.skipped += 1,
                ApplyOutcome::Failed => report.failed += 1,
            }
        }

        if !self.progression_loaded && self.game_mode.permits_progression() {
            report.bootstrapped = self.create_blank_progression();
        }

        report
    }

    fn apply_entry(&mut self, entry: ScenarioEntry) -> ApplyOutcome {
        if entry.name == self.config.progression_module {
            if !self.game_mode.permits_progression() {
                info!(
                    "Skipping '{}' scenario data, {:?} mode has no progression",
                    entry.name, self.game_mode
                );
                return ApplyOutcome::Skipped;
            }
            self.progression_loaded = true;
        }

        let node = match self.codec.decode(&entry.data) {
            Ok(node) => node,
            Err(source) => {
                self.block(SyncError::Decode {
                    module: entry.name,
                    source,
                });
                return ApplyOutcome::Failed;
            }
        };

        let result = match self.store.module_mut(&entry.name) {
            Some(module) => {
                debug!("Loading existing {} scenario module", entry.name);
                if module.ensure_payload() {
                    debug!("Created missing payload for {} scenario module", entry.name);
                }
                module
                    .load(&node)
                    .map(|_| ApplyOutcome::Applied)
                    .map_err(SyncError::from)
            }
            None => {
                debug!("Loading new {} scenario module", entry.name);
                register_module(&mut self.store, &entry.name, node).map(|_| ApplyOutcome::Created)
            }
        };

        match result {
            Ok(outcome) => outcome,
            Err(err) => {
                self.block(err);
                ApplyOutcome::Failed
            }
        }
    }

    /// Registers the "no progress yet" progression module. Runs at most once
    /// per session whether or not registration succeeds.
    fn create_blank_progression(&mut self) -> bool {
        self.progression_loaded = true;

        let name = self.config.progression_module.clone();
        if self.store.contains_module(&name) {
            debug!("{} scenario module already present, not creating one", name);
            return false;
        }

        debug!("Creating new {} scenario module", name);
        let node = blank_progression_node(&name);
        match register_module(&mut self.store, &name, node) {
            Ok(()) => true,
            Err(err) => {
                self.block(err);
                false
            }
        }
    }

    fn block(&mut self, err: SyncError) {
        warn!("{}. Outbound scenario sync suspended until reset", err);
        if self.sync_state == SyncState::Normal {
            self.sync_state = SyncState::Blocked(err);
        }
    }

    // Lifecycle

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns the worker to its initial state for a new session: disabled,
    /// not degraded, no progression loaded, no queued entries, and the flush
    /// timer back at the clock origin.
    pub fn reset(&mut self) {
        self.enabled = false;
        self.progression_loaded = false;
        self.inbound.clear();
        self.sync_state = SyncState::Normal;
        self.last_flush = Timestamp::ZERO;
    }

    pub fn set_game_mode(&mut self, game_mode: GameMode) {
        self.game_mode = game_mode;
    }

    // Getters

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self.sync_state, SyncState::Blocked(_))
    }

    pub fn sync_state(&self) -> &SyncState {
        &self.sync_state
    }

    /// The error that put the worker into degraded mode, if any
    pub fn blocked_reason(&self) -> Option<&SyncError> {
        match &self.sync_state {
            SyncState::Normal => None,
            SyncState::Blocked(err) => Some(err),
        }
    }

    pub fn progression_loaded(&self) -> bool {
        self.progression_loaded
    }

    pub fn game_mode(&self) -> GameMode {
        self.game_mode
    }

    pub fn last_flush(&self) -> Timestamp {
        self.last_flush
    }

    pub fn pending_entries(&self) -> usize {
        self.inbound.len()
    }

    pub fn dropped_entries(&self) -> u64 {
        self.inbound.dropped_entries()
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn sender(&self) -> &T {
        &self.sender
    }
}

fn register_module<S: ScenarioStore>(
    store: &mut S,
    name: &str,
    node: ConfigNode,
) -> Result<(), SyncError> {
    store.register_module(name, node)?;
    store.initialize_module(name)?;
    Ok(())
}
