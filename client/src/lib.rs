//! # Scenario Sync Client
//! A worker that keeps the local collection of scenario modules in sync with a
//! remote peer: local modules are pushed on a fixed interval, and inbound
//! updates are queued and merged into local state on demand.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod inbound_queue;
mod sync_config;
mod sync_events;
mod worker;

pub use inbound_queue::{EntrySender, InboundQueue};
pub use sync_config::{OverflowPolicy, SyncConfig};
pub use sync_events::{DrainReport, FlushReport};
pub use worker::{ScenarioSyncWorker, SyncState};
