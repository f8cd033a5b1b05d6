//! # Scenario Sync Shared
//! Common functionality shared by scenario sync peers: the inbound entry type,
//! the error taxonomy, and the seams to the host state store and transport.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod error;
mod progression;
mod scenario_entry;
mod store;
mod timestamp;
mod transport;
mod types;

pub use scenario_sync_serde::{
    ConfigNode, ConfigValue, DecodeError, NodeReader, NodeWriter, ScenarioCodec, TextCodec,
};

pub use error::{ApplyError, RegistrationError, SaveError, SyncError};
pub use progression::{blank_progression_node, PROGRESSION_MODULE_NAME};
pub use scenario_entry::ScenarioEntry;
pub use store::{ScenarioModule, ScenarioStore};
pub use timestamp::{MonotonicClock, Timestamp};
pub use transport::ScenarioSender;
pub use types::GameMode;
