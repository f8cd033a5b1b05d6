//! # Scenario Sync Serde
//! The hierarchical text config format scenario modules are persisted in, and
//! the codec seam the sync worker uses to turn modules into bytes and back.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod codec;
mod config_node;
mod error;
mod escape;
mod node_reader;
mod node_writer;

pub use codec::{ScenarioCodec, TextCodec};
pub use config_node::{ConfigNode, ConfigValue};
pub use error::DecodeError;
pub use node_reader::NodeReader;
pub use node_writer::NodeWriter;
