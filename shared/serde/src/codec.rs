use crate::{ConfigNode, DecodeError, NodeReader, NodeWriter};

/// Turns structured module data into payload bytes and back.
///
/// The worker only ever talks to this seam, so the on-the-wire format can be
/// swapped without touching the sync logic.
pub trait ScenarioCodec {
    fn encode(&self, node: &ConfigNode) -> Vec<u8>;

    fn decode(&self, bytes: &[u8]) -> Result<ConfigNode, DecodeError>;
}

/// The text config format, read and written in memory.
/// `decode(encode(node))` gives back `node` for any tree with a nameless root.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextCodec;

impl ScenarioCodec for TextCodec {
    fn encode(&self, node: &ConfigNode) -> Vec<u8> {
        let mut writer = NodeWriter::new();
        writer.write_contents(node);
        writer.to_bytes()
    }

    fn decode(&self, bytes: &[u8]) -> Result<ConfigNode, DecodeError> {
        NodeReader::new(bytes).read()
    }
}
