use crate::{
    escape::{escape, Field},
    ConfigNode,
};

/// Writes a [`ConfigNode`] tree out in the text config format.
/// The buffer grows as needed; nodes are written values first, then child
/// nodes, each level indented by one tab. Keys, values and node names are
/// escaped, so any tree reads back unchanged.
pub struct NodeWriter {
    buffer: Vec<u8>,
    depth: usize,
}

impl NodeWriter {
    pub fn new() -> Self {
        Self {
            buffer: Vec::with_capacity(1024),
            depth: 0,
        }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push(b'\t');
        }
    }

    fn write_line(&mut self, line: &str) {
        self.write_indent();
        self.buffer.extend_from_slice(line.as_bytes());
        self.buffer.push(b'\n');
    }

    /// Writes the contents of `node` at the current depth. The node's own
    /// name is not written, which is how a payload root is stored.
    pub fn write_contents(&mut self, node: &ConfigNode) {
        for value in node.values() {
            let line = format!(
                "{} = {}",
                escape(&value.key, Field::Key),
                escape(&value.value, Field::Value)
            );
            self.write_line(&line);
        }
        for child in node.nodes() {
            self.write_node(child);
        }
    }

    /// Writes `node` as a named block
    pub fn write_node(&mut self, node: &ConfigNode) {
        self.write_line(&escape(node.name(), Field::NodeName));
        self.write_line("{");
        self.depth += 1;
        self.write_contents(node);
        self.depth -= 1;
        self.write_line("}");
    }

    pub fn to_bytes(self) -> Vec<u8> {
        self.buffer
    }
}

impl Default for NodeWriter {
    fn default() -> Self {
        Self::new()
    }
}
