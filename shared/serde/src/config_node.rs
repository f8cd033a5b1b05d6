/// A single `key = value` pair held by a [`ConfigNode`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigValue {
    pub key: String,
    pub value: String,
}

impl ConfigValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A named node in the hierarchical config format.
///
/// Values and child nodes are kept in insertion order and keys may repeat,
/// so `part = a` followed by `part = b` is two distinct values. The root node
/// of a payload has an empty name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigNode {
    name: String,
    values: Vec<ConfigValue>,
    nodes: Vec<ConfigNode>,
}

impl ConfigNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            nodes: Vec::new(),
        }
    }

    /// Creates a nameless root node
    pub fn root() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.nodes.is_empty()
    }

    pub fn values(&self) -> &[ConfigValue] {
        &self.values
    }

    pub fn nodes(&self) -> &[ConfigNode] {
        &self.nodes
    }

    /// Appends a value, keeping any existing values under the same key
    pub fn add_value(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.push(ConfigValue::new(key, value));
        self
    }

    pub fn has_value(&self, key: &str) -> bool {
        self.values.iter().any(|v| v.key == key)
    }

    /// Returns the first value stored under `key`
    pub fn get_value(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.key == key)
            .map(|v| v.value.as_str())
    }

    /// Returns every value stored under `key`, in insertion order
    pub fn get_values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.values
            .iter()
            .filter(move |v| v.key == key)
            .map(|v| v.value.as_str())
    }

    /// Appends a child node and returns a mutable reference to it
    pub fn add_node(&mut self, node: ConfigNode) -> &mut ConfigNode {
        self.nodes.push(node);
        let index = self.nodes.len() - 1;
        &mut self.nodes[index]
    }

    pub fn has_node(&self, name: &str) -> bool {
        self.nodes.iter().any(|n| n.name == name)
    }

    /// Returns the first child node called `name`
    pub fn get_node(&self, name: &str) -> Option<&ConfigNode> {
        self.nodes.iter().find(|n| n.name == name)
    }
}
