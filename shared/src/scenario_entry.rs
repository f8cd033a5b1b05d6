/// One inbound scenario update as delivered by the transport.
/// Entries have no identity beyond their queue position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScenarioEntry {
    pub name: String,
    pub data: Vec<u8>,
}

impl ScenarioEntry {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}
