use scenario_sync_serde::ConfigNode;

use crate::{ApplyError, RegistrationError, SaveError};

/// A scenario module as held by the host state store.
///
/// A module may be listed without a name, or without a loaded payload; such
/// modules are never sent.
pub trait ScenarioModule {
    fn name(&self) -> Option<&str>;

    /// Whether the module currently holds a loaded payload
    fn has_payload(&self) -> bool;

    /// Creates a fresh empty payload if none is present.
    /// Returns `true` if a payload had to be created.
    fn ensure_payload(&mut self) -> bool;

    /// Serializes the loaded payload into structured data
    fn save(&self) -> Result<ConfigNode, SaveError>;

    /// Merges structured data into the loaded payload
    fn load(&mut self, node: &ConfigNode) -> Result<(), ApplyError>;
}

/// The host runtime's ordered collection of scenario modules.
///
/// The sync worker receives one of these at construction and never reaches
/// for global game state itself.
pub trait ScenarioStore {
    type Module: ScenarioModule;

    /// Every module currently registered, in store order
    fn modules<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Self::Module> + 'a>;

    fn module_mut(&mut self, name: &str) -> Option<&mut Self::Module>;

    /// Creates and registers a module built from `initial`
    fn register_module(&mut self, name: &str, initial: ConfigNode)
        -> Result<(), RegistrationError>;

    /// Runs the host's standard initialization hook on a registered module
    fn initialize_module(&mut self, name: &str) -> Result<(), RegistrationError>;

    fn contains_module(&self, name: &str) -> bool {
        self.modules().any(|module| module.name() == Some(name))
    }
}
