use thiserror::Error;

use scenario_sync_serde::DecodeError;

/// Errors raised by a scenario module when it is handed structured data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    /// The module refused the structured data
    #[error("Scenario module '{module}' rejected the applied data: {reason}")]
    Rejected { module: String, reason: String },
}

/// Errors raised by the host store while creating or initializing a module
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A module with this name is already registered
    #[error("Scenario module '{name}' is already registered. Modules must be unique by name")]
    DuplicateName { name: String },

    /// The host store refused to create the module
    #[error("Host store refused to register scenario module '{name}': {reason}")]
    Refused { name: String, reason: String },

    /// The module was created but its initialization hook failed
    #[error("Scenario module '{name}' failed to initialize: {reason}")]
    InitializationFailed { name: String, reason: String },

    /// Initialization was requested for a module the store does not hold
    #[error("Scenario module '{name}' not found in host store")]
    ModuleNotFound { name: String },
}

/// Errors raised while a module serializes its own state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("Scenario module '{module}' failed to save: {reason}")]
    Failed { module: String, reason: String },
}

/// Any local failure that puts the sync worker into degraded mode
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// Inbound payload could not be decoded
    #[error("Scenario '{module}' payload could not be decoded: {source}")]
    Decode {
        module: String,
        #[source]
        source: DecodeError,
    },

    /// Decoded data was rejected by the target module
    #[error("Apply error: {0}")]
    Apply(#[from] ApplyError),

    /// Host store could not create or initialize a module
    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),
}
