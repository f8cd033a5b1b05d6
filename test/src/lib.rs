
pub use helpers::*;

#[doc(hidden)]
pub fn __modules(store: &TestStore) -> Vec<String> {
    use scenario_sync_shared::{ScenarioModule, ScenarioStore};

    store
        .modules()
        .filter_map(|module| module.name().map(str::to_string))
        .collect()
}
