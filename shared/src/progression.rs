use scenario_sync_serde::ConfigNode;

/// Name of the research/progression module, which only exists in modes that
/// permit progression
pub const PROGRESSION_MODULE_NAME: &str = "ResearchAndDevelopment";

/// Scenes the progression module is active in
const PROGRESSION_SCENES: &str = "5, 6, 7, 8, 9";

/// Parts unlocked by the starting tech node
const STARTING_PARTS: [&str; 7] = [
    "mk1pod",
    "liquidEngine",
    "solidBooster",
    "fuelTankSmall",
    "trussPiece1x",
    "longAntenna",
    "parachuteSingle",
];

/// Builds the "no progress yet" payload for the progression module: zero
/// science and only the starting tech node available.
///
/// The host does not construct this module in every mode, so it must be
/// synthesized deterministically.
pub fn blank_progression_node(module_name: &str) -> ConfigNode {
    let mut node = ConfigNode::root();
    node.add_value("name", module_name)
        .add_value("scene", PROGRESSION_SCENES)
        .add_value("sci", "0");

    let tech = node.add_node(ConfigNode::new("Tech"));
    tech.add_value("id", "start").add_value("state", "Available");
    for part in STARTING_PARTS {
        tech.add_value("part", part);
    }

    node
}
