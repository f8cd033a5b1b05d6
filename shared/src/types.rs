/// The rule set the local game session is running under
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameMode {
    Sandbox,
    Career,
}

impl GameMode {
    /// Whether progression state (the research module) exists in this mode.
    /// Progression is only ever created, applied or sent when this is true.
    pub fn permits_progression(self) -> bool {
        match self {
            GameMode::Sandbox => false,
            GameMode::Career => true,
        }
    }
}
