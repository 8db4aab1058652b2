use serde::Serialize;

/// Session-wide game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    Start,
    Playing,
    Paused,
    GameOver,
}

/// Requests that may move the phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseCommand {
    /// Begin a fresh run (Enter on the title or game-over screen).
    Start,
    Pause,
    Resume,
    /// End the run from the pause screen.
    Finish,
    /// Lives ran out.
    Exhaust,
}

impl GamePhase {
    /// The phase transition function. `None` means the command does not apply.
    pub fn apply(self, command: PhaseCommand) -> Option<GamePhase> {
        use GamePhase::*;
        match (self, command) {
            (Start | GameOver, PhaseCommand::Start) => Some(Playing),
            (Playing, PhaseCommand::Pause) => Some(Paused),
            (Paused, PhaseCommand::Resume) => Some(Playing),
            (Paused, PhaseCommand::Finish) => Some(GameOver),
            (Playing, PhaseCommand::Exhaust) => Some(GameOver),
            _ => None,
        }
    }

    /// Stable numeric code used in game events.
    pub fn code(self) -> u32 {
        match self {
            GamePhase::Start => 0,
            GamePhase::Playing => 1,
            GamePhase::Paused => 2,
            GamePhase::GameOver => 3,
        }
    }
}
