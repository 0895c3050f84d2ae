use serde::Serialize;

pub const MSG_NO_ACTIVE_GAME: &str = "No active game";
pub const MSG_CORRECT: &str = "Correct! Well done!";
pub const MSG_INCORRECT: &str = "Incorrect. Try again!";

/// Result of evaluating one guess, returned to the client as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessVerdict {
    pub correct: bool,
    pub message: String,
}

impl GuessVerdict {
    pub fn no_active_game() -> Self {
        Self {
            correct: false,
            message: MSG_NO_ACTIVE_GAME.to_string(),
        }
    }

    pub fn correct() -> Self {
        Self {
            correct: true,
            message: MSG_CORRECT.to_string(),
        }
    }

    pub fn incorrect() -> Self {
        Self {
            correct: false,
            message: MSG_INCORRECT.to_string(),
        }
    }
}
