/// Shown in place of the question while no quotes are loaded.
pub const LOADING_MESSAGE: &str = "Chargement des citations...";

const CORRECT: &str = "Bonne réponse !";
const INCORRECT: &str = "Mauvaise réponse !";
const TIMEOUT: &str = "Temps écoulé !";
const CONTINUE: &str = "Appuyez pour continuer";

/// How a message should be coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Correct,
    Incorrect,
    Neutral,
}

/// Text displayed where the countdown bar was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultMessage {
    pub text: &'static str,
    pub tone: Tone,
}

impl ResultMessage {
    pub fn correct() -> Self {
        Self {
            text: CORRECT,
            tone: Tone::Correct,
        }
    }

    pub fn incorrect() -> Self {
        Self {
            text: INCORRECT,
            tone: Tone::Incorrect,
        }
    }

    pub fn timeout() -> Self {
        Self {
            text: TIMEOUT,
            tone: Tone::Incorrect,
        }
    }

    pub fn press_to_continue() -> Self {
        Self {
            text: CONTINUE,
            tone: Tone::Neutral,
        }
    }
}
