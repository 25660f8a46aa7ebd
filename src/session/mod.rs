//! Per-round answer lifecycle.

mod answer;
mod countdown;
mod messages;

pub use answer::{AnswerSession, AnswerState, GRACE_DELAY, OptionEmphasis};
pub use countdown::{COUNTDOWN_DURATION, Countdown, TICK_INTERVAL, bar_color};
pub use messages::{LOADING_MESSAGE, ResultMessage, Tone};
