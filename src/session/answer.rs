//! Answer state machine for a single round.
//!
//! ```text
//! Idle --start_round--> Counting --click / expiry--> Revealed
//!   ^                                                   |
//!   +----------- continue_requested (after grace) ------+
//! ```
//!
//! A round accepts at most one terminating input. Whichever of a click or
//! the countdown expiry arrives first wins; everything after it is ignored
//! until the next round starts.

use std::time::{Duration, Instant};

use rand::Rng;

use super::countdown::{COUNTDOWN_DURATION, Countdown};
use super::messages::ResultMessage;
use crate::data::DataStore;
use crate::models::Question;
use crate::quiz::{BuildError, build_question};

/// Pause after the reveal before the round can be continued.
pub const GRACE_DELAY: Duration = Duration::from_millis(1_500);

/// Lifecycle of the active round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerState {
    /// No active question.
    Idle,
    /// Question displayed and countdown running.
    Counting {
        started_at: Instant,
        duration: Duration,
    },
    /// Round over. `chosen_id` is `None` when the countdown ran out.
    Revealed {
        chosen_id: Option<String>,
        correct: bool,
    },
}

/// How an option should be drawn once the round is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionEmphasis {
    /// Round still running.
    Neutral,
    /// Picked and right.
    Correct,
    /// Picked and wrong.
    Incorrect,
    /// Right answer the user did not pick. Border only.
    CorrectOutline,
    /// Not involved.
    Faded,
}

/// Owns the active question, its countdown and the answer state.
#[derive(Debug)]
pub struct AnswerSession {
    state: AnswerState,
    question: Option<Question>,
    countdown: Option<Countdown>,
    continue_at: Option<Instant>,
    waiting_for_data: bool,
}

impl AnswerSession {
    pub fn new() -> Self {
        Self {
            state: AnswerState::Idle,
            question: None,
            countdown: None,
            continue_at: None,
            waiting_for_data: false,
        }
    }

    pub fn state(&self) -> &AnswerState {
        &self.state
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    /// True after a build attempt found no quotes.
    pub fn is_waiting_for_data(&self) -> bool {
        self.waiting_for_data
    }

    /// True while a countdown is running.
    pub fn has_active_countdown(&self) -> bool {
        self.countdown.is_some_and(|countdown| countdown.is_active())
    }

    /// Build a new question and start its countdown.
    ///
    /// Any running countdown is cancelled first. On `NoData` the session
    /// drops back to `Idle`.
    pub fn start_round<R: Rng + ?Sized>(
        &mut self,
        store: &DataStore,
        rng: &mut R,
        now: Instant,
    ) -> Result<&Question, BuildError> {
        self.cancel_countdown();
        self.continue_at = None;

        match build_question(store, rng) {
            Ok(question) => {
                let countdown = Countdown::start(now, COUNTDOWN_DURATION);
                self.state = AnswerState::Counting {
                    started_at: countdown.started_at(),
                    duration: countdown.duration(),
                };
                self.countdown = Some(countdown);
                self.waiting_for_data = false;
                Ok(&*self.question.insert(question))
            }
            Err(e) => {
                log::debug!("Cannot start round: {}", e);
                self.state = AnswerState::Idle;
                self.question = None;
                self.waiting_for_data = true;
                Err(e)
            }
        }
    }

    /// Expire the round if its countdown has run out. Returns true on the
    /// transition; later calls are no-ops.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = matches!(self.state, AnswerState::Counting { .. })
            && self
                .countdown
                .is_some_and(|countdown| countdown.is_expired(now));

        if expired {
            self.reveal(None, false, now);
        }
        expired
    }

    /// Answer with the option at `index`. Returns true if the click was accepted.
    pub fn option_clicked(&mut self, index: usize, now: Instant) -> bool {
        // A click that lands after the deadline loses to the timeout.
        self.tick(now);

        if !matches!(self.state, AnswerState::Counting { .. }) {
            log::debug!("Ignoring click on option {} outside a running round", index);
            return false;
        }

        let Some(question) = &self.question else {
            return false;
        };
        let Some(chosen_id) = question.option_ids.get(index).cloned() else {
            log::debug!("Ignoring click on missing option {}", index);
            return false;
        };

        let correct = chosen_id == question.correct_id;
        self.reveal(Some(chosen_id), correct, now);
        true
    }

    /// True once the round is revealed and the grace delay has passed.
    pub fn can_continue(&self, now: Instant) -> bool {
        matches!(self.state, AnswerState::Revealed { .. })
            && self.continue_at.is_some_and(|at| now >= at)
    }

    /// Advance to the next round.
    ///
    /// Honoured after the grace delay, or from `Idle` to retry a build that
    /// previously found no data. Returns true when a new round started.
    pub fn continue_requested<R: Rng + ?Sized>(
        &mut self,
        store: &DataStore,
        rng: &mut R,
        now: Instant,
    ) -> bool {
        match self.state {
            AnswerState::Idle => {}
            AnswerState::Revealed { .. } if self.can_continue(now) => {
                self.state = AnswerState::Idle;
            }
            _ => return false,
        }

        self.start_round(store, rng, now).is_ok()
    }

    /// Drop the round when the user navigates away from the quiz.
    pub fn leave(&mut self) {
        self.cancel_countdown();
        self.state = AnswerState::Idle;
        self.question = None;
        self.continue_at = None;
    }

    /// Remaining countdown fraction while counting.
    pub fn countdown_fraction(&self, now: Instant) -> Option<f64> {
        match self.state {
            AnswerState::Counting { .. } => self
                .countdown
                .map(|countdown| countdown.fraction_remaining(now)),
            _ => None,
        }
    }

    pub fn emphasis(&self, index: usize) -> OptionEmphasis {
        let (AnswerState::Revealed { chosen_id, .. }, Some(question)) =
            (&self.state, &self.question)
        else {
            return OptionEmphasis::Neutral;
        };
        let Some(id) = question.option_ids.get(index) else {
            return OptionEmphasis::Neutral;
        };

        let is_correct = *id == question.correct_id;
        let is_chosen = chosen_id.as_ref() == Some(id);

        match (is_chosen, is_correct) {
            (true, true) => OptionEmphasis::Correct,
            (true, false) => OptionEmphasis::Incorrect,
            (false, true) => OptionEmphasis::CorrectOutline,
            (false, false) => OptionEmphasis::Faded,
        }
    }

    /// Message for the bar area once revealed.
    pub fn result_message(&self, now: Instant) -> Option<ResultMessage> {
        let AnswerState::Revealed { chosen_id, correct } = &self.state else {
            return None;
        };

        if self.can_continue(now) {
            return Some(ResultMessage::press_to_continue());
        }

        Some(match (chosen_id, correct) {
            (None, _) => ResultMessage::timeout(),
            (Some(_), true) => ResultMessage::correct(),
            (Some(_), false) => ResultMessage::incorrect(),
        })
    }

    fn reveal(&mut self, chosen_id: Option<String>, correct: bool, now: Instant) {
        self.cancel_countdown();
        self.continue_at = Some(now + GRACE_DELAY);

        match &chosen_id {
            Some(id) => log::info!("Answered {} ({})", id, if correct { "correct" } else { "wrong" }),
            None => log::info!("Countdown expired"),
        }

        self.state = AnswerState::Revealed { chosen_id, correct };
    }

    fn cancel_countdown(&mut self) {
        if let Some(mut countdown) = self.countdown.take() {
            countdown.cancel();
        }
    }
}

impl Default for AnswerSession {
    fn default() -> Self {
        Self::new()
    }
}
