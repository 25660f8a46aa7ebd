use std::time::Instant;

use rand::rngs::StdRng;

use crate::assets::{AssetResolver, ImageRef};
use crate::data::{CategoryData, DataStore};
use crate::models::{Category, Screen};
use crate::quiz::NUM_OPTIONS;
use crate::session::{AnswerSession, AnswerState, OptionEmphasis};

const DATE_NOT_PROVIDED: &str = "Non renseignée";
const CONTEXT_NOT_PROVIDED: &str = "Non renseigné";

/// One option slot as the screen draws it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub name: String,
    pub image: ImageRef,
    pub emphasis: OptionEmphasis,
    pub selected: bool,
}

/// Details of the correct answer for the info popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteDetails {
    pub quote: String,
    pub author: String,
    pub date: String,
    pub context: String,
    pub link: Option<String>,
}

/// Owns everything a quiz needs: the loaded data, the running round and
/// the bits of screen state around it.
pub struct App {
    pub screen: Screen,
    store: DataStore,
    session: AnswerSession,
    assets: AssetResolver,
    rng: StdRng,
    selected_option: usize,
    show_info: bool,
    should_quit: bool,
}

impl App {
    pub fn new(assets: AssetResolver, rng: StdRng) -> Self {
        Self {
            screen: Screen::Menu,
            store: DataStore::new(),
            session: AnswerSession::new(),
            assets,
            rng,
            selected_option: 0,
            show_info: false,
            should_quit: false,
        }
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn session(&self) -> &AnswerSession {
        &self.session
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn is_info_open(&self) -> bool {
        self.show_info
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.session.leave();
        self.should_quit = true;
    }

    /// Take in a category that finished loading.
    pub fn install(&mut self, category: Category, data: CategoryData) {
        self.store.install(category, data);
    }

    pub fn start_game(&mut self, now: Instant) {
        self.screen = Screen::Game;
        self.reset_round_view();
        // NoData leaves the session idle with the loading message up.
        let _ = self.session.start_round(&self.store, &mut self.rng, now);
    }

    pub fn back_to_menu(&mut self) {
        self.session.leave();
        self.reset_round_view();
        self.screen = Screen::Menu;
    }

    pub fn tick(&mut self, now: Instant) {
        self.session.tick(now);
    }

    /// Options on screen; fewer than four when the data is thin.
    pub fn option_count(&self) -> usize {
        self.session
            .question()
            .map_or(NUM_OPTIONS, |question| question.option_ids.len())
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count().max(1);
        self.selected_option = (self.selected_option + 1) % count;
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count().max(1);
        self.selected_option = (self.selected_option + count - 1) % count;
    }

    /// Enter/Space: answer with the highlighted option, or move on.
    pub fn submit_selected(&mut self, now: Instant) {
        self.click_option(self.selected_option, now);
    }

    /// A click on option `index`. Once the round can continue, any click
    /// advances it instead.
    pub fn click_option(&mut self, index: usize, now: Instant) {
        match self.session.state() {
            AnswerState::Counting { .. } => {
                self.selected_option = index;
                self.session.option_clicked(index, now);
            }
            _ => self.continue_round(now),
        }
    }

    pub fn continue_round(&mut self, now: Instant) {
        if self.session.continue_requested(&self.store, &mut self.rng, now) {
            self.reset_round_view();
        }
    }

    /// The popup is only offered once the reveal is over.
    pub fn open_info(&mut self, now: Instant) {
        if self.session.can_continue(now) {
            self.show_info = true;
        }
    }

    pub fn close_info(&mut self) {
        self.show_info = false;
    }

    pub fn option_views(&self) -> Vec<OptionView> {
        let Some(question) = self.session.question() else {
            return Vec::new();
        };

        let universe = self.store.id_universe();
        // Distractors sharing an id across sheets were drawn as the other side.
        let distractor_side = question.category().opposite();

        question
            .option_ids
            .iter()
            .enumerate()
            .map(|(index, id)| OptionView {
                name: if *id == question.correct_id {
                    self.store.display_name_in(question.category(), id)
                } else {
                    self.store
                        .display_name_in(universe.origin(id, distractor_side), id)
                },
                image: self.assets.resolve_image(id),
                emphasis: self.session.emphasis(index),
                selected: index == self.selected_option
                    && matches!(self.session.state(), AnswerState::Counting { .. }),
            })
            .collect()
    }

    pub fn quote_details(&self) -> Option<QuoteDetails> {
        let question = self.session.question()?;
        let quote = &question.quote;

        Some(QuoteDetails {
            quote: quote.prompt_text.clone(),
            author: self
                .store
                .display_name_in(question.category(), &question.correct_id),
            date: quote
                .date
                .clone()
                .unwrap_or_else(|| DATE_NOT_PROVIDED.to_string()),
            context: quote
                .context
                .clone()
                .unwrap_or_else(|| CONTEXT_NOT_PROVIDED.to_string()),
            link: quote.source_url.clone(),
        })
    }

    fn reset_round_view(&mut self) {
        self.selected_option = 0;
        self.show_info = false;
    }
}
