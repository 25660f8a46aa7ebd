//! # quote-quiz
//!
//! A timed "who said it?" quiz for the terminal. Each round shows a quote
//! from either a politics or a pop-culture sheet and four people to pick
//! from, with at least one option from the other sheet.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quote_quiz::{Config, Game, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let game = Game::new(Config::default());
//!     game.run().await
//! }
//! ```

mod app;
mod assets;
mod data;
mod models;
mod quiz;
mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::layout::Rect;
use tokio::sync::mpsc;

pub use app::{App, OptionView, QuoteDetails};
pub use assets::{AssetResolver, ImageRef};
pub use data::{CategoryData, CategorySource, DataStore, IdUniverse, LoadError, load_category};
pub use models::{Category, PersonRecord, Question, QuoteRecord, Screen};
pub use quiz::{BuildError, NUM_OPTIONS, build_question, choose_category, pick_quote, sample_distractors};
pub use session::{AnswerSession, AnswerState, Countdown, OptionEmphasis, ResultMessage};

use session::TICK_INTERVAL;

const DEFAULT_DATA_DIR: &str = "data/spreadsheet";
const DEFAULT_PHOTOS_DIR: &str = "data/photos";

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Terminal IO error during quiz execution.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// Where the data lives and how to seed the rounds.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub photos_dir: PathBuf,
    /// Fixed seed for reproducible rounds.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            photos_dir: PathBuf::from(DEFAULT_PHOTOS_DIR),
            seed: None,
        }
    }
}

/// A quiz instance that can be run in the terminal.
pub struct Game {
    app: App,
    sources: Vec<CategorySource>,
}

impl Game {
    pub fn new(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let sources = Category::ALL
            .iter()
            .map(|category| CategorySource::in_dir(*category, &config.data_dir))
            .collect();

        Self {
            app: App::new(AssetResolver::new(&config.photos_dir), rng),
            sources,
        }
    }

    /// Run the quiz in the terminal.
    ///
    /// Both categories start loading in the background straight away; the
    /// menu is usable before they finish. Returns when the user quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        for source in self.sources.drain(..) {
            let tx = tx.clone();
            tokio::spawn(async move {
                let data = load_category(&source).await;
                let _ = tx.send((source.category, data));
            });
        }

        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app, &mut rx);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut App,
    loaded: &mut mpsc::UnboundedReceiver<(Category, CategoryData)>,
) -> Result<(), QuizError> {
    while !app.should_quit() {
        while let Ok((category, data)) = loaded.try_recv() {
            app.install(category, data);
        }

        let now = Instant::now();
        app.tick(now);
        terminal.draw(|frame| ui::render(frame, app, now))?;

        if !event::poll(TICK_INTERVAL)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                handle_key(app, key.code, Instant::now());
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let (width, height) = crossterm::terminal::size()?;
                let area = Rect::new(0, 0, width, height);
                handle_click(app, area, mouse.column, mouse.row, Instant::now());
            }
            _ => {}
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, key: KeyCode, now: Instant) {
    match app.screen {
        Screen::Menu => handle_menu_input(app, key, now),
        Screen::Game => handle_game_input(app, key, now),
    }
}

fn handle_menu_input(app: &mut App, key: KeyCode, now: Instant) {
    match key {
        KeyCode::Enter | KeyCode::Char(' ') => app.start_game(now),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}

fn handle_game_input(app: &mut App, key: KeyCode, now: Instant) {
    if app.is_info_open() {
        app.close_info();
        return;
    }

    match key {
        KeyCode::Char(c @ '1'..='4') => app.click_option(c as usize - '1' as usize, now),
        KeyCode::Char(c @ 'a'..='d') => app.click_option(c as usize - 'a' as usize, now),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_selected(now),
        KeyCode::Char('i') => app.open_info(now),
        KeyCode::Esc => app.back_to_menu(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

fn handle_click(app: &mut App, area: Rect, column: u16, row: u16, now: Instant) {
    match app.screen {
        Screen::Menu => app.start_game(now),
        Screen::Game if app.is_info_open() => app.close_info(),
        Screen::Game => match ui::option_at(area, column, row) {
            Some(index) => app.click_option(index, now),
            None if app.session().can_continue(now) => app.continue_round(now),
            None => {}
        },
    }
}
