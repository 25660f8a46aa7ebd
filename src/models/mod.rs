mod question;
mod record;

pub use question::Question;
pub use record::{Category, PersonRecord, QuoteRecord};

/// Which screen the terminal is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Game,
}
