use super::{Category, QuoteRecord};

/// One round's question. Built fresh every round and replaced, never mutated.
#[derive(Debug, Clone)]
pub struct Question {
    pub prompt_text: String,
    pub correct_id: String,
    /// Shuffled option ids. Four entries unless the data store is too small.
    pub option_ids: Vec<String>,
    /// The quote the prompt was taken from.
    pub quote: QuoteRecord,
}

impl Question {
    pub fn category(&self) -> Category {
        self.quote.category
    }

    /// Index of the correct id within `option_ids`.
    pub fn correct_index(&self) -> Option<usize> {
        self.option_ids.iter().position(|id| *id == self.correct_id)
    }

    /// True when fewer than four distinct options could be assembled.
    pub fn is_degenerate(&self) -> bool {
        self.option_ids.len() < crate::quiz::NUM_OPTIONS
    }
}
