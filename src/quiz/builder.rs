use rand::Rng;
use rand::seq::SliceRandom;

use super::{choose_category, pick_quote, sample_distractors};
use crate::data::DataStore;
use crate::models::Question;

/// Reasons a question cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// Neither category has any quotes yet.
    NoData,
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::NoData => write!(f, "no quotes loaded"),
        }
    }
}

impl std::error::Error for BuildError {}

/// Build a fresh question from the current contents of `store`.
///
/// If the drawn category has no quotes the other one is used, so this only
/// fails when the store is entirely empty.
pub fn build_question<R: Rng + ?Sized>(
    store: &DataStore,
    rng: &mut R,
) -> Result<Question, BuildError> {
    let category = choose_category(rng);
    let quote = match pick_quote(store, category, rng) {
        Some(quote) => quote,
        None => pick_quote(store, category.opposite(), rng).ok_or(BuildError::NoData)?,
    };

    let correct_id = quote.id.clone();
    let distractors = sample_distractors(&correct_id, quote.category, &store.id_universe(), rng);

    let mut option_ids = Vec::with_capacity(distractors.len() + 1);
    option_ids.push(correct_id.clone());
    option_ids.extend(distractors);
    // Fisher-Yates.
    option_ids.shuffle(rng);

    log::info!(
        "New {} question for {} ({} options)",
        quote.category,
        correct_id,
        option_ids.len()
    );

    Ok(Question {
        prompt_text: quote.prompt_text.clone(),
        correct_id,
        option_ids,
        quote: quote.clone(),
    })
}
