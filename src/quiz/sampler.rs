//! Distractor sampling with a guaranteed cross-category option.

use std::collections::HashSet;

use rand::Rng;

use super::NUM_OPTIONS;
use crate::data::IdUniverse;
use crate::models::Category;

/// Draw up to three distinct wrong answers for `correct_id`.
///
/// When the opposite category has any id other than `correct_id`, one of them
/// is always drawn first so every question mixes both categories. The rest
/// come uniformly from everything left in either category, without
/// replacement. If fewer than three candidates exist the result is shorter;
/// it is never padded.
pub fn sample_distractors<R: Rng + ?Sized>(
    correct_id: &str,
    correct_category: Category,
    universe: &IdUniverse,
    rng: &mut R,
) -> Vec<String> {
    let wanted = NUM_OPTIONS - 1;
    let mut picked: Vec<&str> = Vec::with_capacity(wanted);

    let mut opposite_ids = candidates(universe.ids(correct_category.opposite()), correct_id);
    if !opposite_ids.is_empty() {
        let index = rng.gen_range(0..opposite_ids.len());
        picked.push(opposite_ids.swap_remove(index));
    }

    // An id can show up in both categories; it must only be offered once.
    let mut seen: HashSet<&str> = picked.iter().copied().collect();
    let mut pool: Vec<&str> = candidates(universe.ids(correct_category), correct_id)
        .into_iter()
        .chain(opposite_ids)
        .filter(|id| seen.insert(*id))
        .collect();

    while picked.len() < wanted && !pool.is_empty() {
        let index = rng.gen_range(0..pool.len());
        picked.push(pool.swap_remove(index));
    }

    if picked.len() < wanted {
        log::debug!(
            "Only {} distractors available for {}",
            picked.len(),
            correct_id
        );
    }

    picked.into_iter().map(str::to_string).collect()
}

fn candidates<'a>(ids: &'a [String], correct_id: &str) -> Vec<&'a str> {
    ids.iter()
        .map(String::as_str)
        .filter(|id| *id != correct_id)
        .collect()
}
