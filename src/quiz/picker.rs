use rand::Rng;
use rand::seq::SliceRandom;

use crate::data::DataStore;
use crate::models::{Category, QuoteRecord};

/// Uniformly random quote of `category`, or `None` if that collection is empty.
pub fn pick_quote<'a, R: Rng + ?Sized>(
    store: &'a DataStore,
    category: Category,
    rng: &mut R,
) -> Option<&'a QuoteRecord> {
    store.quotes(category).choose(rng)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::data::tests::store_with;

    #[test]
    fn test_empty_category_yields_none() {
        let store = store_with(&["p1"], &[]);
        let mut rng = StdRng::seed_from_u64(3);
        assert!(pick_quote(&store, Category::PopCulture, &mut rng).is_none());
    }

    #[test]
    fn test_pick_stays_in_category() {
        let store = store_with(&["p1", "p2", "p3"], &["c1"]);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..100 {
            let quote = pick_quote(&store, Category::Politics, &mut rng).unwrap();
            assert_eq!(quote.category, Category::Politics);
            assert!(["p1", "p2", "p3"].contains(&quote.id.as_str()));
        }
    }

    #[test]
    fn test_pick_reaches_every_quote() {
        let store = store_with(&["p1", "p2", "p3"], &[]);
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            seen.insert(pick_quote(&store, Category::Politics, &mut rng).unwrap().id.clone());
        }
        assert_eq!(seen.len(), 3);
    }
}
