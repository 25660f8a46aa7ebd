//! In-memory quote and person collections, one pair per category.

use std::collections::{HashMap, HashSet};

use crate::models::{Category, PersonRecord, QuoteRecord};

/// Everything loaded for one category.
#[derive(Debug, Clone, Default)]
pub struct CategoryData {
    pub quotes: Vec<QuoteRecord>,
    pub people: HashMap<String, PersonRecord>,
}

impl CategoryData {
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

/// Deduplicated answer ids of both categories, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdUniverse {
    pub politics: Vec<String>,
    pub pop_culture: Vec<String>,
}

impl IdUniverse {
    pub fn ids(&self, category: Category) -> &[String] {
        match category {
            Category::Politics => &self.politics,
            Category::PopCulture => &self.pop_culture,
        }
    }

    /// Category an option id came from. `preferred` wins when the id is in
    /// both; unknown ids also get `preferred`.
    pub fn origin(&self, id: &str, preferred: Category) -> Category {
        let other = preferred.opposite();
        let in_other = self.ids(other).iter().any(|candidate| candidate == id);
        let in_preferred = self.ids(preferred).iter().any(|candidate| candidate == id);

        if in_other && !in_preferred { other } else { preferred }
    }
}

/// Owner of both category collections.
#[derive(Debug, Default)]
pub struct DataStore {
    politics: CategoryData,
    pop_culture: CategoryData,
    loaded: HashSet<Category>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the collections of `category` with freshly loaded data.
    pub fn install(&mut self, category: Category, data: CategoryData) {
        log::info!(
            "Loaded {} {} quotes, {} people",
            data.quotes.len(),
            category,
            data.people.len()
        );
        *self.category_mut(category) = data;
        self.loaded.insert(category);
    }

    /// True once `category` has been installed, even if it came back empty.
    pub fn is_loaded(&self, category: Category) -> bool {
        self.loaded.contains(&category)
    }

    pub fn quotes(&self, category: Category) -> &[QuoteRecord] {
        &self.category(category).quotes
    }

    /// True when neither category has a single quote.
    pub fn is_empty(&self) -> bool {
        self.politics.is_empty() && self.pop_culture.is_empty()
    }

    /// Snapshot of the answer ids currently loaded. Computed on every call.
    pub fn id_universe(&self) -> IdUniverse {
        IdUniverse {
            politics: unique_ids(&self.politics.quotes),
            pop_culture: unique_ids(&self.pop_culture.quotes),
        }
    }

    /// Person lookup in `category`, falling back to the other category.
    ///
    /// Ids are category-local, so the same id can name two different people.
    pub fn person_in(&self, category: Category, id: &str) -> Option<&PersonRecord> {
        self.category(category)
            .people
            .get(id)
            .or_else(|| self.category(category.opposite()).people.get(id))
    }

    /// Display name for an option id; empty when the person is unknown.
    pub fn display_name_in(&self, category: Category, id: &str) -> String {
        self.person_in(category, id)
            .map(PersonRecord::display_name)
            .unwrap_or_default()
    }

    fn category(&self, category: Category) -> &CategoryData {
        match category {
            Category::Politics => &self.politics,
            Category::PopCulture => &self.pop_culture,
        }
    }

    fn category_mut(&mut self, category: Category) -> &mut CategoryData {
        match category {
            Category::Politics => &mut self.politics,
            Category::PopCulture => &mut self.pop_culture,
        }
    }
}

fn unique_ids(quotes: &[QuoteRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    quotes
        .iter()
        .map(|quote| quote.id.trim())
        .filter(|id| !id.is_empty() && seen.insert(*id))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn quote(id: &str, category: Category) -> QuoteRecord {
        QuoteRecord {
            id: id.to_string(),
            prompt_text: format!("quote by {}", id),
            category,
            date: None,
            context: None,
            source_url: None,
        }
    }

    pub(crate) fn person(id: &str, first: &str, last: Option<&str>) -> PersonRecord {
        PersonRecord {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: last.map(str::to_string),
        }
    }

    pub(crate) fn category_data(ids: &[&str], category: Category) -> CategoryData {
        CategoryData {
            quotes: ids.iter().map(|id| quote(id, category)).collect(),
            people: ids
                .iter()
                .map(|id| (id.to_string(), person(id, &id.to_uppercase(), None)))
                .collect(),
        }
    }

    /// Store with the given ids loaded in each category.
    pub(crate) fn store_with(politics: &[&str], pop_culture: &[&str]) -> DataStore {
        let mut store = DataStore::new();
        store.install(Category::Politics, category_data(politics, Category::Politics));
        store.install(
            Category::PopCulture,
            category_data(pop_culture, Category::PopCulture),
        );
        store
    }

    #[test]
    fn test_empty_store() {
        let store = DataStore::new();
        assert!(store.is_empty());
        assert_eq!(store.id_universe(), IdUniverse::default());
    }

    #[test]
    fn test_id_universe_deduplicates_in_order() {
        let store = store_with(&["p2", "p1", "p2", "p3"], &["c1", "c1"]);
        let universe = store.id_universe();
        assert_eq!(universe.politics, vec!["p2", "p1", "p3"]);
        assert_eq!(universe.pop_culture, vec!["c1"]);
    }

    #[test]
    fn test_id_universe_reflects_later_install() {
        let mut store = store_with(&["p1"], &[]);
        assert!(store.id_universe().pop_culture.is_empty());

        store.install(
            Category::PopCulture,
            category_data(&["c1", "c2"], Category::PopCulture),
        );
        assert_eq!(store.id_universe().pop_culture, vec!["c1", "c2"]);
    }

    #[test]
    fn test_person_lookup_starts_in_category_of_origin() {
        let mut store = DataStore::new();
        let mut politics = category_data(&["x"], Category::Politics);
        politics
            .people
            .insert("x".to_string(), person("x", "Jean", Some("Jaurès")));
        let mut pop = category_data(&["x", "c1"], Category::PopCulture);
        pop.people.insert("x".to_string(), person("x", "Obélix", None));
        store.install(Category::Politics, politics);
        store.install(Category::PopCulture, pop);

        assert_eq!(store.display_name_in(Category::PopCulture, "x"), "Obélix");
        assert_eq!(store.display_name_in(Category::Politics, "x"), "Jean Jaurès");
    }

    #[test]
    fn test_person_lookup_falls_back_to_other_category() {
        let store = store_with(&["p1"], &["c1"]);
        assert_eq!(store.display_name_in(Category::Politics, "c1"), "C1");
        assert_eq!(store.display_name_in(Category::PopCulture, "p1"), "P1");
    }

    #[test]
    fn test_origin_of_option_ids() {
        let store = store_with(&["p1", "x"], &["c1", "x"]);
        let universe = store.id_universe();

        assert_eq!(universe.origin("p1", Category::PopCulture), Category::Politics);
        assert_eq!(universe.origin("c1", Category::Politics), Category::PopCulture);
        assert_eq!(universe.origin("x", Category::PopCulture), Category::PopCulture);
        assert_eq!(universe.origin("unknown", Category::Politics), Category::Politics);
    }

    #[test]
    fn test_loaded_tracks_installs() {
        let mut store = DataStore::new();
        assert!(!store.is_loaded(Category::Politics));

        store.install(Category::Politics, CategoryData::default());
        assert!(store.is_loaded(Category::Politics));
        assert!(!store.is_loaded(Category::PopCulture));
        assert!(store.is_empty());
    }

    #[test]
    fn test_unknown_person_has_empty_name() {
        let store = store_with(&["p1"], &["c1"]);
        assert!(store.person_in(Category::Politics, "nobody").is_none());
        assert_eq!(store.display_name_in(Category::PopCulture, "nobody"), "");
    }
}
