use std::fmt;

/// Partition of the quote/person universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Politics,
    PopCulture,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Politics, Category::PopCulture];

    /// The other category.
    pub fn opposite(self) -> Self {
        match self {
            Category::Politics => Category::PopCulture,
            Category::PopCulture => Category::Politics,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Politics => write!(f, "politics"),
            Category::PopCulture => write!(f, "pop-culture"),
        }
    }
}

/// A single attributed quotation. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRecord {
    /// Id of the person the quote is attributed to.
    pub id: String,
    pub prompt_text: String,
    pub category: Category,
    pub date: Option<String>,
    /// Full context paragraph, when the sheet has one.
    pub context: Option<String>,
    /// Only ever an `http://` or `https://` link.
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: Option<String>,
}

impl PersonRecord {
    /// "First Last", or just the first name when there is no last name.
    pub fn display_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        }
    }
}
