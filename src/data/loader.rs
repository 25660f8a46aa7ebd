//! CSV ingestion for the quote and person sheets.
//!
//! Each category is described by two files: a people sheet (`id`, `prenom`,
//! `nom`) and a quotes sheet (`id`, `citation_courte`, `contexte_complet`,
//! `date`, `source_url`, `source`). Sheets exported by spreadsheet tools use
//! either `,` or `;` as delimiter, so the delimiter is sniffed from the header.
//!
//! Loading never fails from the caller's point of view: a category whose
//! files cannot be read or parsed comes back empty and the failure is logged.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::store::CategoryData;
use crate::models::{Category, PersonRecord, QuoteRecord};

const UNAVAILABLE_QUOTE: &str = "Citation non disponible";

/// Error type for reading a category from disk.
#[derive(Debug)]
pub enum LoadError {
    /// A sheet could not be read.
    Io(io::Error),
    /// A sheet is not valid CSV.
    Csv(csv::Error),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "IO error: {}", e),
            LoadError::Csv(e) => write!(f, "CSV error: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Csv(e) => Some(e),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        LoadError::Csv(err)
    }
}

/// Where the two sheets of a category live.
#[derive(Debug, Clone)]
pub struct CategorySource {
    pub category: Category,
    pub people: PathBuf,
    pub quotes: PathBuf,
}

impl CategorySource {
    /// Standard file names for `category` inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(category: Category, dir: P) -> Self {
        let dir = dir.as_ref();
        let (people, quotes) = match category {
            Category::Politics => ("politiques.csv", "politiques_citations.csv"),
            Category::PopCulture => ("personnages.csv", "personnages_citations.csv"),
        };
        Self {
            category,
            people: dir.join(people),
            quotes: dir.join(quotes),
        }
    }
}

#[derive(Debug, Deserialize)]
struct QuoteRow {
    #[serde(default)]
    id: String,
    #[serde(default)]
    citation_courte: String,
    #[serde(default)]
    contexte_complet: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    source_url: String,
    #[serde(default)]
    source: String,
}

impl QuoteRow {
    fn into_record(self, category: Category) -> QuoteRecord {
        let prompt_text = [&self.citation_courte, &self.contexte_complet]
            .into_iter()
            .find(|text| !text.is_empty())
            .cloned()
            .unwrap_or_else(|| UNAVAILABLE_QUOTE.to_string());

        let link = if self.source_url.is_empty() {
            self.source
        } else {
            self.source_url
        };

        QuoteRecord {
            id: self.id,
            prompt_text,
            category,
            date: non_empty(self.date),
            context: non_empty(self.contexte_complet),
            source_url: Some(link).filter(|link| is_http_url(link)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PersonRow {
    #[serde(default)]
    id: String,
    #[serde(default)]
    prenom: String,
    #[serde(default)]
    nom: String,
}

/// Read both sheets of a category. Failures yield an empty category.
pub async fn load_category(source: &CategorySource) -> CategoryData {
    match try_load_category(source).await {
        Ok(data) => data,
        Err(e) => {
            log::warn!("Failed to load {} data: {}", source.category, e);
            CategoryData::default()
        }
    }
}

async fn try_load_category(source: &CategorySource) -> Result<CategoryData, LoadError> {
    let (people, quotes) = tokio::try_join!(
        tokio::fs::read(&source.people),
        tokio::fs::read(&source.quotes)
    )?;

    Ok(CategoryData {
        quotes: parse_quotes(&quotes, source.category)?,
        people: parse_people(&people)?,
    })
}

/// Parse a quotes sheet. Rows without an id are dropped.
pub fn parse_quotes(bytes: &[u8], category: Category) -> Result<Vec<QuoteRecord>, LoadError> {
    let rows: Vec<QuoteRow> = parse_rows(bytes)?;
    Ok(rows
        .into_iter()
        .filter(|row| !row.id.is_empty())
        .map(|row| row.into_record(category))
        .collect())
}

/// Parse a people sheet into an id lookup. Rows without an id are dropped.
pub fn parse_people(bytes: &[u8]) -> Result<HashMap<String, PersonRecord>, LoadError> {
    let rows: Vec<PersonRow> = parse_rows(bytes)?;
    Ok(rows
        .into_iter()
        .filter(|row| !row.id.is_empty())
        .map(|row| {
            let person = PersonRecord {
                id: row.id.clone(),
                first_name: row.prenom,
                last_name: non_empty(row.nom),
            };
            (row.id, person)
        })
        .collect())
}

fn parse_rows<T: for<'de> Deserialize<'de>>(bytes: &[u8]) -> Result<Vec<T>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(detect_delimiter(bytes))
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(bytes);

    let headers: csv::StringRecord = reader
        .byte_headers()?
        .iter()
        .map(String::from_utf8_lossy)
        .collect();
    let mut rows = Vec::new();

    // Fields are decoded lossily so a stray Latin-1 byte costs one character.
    for (line, record) in reader.byte_records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                log::warn!("Skipping row {}: {}", line + 2, e);
                continue;
            }
        };
        if record.len() < headers.len() {
            log::warn!(
                "Skipping row {}: {} fields, expected {}",
                line + 2,
                record.len(),
                headers.len()
            );
            continue;
        }

        let record: csv::StringRecord = record
            .iter()
            .take(headers.len())
            .map(String::from_utf8_lossy)
            .collect();
        match record.deserialize(Some(&headers)) {
            Ok(row) => rows.push(row),
            Err(e) => log::warn!("Skipping row {}: {}", line + 2, e),
        }
    }

    Ok(rows)
}

/// `;` when the header line has more semicolons than commas, `,` otherwise.
fn detect_delimiter(bytes: &[u8]) -> u8 {
    let header = bytes.split(|b| *b == b'\n').next().unwrap_or_default();
    let commas = header.iter().filter(|b| **b == b',').count();
    let semicolons = header.iter().filter(|b| **b == b';').count();

    if semicolons > commas { b';' } else { b',' }
}

fn non_empty(value: String) -> Option<String> {
    Some(value).filter(|v| !v.is_empty())
}

fn is_http_url(link: &str) -> bool {
    let lower = link.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter(b"id;prenom;nom\n1;a;b"), b';');
        assert_eq!(detect_delimiter(b"id,prenom,nom\n1;a;b"), b',');
        assert_eq!(detect_delimiter(b"id\n"), b',');
        assert_eq!(detect_delimiter(b""), b',');
    }

    #[test]
    fn test_parse_people_semicolon() {
        let sheet = "id;prenom;nom;genre;parti\n\
                     p1; Simone ;Veil;F;UDF\n\
                     p2;Coluche;;M;\n\
                     ;Nobody;Here;;\n";
        let people = parse_people(sheet.as_bytes()).unwrap();

        assert_eq!(people.len(), 2);
        assert_eq!(people["p1"].display_name(), "Simone Veil");
        assert_eq!(people["p2"].last_name, None);
        assert_eq!(people["p2"].display_name(), "Coluche");
    }

    #[test]
    fn test_parse_quotes_prompt_fallbacks() {
        let sheet = "id,citation_courte,contexte_complet,date,source_url\n\
                     p1,\"Short, with comma\",Long context,1974,https://example.org/a\n\
                     p2,,Only context,,\n\
                     p3,,,,not a link\n";
        let quotes = parse_quotes(sheet.as_bytes(), Category::Politics).unwrap();

        assert_eq!(quotes.len(), 3);
        assert_eq!(quotes[0].prompt_text, "Short, with comma");
        assert_eq!(quotes[0].context.as_deref(), Some("Long context"));
        assert_eq!(quotes[0].date.as_deref(), Some("1974"));
        assert_eq!(quotes[0].source_url.as_deref(), Some("https://example.org/a"));

        assert_eq!(quotes[1].prompt_text, "Only context");
        assert_eq!(quotes[1].date, None);

        assert_eq!(quotes[2].prompt_text, UNAVAILABLE_QUOTE);
        assert_eq!(quotes[2].source_url, None);
        assert!(quotes.iter().all(|q| q.category == Category::Politics));
    }

    #[test]
    fn test_parse_quotes_source_column_fallback() {
        let sheet = "id;citation_courte;source\nc1;Hello;HTTPS://example.org/b\n";
        let quotes = parse_quotes(sheet.as_bytes(), Category::PopCulture).unwrap();
        assert_eq!(quotes[0].source_url.as_deref(), Some("HTTPS://example.org/b"));
    }

    #[test]
    fn test_parse_quotes_skips_short_and_blank_rows() {
        let sheet = "id,citation_courte,date\n\
                     p1,Kept,2001\n\
                     p2,Too short\n\
                     ,No id,1999\n";
        let quotes = parse_quotes(sheet.as_bytes(), Category::Politics).unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].id, "p1");
    }

    #[test]
    fn test_parse_quotes_keeps_rows_around_invalid_utf8() {
        let sheet = b"id,citation_courte\np1,Good row\np2,Caf\xE9\np3,Another good row\n";
        let quotes = parse_quotes(sheet, Category::Politics).unwrap();

        assert_eq!(quotes.len(), 3);
        assert_eq!(quotes[0].prompt_text, "Good row");
        assert_eq!(quotes[1].prompt_text, "Caf\u{FFFD}");
        assert_eq!(quotes[2].prompt_text, "Another good row");
    }

    #[test]
    fn test_parse_empty_sheet() {
        assert!(parse_quotes(b"", Category::Politics).unwrap().is_empty());
        assert!(parse_people(b"id,prenom,nom\n").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_files_load_as_empty() {
        let source = CategorySource::in_dir(Category::PopCulture, "/nonexistent/quote-quiz");
        let data = load_category(&source).await;
        assert!(data.is_empty());
        assert!(data.people.is_empty());
    }

    #[test]
    fn test_category_source_file_names() {
        let source = CategorySource::in_dir(Category::Politics, "data");
        assert!(source.people.ends_with("politiques.csv"));
        assert!(source.quotes.ends_with("politiques_citations.csv"));
    }
}
