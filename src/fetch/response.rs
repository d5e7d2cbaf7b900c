//! Typed model of the verse API response.
//!
//! The upstream returns a loosely-typed tree of books and chapters; this
//! module pins the fields the formatter consumes and ignores the rest.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// A parsed verse lookup result: zero or more books, each carrying a
/// verse-number-keyed chapter map. Not mutated after construction.
#[derive(Debug, Clone, Deserialize)]
pub struct VerseResponse {
    #[serde(default)]
    pub book: Vec<BookResult>,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// One book entry in a lookup result.
#[derive(Debug, Clone, Deserialize)]
pub struct BookResult {
    #[serde(default)]
    pub book_name: Option<String>,
    /// Verses keyed by number. The wire format keys this map with decimal
    /// strings; they are parsed to `u32` so iteration is in ascending
    /// numeric order rather than lexicographic.
    #[serde(default, deserialize_with = "numeric_verse_map")]
    pub chapter: BTreeMap<u32, VerseEntry>,
}

/// A single verse.
#[derive(Debug, Clone, Deserialize)]
pub struct VerseEntry {
    pub verse: String,
}

impl VerseResponse {
    /// Total verse count across all books.
    pub fn verse_count(&self) -> usize {
        self.book.iter().map(|book| book.chapter.len()).sum()
    }

    /// Strip CRLF pairs from every verse so each formats as a single line.
    pub(crate) fn normalize(mut self) -> Self {
        for book in &mut self.book {
            for entry in book.chapter.values_mut() {
                if entry.verse.contains("\r\n") {
                    entry.verse = entry.verse.replace("\r\n", "");
                }
            }
        }
        self
    }
}

fn numeric_verse_map<'de, D>(deserializer: D) -> Result<BTreeMap<u32, VerseEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let keyed = BTreeMap::<String, VerseEntry>::deserialize(deserializer)?;
    keyed
        .into_iter()
        .map(|(key, entry)| {
            let number = key
                .trim()
                .parse::<u32>()
                .map_err(|_| serde::de::Error::custom(format!("non-numeric verse key '{key}'")))?;
            Ok((number, entry))
        })
        .collect()
}
