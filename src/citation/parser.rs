//! Citation pattern matching.
//!
//! One five-group expression is scanned over the message text. Matching is
//! leftmost, non-overlapping, and greedy; overlapping candidates are decided
//! by the match engine and not special-cased here.

use fancy_regex::Regex;
use tracing::warn;

use crate::citation::types::RawCitation;

/// The citation pattern, one capture group per field:
/// book token, chapter, verse-or-range, trailing verse list, and an
/// optional parenthesized translation token.
const CITATION_PATTERN: &str = concat!(
    r"([\d]?[\s]*[a-zA-Z]{2,}[\s]*)",
    r"([\d]{1,3})[:]{1}",
    r"([\d]{1,3}[-]?[\s]*[\d]{0,3})",
    r"([\d\s,;:-]*)",
    r"(\([a-zA-Z]*\))?",
);

/// Citation parser holding the compiled pattern.
#[derive(Debug, Clone)]
pub struct CitationParser {
    regex: Regex,
}

impl Default for CitationParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CitationParser {
    pub fn new() -> Self {
        Self {
            regex: Regex::new(CITATION_PATTERN).unwrap(),
        }
    }

    /// Scan `text` for citation-shaped substrings.
    ///
    /// The returned iterator is lazy and restartable: each call performs one
    /// fresh pass, and re-parsing the same text yields identical results.
    pub fn parse<'a>(&'a self, text: &'a str) -> impl Iterator<Item = RawCitation<'a>> + 'a {
        self.regex.captures_iter(text).filter_map(|captures| {
            let captures = match captures {
                Ok(captures) => captures,
                Err(e) => {
                    warn!("Citation match error: {}", e);
                    return None;
                }
            };
            let field = |i: usize| captures.get(i).map_or("", |m| m.as_str());
            Some(RawCitation {
                book: field(1),
                chapter: field(2),
                verse: field(3),
                list: field(4),
                translation: captures.get(5).map(|m| m.as_str()),
            })
        })
    }
}
