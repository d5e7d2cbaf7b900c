//! Raw-citation resolution against the reference tables.

use crate::citation::types::{CanonicalCitation, RawCitation};
use crate::tables;

/// Resolve a raw citation into its canonical form.
///
/// Returns `None` when the book token matches no alias; the caller drops
/// the candidate silently. An absent or unrecognized translation token
/// falls back to `default_translation`, which is trusted as-is.
pub fn resolve(raw: &RawCitation<'_>, default_translation: &str) -> Option<CanonicalCitation> {
    let book_token = raw.book.trim().to_lowercase();
    let chapter = raw.chapter.trim().to_lowercase();
    let verse = raw.verse.trim().to_lowercase();
    let list = raw.list.trim().to_lowercase();

    let book = resolve_book(&book_token)?;

    let translation = raw
        .translation
        .and_then(resolve_translation)
        .unwrap_or_else(|| default_translation.to_string());

    Some(CanonicalCitation {
        book,
        passage: format!("{book_token}{chapter}:{verse}{list}"),
        chapter,
        translation,
    })
}

/// Prefix-match a case-folded book token against the alias groups.
///
/// Groups and aliases are scanned in table order; the first alias whose
/// case-folded form starts with the token selects that group's canonical
/// (last) name. First match wins; there is no longest-match logic.
fn resolve_book(token: &str) -> Option<&'static str> {
    for group in tables::BOOKS {
        for alias in *group {
            if alias.to_lowercase().starts_with(token) {
                return group.last().copied();
            }
        }
    }
    None
}

/// Validate a parenthesized translation token against the catalog.
///
/// The token is accepted verbatim when its case-folded form equals any
/// known code, scanning all languages in table order.
fn resolve_translation(token: &str) -> Option<String> {
    let folded = token.trim().to_lowercase();
    let code = folded.trim_start_matches('(').trim_end_matches(')');
    if code.is_empty() {
        return None;
    }
    for (_, editions) in tables::TRANSLATIONS {
        for (known, _) in *editions {
            if known.to_lowercase() == code {
                return Some(code.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw<'t>(book: &'t str, chapter: &'t str, verse: &'t str) -> RawCitation<'t> {
        RawCitation {
            book,
            chapter,
            verse,
            list: "",
            translation: None,
        }
    }

    #[test]
    fn test_short_alias_resolves_to_canonical_name() {
        let citation = resolve(&raw("Jn ", "3", "16"), "kjv").unwrap();
        assert_eq!(citation.book, "John");
        assert_eq!(citation.chapter, "3");
        assert_eq!(citation.passage, "jn3:16");
        assert_eq!(citation.translation, "kjv");
    }

    #[test]
    fn test_prefix_of_full_name_resolves() {
        let citation = resolve(&raw("Gene", "1", "1"), "kjv").unwrap();
        assert_eq!(citation.book, "Genesis");
    }

    #[test]
    fn test_resolution_is_case_insensitive() {
        assert_eq!(resolve(&raw("JN", "3", "16"), "kjv").unwrap().book, "John");
        assert_eq!(resolve(&raw("psm", "23", "1"), "kjv").unwrap().book, "Psalms");
    }

    #[test]
    fn test_numbered_book_resolves() {
        let citation = resolve(&raw("1Jn", "4", "8"), "kjv").unwrap();
        assert_eq!(citation.book, "1John");
        assert_eq!(citation.passage, "1jn4:8");
    }

    #[test]
    fn test_first_group_wins() {
        // "jo" prefixes Job, John, Jonah and Joshua; Job comes first in
        // table order and there is no longest-match logic.
        let citation = resolve(&raw("jo", "1", "1"), "kjv").unwrap();
        assert_eq!(citation.book, "Job");
    }

    #[test]
    fn test_unknown_book_yields_none() {
        assert!(resolve(&raw("asdf", "1", "1"), "kjv").is_none());
        assert!(resolve(&raw("zz", "3", "16"), "kjv").is_none());
    }

    #[test]
    fn test_valid_translation_override() {
        let citation = resolve(
            &RawCitation {
                book: "Gn",
                chapter: "1",
                verse: "1",
                list: "",
                translation: Some("(web)"),
            },
            "kjv",
        )
        .unwrap();
        assert_eq!(citation.translation, "web");
    }

    #[test]
    fn test_translation_token_is_case_folded() {
        let citation = resolve(
            &RawCitation {
                book: "Gn",
                chapter: "1",
                verse: "1",
                list: "",
                translation: Some("(WEB)"),
            },
            "kjv",
        )
        .unwrap();
        assert_eq!(citation.translation, "web");
    }

    #[test]
    fn test_unknown_translation_falls_back_to_default() {
        let citation = resolve(
            &RawCitation {
                book: "Gn",
                chapter: "1",
                verse: "1",
                list: "",
                translation: Some("(nope)"),
            },
            "synodal",
        )
        .unwrap();
        assert_eq!(citation.translation, "synodal");
    }

    #[test]
    fn test_empty_translation_token_falls_back() {
        let citation = resolve(
            &RawCitation {
                book: "Gn",
                chapter: "1",
                verse: "1",
                list: "",
                translation: Some("()"),
            },
            "kjv",
        )
        .unwrap();
        assert_eq!(citation.translation, "kjv");
    }

    #[test]
    fn test_passage_includes_range_and_list() {
        let citation = resolve(
            &RawCitation {
                book: "Jn ",
                chapter: "3",
                verse: "16-18",
                list: ",20 ",
                translation: None,
            },
            "kjv",
        )
        .unwrap();
        assert_eq!(citation.passage, "jn3:16-18,20");
    }
}
