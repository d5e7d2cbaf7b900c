//! Reply formatting.

use crate::citation::CanonicalCitation;
use crate::fetch::VerseResponse;

/// Format one reply line per verse in `result`, in ascending verse order.
///
/// Each line carries the canonical book label, the cited chapter, the verse
/// number and text, and the resolved translation code. Lines are yielded
/// lazily so the caller can emit each one as it is produced.
pub fn format_replies<'a>(
    result: &'a VerseResponse,
    citation: &'a CanonicalCitation,
) -> impl Iterator<Item = String> + 'a {
    result.book.iter().flat_map(move |book| {
        book.chapter.iter().map(move |(number, entry)| {
            format!(
                "{} {}: \"{}. {}\" ({})",
                citation.book, citation.chapter, number, entry.verse, citation.translation
            )
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn citation() -> CanonicalCitation {
        CanonicalCitation {
            book: "John",
            chapter: "3".to_string(),
            passage: "jn3:16-18".to_string(),
            translation: "kjv".to_string(),
        }
    }

    fn response(json: &str) -> VerseResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_one_line_per_verse() {
        let result = response(
            r#"{"book": [{"chapter": {
                "16": {"verse": "For God so loved the world..."},
                "17": {"verse": "For God sent not his Son..."},
                "18": {"verse": "He that believeth on him..."}
            }}]}"#,
        );

        let lines: Vec<String> = format_replies(&result, &citation()).collect();
        assert_eq!(lines.len(), result.verse_count());
        assert_eq!(
            lines[0],
            "John 3: \"16. For God so loved the world...\" (kjv)"
        );
        assert!(lines[1].contains("17. For God sent not his Son..."));
        assert!(lines[2].ends_with("(kjv)"));
    }

    #[test]
    fn test_verses_format_in_numeric_order() {
        let result = response(
            r#"{"book": [{"chapter": {
                "10": {"verse": "tenth"},
                "2": {"verse": "second"}
            }}]}"#,
        );

        let lines: Vec<String> = format_replies(&result, &citation()).collect();
        assert!(lines[0].contains("\"2. second\""));
        assert!(lines[1].contains("\"10. tenth\""));
    }

    #[test]
    fn test_empty_result_formats_nothing() {
        let result = response(r#"{"book": []}"#);
        assert_eq!(format_replies(&result, &citation()).count(), 0);
    }
}
