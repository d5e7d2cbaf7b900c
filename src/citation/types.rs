//! Citation type definitions.

/// The five raw fields captured from one citation match.
///
/// Fields are returned exactly as matched, untrimmed and case-preserved;
/// the resolver trims and case-folds them. A token that names no known book
/// is still a valid `RawCitation` — the resolver rejects it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawCitation<'t> {
    /// Book token: optional leading digit plus 2+ word characters.
    pub book: &'t str,
    /// Chapter number, 1-3 digits.
    pub chapter: &'t str,
    /// Verse or verse range, e.g. "16" or "16-18".
    pub verse: &'t str,
    /// Trailing verse list, e.g. ",20" in "3:16-18,20". Often empty.
    pub list: &'t str,
    /// Parenthesized translation token, e.g. "(web)".
    pub translation: Option<&'t str>,
}

/// A citation resolved against the reference tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalCitation {
    /// Canonical book name, used in the reply label.
    pub book: &'static str,
    /// Chapter number as cited.
    pub chapter: String,
    /// Passage query string sent to the verse API. Built from the raw
    /// lowercased book token rather than the canonical name, since that is
    /// the token format the upstream API accepts.
    pub passage: String,
    /// Translation code: the cited code when valid, else the caller's
    /// default.
    pub translation: String,
}
