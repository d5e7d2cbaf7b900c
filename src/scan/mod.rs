//! Citation scanning pipeline.
//!
//! `CitationScanner` wires the full flow for one message: parse the text
//! for citations, resolve each against the reference tables, fetch the
//! verses, and emit one formatted reply line per verse. Citations are
//! handled one at a time, each to completion, before the next begins.

pub mod format;

pub use format::format_replies;

use tracing::{debug, error};

use crate::citation::{resolve, CanonicalCitation, CitationParser};
use crate::fetch::{PassageSource, VerseFetcher};

/// Scanner handling the parse -> resolve -> fetch -> format flow.
pub struct CitationScanner<S = VerseFetcher> {
    parser: CitationParser,
    source: S,
}

impl CitationScanner<VerseFetcher> {
    /// Create a scanner backed by the live verse API on `api_host`.
    pub fn new(api_host: impl Into<String>) -> Self {
        Self::with_source(VerseFetcher::new(api_host))
    }
}

impl<S: PassageSource> CitationScanner<S> {
    /// Create a scanner over an arbitrary passage source.
    pub fn with_source(source: S) -> Self {
        Self {
            parser: CitationParser::new(),
            source,
        }
    }

    /// Scan one message and emit a reply line per verse found.
    ///
    /// An unrecognized book drops only that candidate; later citations in
    /// the same message are still processed. Lookup failures are logged and
    /// absorbed; the only user-visible effect of any failure is the absence
    /// of a reply.
    pub async fn handle_message(
        &self,
        text: &str,
        default_translation: &str,
        mut emit: impl FnMut(String),
    ) {
        let resolved: Vec<CanonicalCitation> = self
            .parser
            .parse(text)
            .filter_map(|raw| {
                let citation = resolve(&raw, default_translation);
                if citation.is_none() {
                    debug!(
                        "No book matches '{}', dropping candidate",
                        raw.book.trim()
                    );
                }
                citation
            })
            .collect();

        for citation in resolved {
            match self
                .source
                .lookup(&citation.passage, &citation.translation)
                .await
            {
                Ok(result) => {
                    for line in format_replies(&result, &citation) {
                        emit(line);
                    }
                }
                Err(e) => {
                    error!("Verse lookup for '{}' failed: {}", citation.passage, e);
                }
            }
        }
    }
}
