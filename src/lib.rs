//! Versicle - scripture citation scanner for chat messages.
//!
//! Detects citations like "Jn 3:16" in free text, resolves the book and
//! translation against static reference tables, fetches the verse text from
//! a getbible-style JSON API, and formats one reply line per verse. The
//! hosting chat framework delivers message text and channel identity and
//! supplies the per-channel default translation; this crate does the rest.

pub mod citation;
pub mod common;
pub mod config;
pub mod fetch;
pub mod scan;
pub mod tables;

pub use citation::{CanonicalCitation, CitationParser, RawCitation};
pub use common::error::{AppError, ConfigError, FetchError};
pub use fetch::{PassageSource, VerseFetcher, VerseResponse};
pub use scan::CitationScanner;
