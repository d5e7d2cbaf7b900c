//! Citation detection and resolution.
//!
//! `parser` turns free text into raw citation tuples; `resolver` maps a raw
//! tuple onto the reference tables and produces the canonical form used for
//! the outbound lookup and the reply label.

pub mod parser;
pub mod resolver;
pub mod types;

pub use parser::CitationParser;
pub use resolver::resolve;
pub use types::{CanonicalCitation, RawCitation};
