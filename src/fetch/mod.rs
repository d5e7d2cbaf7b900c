//! Outbound verse lookup.
//!
//! `client` speaks to the getbible-style JSON endpoint; `response` models
//! the verse tree it returns. The `PassageSource` trait is the seam that
//! lets the scanner run against a fake source in tests.

pub mod client;
pub mod response;

pub use client::{PassageSource, VerseFetcher, DEFAULT_API_HOST};
pub use response::{BookResult, VerseEntry, VerseResponse};
