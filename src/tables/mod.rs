//! Static reference tables for citation resolution.
//!
//! - `books`: book-alias groups; the last alias in each group is the
//!   canonical name used in reply labels.
//! - `translations`: the translation catalog, grouped by language.
//!
//! Both tables are compile-time constants; nothing mutates them at runtime.

pub mod books;
pub mod translations;

pub use books::BOOKS;
pub use translations::{describe_editions, editions_for, languages, TRANSLATIONS};
