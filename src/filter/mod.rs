//! Filter engine: query compilation and predicate evaluation.
//!
//! Compiles GitHub-style filter syntax into a [`Predicate`]:
//! - `class:axon` - Filter by classification (exact, case-insensitive)
//! - `class:axon,dendrite` - Filter by classifications (OR logic)
//! - `tag:reviewed` - Filter by tag (AND with other clauses)
//! - `-tag:draft` - Exclude annotations with tag
//! - `author:mika` - Filter by author
//! - `"branch point"` - Free-text phrase match against note, class,
//!   author, tags
//! - bare words - Free-text match, case-insensitive
//!
//! `=` is accepted as a synonym for `:` (`class=axon`). Clauses AND
//! together; comma-separated alternatives within a clause OR together.
//!
//! Compilation is strict: an unknown key, a missing value, a dangling
//! exclusion, or an unterminated quote fails with
//! [`Error::FilterParse`](crate::Error::FilterParse) and never produces a
//! partially-built predicate. The empty query compiles to the trivial
//! predicate matching every annotation.

mod parser;
mod predicate;

pub use parser::compile;
pub use predicate::{FilterableAnnotation, Predicate, preprocess};
