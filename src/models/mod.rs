//! Data models for annoview.
//!
//! This module contains the core data structures carried through the
//! filtering and dispatch pipeline.

mod annotation;

pub use annotation::{Annotation, AnnotationId};
