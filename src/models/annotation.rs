//! Annotation types and identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an annotation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationId(String);

impl AnnotationId {
    /// Creates a new annotation ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AnnotationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AnnotationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A user-created marker in the viewed dataset.
///
/// Annotations arrive from the annotation store as an ordered snapshot and
/// are replaced wholesale on every update. The coordinator never mutates
/// individual annotations; sinks receive freshly cloned collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Unique identifier.
    pub id: AnnotationId,
    /// Classification label used by the filter engine.
    pub class_name: String,
    /// The collaborator who created the annotation.
    pub author: String,
    /// Free-text note attached to the annotation.
    #[serde(default)]
    pub note: String,
    /// Tags for categorization.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation timestamp (Unix epoch seconds).
    pub created_at: u64,
}

impl Annotation {
    /// Creates an annotation with the given identity and class, stamped
    /// with the current time. Remaining fields start empty.
    #[must_use]
    pub fn new(id: impl Into<AnnotationId>, class_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            class_name: class_name.into(),
            author: String::new(),
            note: String::new(),
            tags: Vec::new(),
            created_at: crate::current_timestamp(),
        }
    }

    /// Sets the author.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Sets the note text.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Adds a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_id_preserves_string() {
        let id = AnnotationId::new("a-42");
        assert_eq!(id.as_str(), "a-42");
        assert_eq!(id.to_string(), "a-42");
    }

    #[test]
    fn test_annotation_builder() {
        let ann = Annotation::new("a-1", "axon")
            .with_author("mika")
            .with_note("branch point")
            .with_tag("reviewed");
        assert_eq!(ann.class_name, "axon");
        assert_eq!(ann.author, "mika");
        assert_eq!(ann.tags, vec!["reviewed"]);
        assert!(ann.created_at > 0);
    }

    #[test]
    fn test_annotation_serde_roundtrip() {
        let ann = Annotation::new("a-1", "soma").with_tag("draft");
        let json = serde_json::to_string(&ann).expect("serialize");
        let back: Annotation = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, ann);
    }

    #[test]
    fn test_annotation_deserialize_defaults() {
        let json = r#"{"id":"a-9","class_name":"soma","author":"kim","created_at":10}"#;
        let ann: Annotation = serde_json::from_str(json).expect("deserialize");
        assert!(ann.note.is_empty());
        assert!(ann.tags.is_empty());
    }
}
