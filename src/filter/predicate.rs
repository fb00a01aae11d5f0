//! Compiled predicates and annotation preprocessing.

use crate::models::Annotation;

/// Case-normalized projection of an annotation, built by [`preprocess`]
/// before predicate evaluation.
#[derive(Debug, Clone)]
pub struct FilterableAnnotation {
    /// Lowercased classification label.
    pub class: String,
    /// Lowercased tags.
    pub tags: Vec<String>,
    /// Lowercased author.
    pub author: String,
    /// Concatenated lowercased text searched by free-text clauses.
    pub haystack: String,
}

/// Projects an annotation into the representation predicates evaluate
/// against. Must be applied before [`Predicate::evaluate`].
#[must_use]
pub fn preprocess(annotation: &Annotation) -> FilterableAnnotation {
    let class = annotation.class_name.to_lowercase();
    let tags: Vec<String> = annotation.tags.iter().map(|t| t.to_lowercase()).collect();
    let author = annotation.author.to_lowercase();
    let mut haystack = annotation.note.to_lowercase();
    haystack.push(' ');
    haystack.push_str(&class);
    haystack.push(' ');
    haystack.push_str(&author);
    for tag in &tags {
        haystack.push(' ');
        haystack.push_str(tag);
    }
    FilterableAnnotation {
        class,
        tags,
        author,
        haystack,
    }
}

/// One AND-ed clause of a compiled predicate. Alternatives within a
/// clause are lowercased at compile time and OR together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Clause {
    /// Classification matches any alternative exactly.
    Class(Vec<String>),
    /// Any alternative appears among the tags.
    Tag(Vec<String>),
    /// No alternative appears among the tags.
    NotTag(Vec<String>),
    /// Author matches any alternative exactly.
    Author(Vec<String>),
    /// Phrase appears in the haystack.
    Text(String),
}

impl Clause {
    fn matches(&self, subject: &FilterableAnnotation) -> bool {
        match self {
            Self::Class(alts) => alts.iter().any(|a| *a == subject.class),
            Self::Tag(alts) => alts.iter().any(|a| subject.tags.contains(a)),
            Self::NotTag(alts) => !alts.iter().any(|a| subject.tags.contains(a)),
            Self::Author(alts) => alts.iter().any(|a| *a == subject.author),
            Self::Text(phrase) => subject.haystack.contains(phrase.as_str()),
        }
    }
}

/// A compiled filter predicate.
///
/// Produced by [`compile`](crate::filter::compile); evaluation never
/// fails. The default value is the trivial predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
    clauses: Vec<Clause>,
}

impl Predicate {
    pub(crate) const fn from_clauses(clauses: Vec<Clause>) -> Self {
        Self { clauses }
    }

    /// Returns the trivial predicate matching every annotation.
    #[must_use]
    pub const fn match_all() -> Self {
        Self {
            clauses: Vec::new(),
        }
    }

    /// Returns true if this predicate matches every annotation.
    #[must_use]
    pub fn is_match_all(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Evaluates the predicate against a preprocessed annotation.
    #[must_use]
    pub fn evaluate(&self, subject: &FilterableAnnotation) -> bool {
        self.clauses.iter().all(|clause| clause.matches(subject))
    }
}
