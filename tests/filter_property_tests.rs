//! Property-based tests for the filter engine.
//!
//! Uses proptest to verify invariants across random inputs:
//! - Compilation is total: any input either compiles or reports a parse
//!   error, never panics
//! - The trivial predicate matches every annotation
//! - Well-formed token grammars always compile
//! - Tag exclusion is the complement of tag inclusion
//! - Evaluation is case-insensitive on both sides

// Property tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use annoview::filter::{Predicate, compile, preprocess};
use annoview::models::Annotation;
use proptest::prelude::*;

fn annotation(class: &str, tags: Vec<String>, note: &str) -> Annotation {
    let mut ann = Annotation::new("a-1", class).with_note(note);
    for tag in tags {
        ann = ann.with_tag(tag);
    }
    ann
}

proptest! {
    /// Property: compile never panics, whatever the input.
    #[test]
    fn prop_compile_is_total(query in ".{0,120}") {
        let _ = compile(&query);
    }

    /// Property: the trivial predicate matches every annotation.
    #[test]
    fn prop_trivial_matches_everything(
        class in ".{0,30}",
        note in ".{0,60}",
    ) {
        let trivial = Predicate::match_all();
        let subject = preprocess(&annotation(&class, vec![], &note));
        prop_assert!(trivial.evaluate(&subject));
        prop_assert!(compile("").unwrap().evaluate(&subject));
    }

    /// Property: well-formed key:value grammars always compile.
    #[test]
    fn prop_valid_grammar_compiles(
        class in "[a-z][a-z0-9]{0,12}",
        tag in "[a-z][a-z0-9]{0,12}",
        author in "[a-z][a-z0-9]{0,12}",
        word in "[a-z]{1,12}",
    ) {
        let query = format!("class:{class} tag:{tag} -tag:{tag} author:{author} {word}");
        prop_assert!(compile(&query).is_ok());
        let query = format!("class={class},{tag}");
        prop_assert!(compile(&query).is_ok());
    }

    /// Property: `-tag:t` matches exactly when `tag:t` does not.
    #[test]
    fn prop_exclusion_is_complement(
        tag in "[a-z][a-z0-9]{0,12}",
        tags in prop::collection::vec("[a-z][a-z0-9]{0,12}", 0..4),
    ) {
        let subject = preprocess(&annotation("axon", tags, ""));
        let include = compile(&format!("tag:{tag}")).unwrap();
        let exclude = compile(&format!("-tag:{tag}")).unwrap();
        prop_assert_ne!(include.evaluate(&subject), exclude.evaluate(&subject));
    }

    /// Property: class matching is case-insensitive on both the query
    /// and the annotation.
    #[test]
    fn prop_class_match_case_insensitive(class in "[a-zA-Z]{1,12}") {
        let predicate = compile(&format!("class:{}", class.to_uppercase())).unwrap();
        let subject = preprocess(&annotation(&class.to_lowercase(), vec![], ""));
        prop_assert!(predicate.evaluate(&subject));
    }

    /// Property: a predicate compiled from a non-empty well-formed query
    /// is never reported trivial.
    #[test]
    fn prop_nonempty_query_is_nontrivial(class in "[a-z]{1,12}") {
        let predicate = compile(&format!("class:{class}")).unwrap();
        prop_assert!(!predicate.is_match_all());
    }
}
