//! Filter query parser.

use super::predicate::{Clause, Predicate};
use crate::{Error, Result};

/// Compiles a filter query string into a [`Predicate`].
///
/// The empty (or whitespace-only) query compiles to the trivial predicate.
///
/// # Errors
///
/// Returns [`Error::FilterParse`] when the query is syntactically invalid;
/// the message is suitable for direct display. On error no predicate is
/// produced, so a previously active filter can stay in effect unchanged.
///
/// # Examples
///
/// ```
/// use annoview::filter::compile;
///
/// let predicate = compile("class:axon -tag:draft reviewed").unwrap();
/// assert!(!predicate.is_match_all());
/// assert!(compile("size:large").is_err());
/// ```
pub fn compile(query: &str) -> Result<Predicate> {
    let mut clauses = Vec::new();
    for token in tokenize(query)? {
        clauses.push(parse_token(&token)?);
    }
    Ok(Predicate::from_clauses(clauses))
}

/// A raw query token. Quoted tokens bypass `key:value` interpretation.
struct Token {
    text: String,
    quoted: bool,
}

/// Splits a query on whitespace, honoring double-quoted phrases.
fn tokenize(query: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quoted = false;

    for ch in query.chars() {
        match ch {
            '"' => {
                if current.is_empty() && !in_quotes {
                    quoted = true;
                }
                in_quotes = !in_quotes;
            },
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(Token {
                        text: std::mem::take(&mut current),
                        quoted,
                    });
                }
                quoted = false;
            },
            c => current.push(c),
        }
    }

    if in_quotes {
        return Err(Error::FilterParse(
            "unterminated quote in filter query".to_string(),
        ));
    }
    if !current.is_empty() {
        tokens.push(Token {
            text: current,
            quoted,
        });
    }
    Ok(tokens)
}

/// Parses a single token into a clause.
fn parse_token(token: &Token) -> Result<Clause> {
    if token.quoted {
        return Ok(Clause::Text(token.text.to_lowercase()));
    }

    // Exclusion prefix
    if let Some(rest) = token.text.strip_prefix('-') {
        if rest.is_empty() {
            return Err(Error::FilterParse(
                "dangling exclusion '-' with nothing to negate".to_string(),
            ));
        }
        let Some((key, value)) = rest.split_once([':', '=']) else {
            return Err(Error::FilterParse(format!(
                "exclusion requires 'tag:value', got '-{rest}'"
            )));
        };
        if !matches!(key.to_lowercase().as_str(), "tag" | "tags") {
            return Err(Error::FilterParse(format!(
                "exclusion is only supported for 'tag', got '-{key}:'"
            )));
        }
        return Ok(Clause::NotTag(parse_alternatives(key, value)?));
    }

    // key:value tokens; everything else is free text
    let Some((key, value)) = token.text.split_once([':', '=']) else {
        return Ok(Clause::Text(token.text.to_lowercase()));
    };

    match key.to_lowercase().as_str() {
        "class" => Ok(Clause::Class(parse_alternatives(key, value)?)),
        "tag" | "tags" => Ok(Clause::Tag(parse_alternatives(key, value)?)),
        "author" => Ok(Clause::Author(parse_alternatives(key, value)?)),
        other => Err(Error::FilterParse(format!("unknown filter key '{other}'"))),
    }
}

/// Splits a clause value on commas into lowercased OR-alternatives.
fn parse_alternatives(key: &str, value: &str) -> Result<Vec<String>> {
    if value.is_empty() {
        return Err(Error::FilterParse(format!(
            "missing value after '{key}:'"
        )));
    }
    let alternatives: Vec<String> = value
        .split(',')
        .map(|alt| alt.trim().to_lowercase())
        .collect();
    if alternatives.iter().any(String::is_empty) {
        return Err(Error::FilterParse(format!(
            "empty alternative in '{key}:{value}'"
        )));
    }
    Ok(alternatives)
}
