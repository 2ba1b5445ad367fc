//! Bracket tag notation parser.
//!
//! Pattern: `[<type>:<identifier>]` or `[<type>:<identifier> | <data>]`.
//! Malformed tokens (no `:`, no closing `]`, empty type or identifier) are
//! not tags and are skipped without error.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::TagOccurrence;

fn compile_regex(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(_compile_err) => match Regex::new(r"$^") {
            Ok(fallback) => fallback,
            Err(fallback_err) => panic!("hardcoded fallback regex must compile: {fallback_err}"),
        },
    }
}

// No nesting: the first `]` after the opening `[` ends the token, and any
// `[` in between is plain body text.
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"\[([^\]]*)\]"));
static TOKEN_REGEX_EXACT: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"^\[([^\]]*)\]$"));

fn occurrence_from_body(body: &str, raw_text: &str) -> Option<TagOccurrence> {
    let (type_code, rest) = body.split_once(':')?;
    let type_code = type_code.trim();
    if type_code.is_empty() {
        return None;
    }
    let (identifier, data) = match rest.split_once('|') {
        Some((identifier, data)) => (identifier.trim(), data.trim()),
        None => (rest.trim(), ""),
    };
    if identifier.is_empty() {
        return None;
    }
    Some(TagOccurrence {
        type_code: type_code.to_string(),
        identifier: identifier.to_string(),
        data: data.to_string(),
        raw_text: raw_text.to_string(),
    })
}

/// Extract every well-formed tag from `text`, in source order.
///
/// # Arguments
///
/// * `text` - Arbitrary prose, possibly empty
///
/// # Returns
///
/// Occurrences with trimmed fields and the verbatim token as `raw_text`.
#[must_use]
pub fn parse_tags(text: &str) -> Vec<TagOccurrence> {
    TOKEN_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let raw = caps.get(0)?;
            let body = caps.get(1)?;
            occurrence_from_body(body.as_str(), raw.as_str())
        })
        .collect()
}

/// Parse a single token; the whole input (ignoring outer whitespace) must be one tag.
#[must_use]
pub fn parse_tag(token: &str) -> Option<TagOccurrence> {
    let token = token.trim();
    let caps = TOKEN_REGEX_EXACT.captures(token)?;
    occurrence_from_body(caps.get(1)?.as_str(), token)
}

/// Validate tag token format.
#[must_use]
pub fn is_valid_tag(token: &str) -> bool {
    parse_tag(token).is_some()
}

/// Count well-formed tags in `text`.
#[must_use]
pub fn count_tags(text: &str) -> usize {
    parse_tags(text).len()
}
