//! Post-build substitution of the release API URL.
//!
//! Release artifacts carry the literal [`API_URL_PLACEHOLDER`] token where the
//! API base URL belongs. Packaging replaces every occurrence of that exact
//! token, delimiters included, with the production URL before the artifact is
//! distributed.

use std::sync::LazyLock;

use regex::{bytes, NoExpand};

/// Token standing in for the API base URL in release builds
pub const API_URL_PLACEHOLDER: &str = "<%API_URL%>";

static TOKEN: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(&regex::escape(API_URL_PLACEHOLDER)).expect("escaped token is a valid regex")
});

static TOKEN_BYTES: LazyLock<bytes::Regex> = LazyLock::new(|| {
    bytes::Regex::new(&regex::escape(API_URL_PLACEHOLDER)).expect("escaped token is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubstitutionError {
    #[error("replacement value is empty")]
    EmptyValue,
    #[error("replacement value contains the `<%API_URL%>` token")]
    RecursiveValue,
}

/// Outcome of a substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution<T> {
    pub content: T,
    /// Number of tokens replaced, `0` meaning `content` is unchanged
    pub replaced: usize,
}

fn check_value(value: &str) -> Result<(), SubstitutionError> {
    if value.trim().is_empty() {
        return Err(SubstitutionError::EmptyValue);
    }
    if value.contains(API_URL_PLACEHOLDER) {
        return Err(SubstitutionError::RecursiveValue);
    }
    Ok(())
}

/// Replaces every placeholder token in `content` with `value`, taken verbatim
pub fn substitute(content: &str, value: &str) -> Result<Substitution<String>, SubstitutionError> {
    check_value(value)?;

    let replaced = TOKEN.find_iter(content).count();
    let content = TOKEN.replace_all(content, NoExpand(value)).into_owned();

    Ok(Substitution { content, replaced })
}

/// Byte-oriented [`substitute`], for artifacts that are not UTF-8 text
pub fn substitute_bytes(
    content: &[u8],
    value: &str,
) -> Result<Substitution<Vec<u8>>, SubstitutionError> {
    check_value(value)?;

    let replaced = TOKEN_BYTES.find_iter(content).count();
    let content = TOKEN_BYTES
        .replace_all(content, bytes::NoExpand(value.as_bytes()))
        .into_owned();

    Ok(Substitution { content, replaced })
}

/// Counts placeholder tokens in `content`
pub fn count(content: &[u8]) -> usize {
    TOKEN_BYTES.find_iter(content).count()
}
