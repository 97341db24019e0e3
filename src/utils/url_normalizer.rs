//! URL normalization applied before lookup and storage.
//!
//! Only one rule is applied: a single trailing `/` is removed, so
//! `https://example.com/` and `https://example.com` condense to the same
//! record. Case, scheme, port and query strings are left untouched.
//!
//! URLs containing control characters are rejected: they can never be sent
//! back in a `Location` header.

/// Errors that can occur during URL normalization.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("A URL is required.")]
    Missing,

    #[error("The URL contains invalid characters.")]
    InvalidCharacters,
}

/// Normalizes a submitted URL.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::Missing`] if the input is empty, or
/// becomes empty once the trailing slash is removed.
/// Returns [`UrlNormalizationError::InvalidCharacters`] if the input contains
/// control characters.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_url("https://example.com/").unwrap(), "https://example.com");
/// assert_eq!(normalize_url("https://example.com//").unwrap(), "https://example.com/");
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let normalized = input.strip_suffix('/').unwrap_or(input);

    if normalized.is_empty() {
        return Err(UrlNormalizationError::Missing);
    }

    if normalized.chars().any(char::is_control) {
        return Err(UrlNormalizationError::InvalidCharacters);
    }

    Ok(normalized.to_string())
}
