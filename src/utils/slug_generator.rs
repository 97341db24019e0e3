//! Random slug generation.
//!
//! Slugs are drawn uniformly from a lowercase hexadecimal alphabet using the
//! thread-local PRNG. They are identifiers, not secrets.

use rand::Rng;

/// Characters a slug is drawn from.
pub const SLUG_ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// Length of a freshly generated slug.
pub const DEFAULT_SLUG_LENGTH: usize = 8;

/// Generates a random slug of `length` characters from [`SLUG_ALPHABET`].
///
/// # Examples
///
/// ```ignore
/// let slug = generate_slug(8);
/// assert_eq!(slug.len(), 8);
/// assert!(is_valid_slug(&slug));
/// ```
pub fn generate_slug(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| SLUG_ALPHABET[rng.random_range(0..SLUG_ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `slug` is non-empty and uses only [`SLUG_ALPHABET`].
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && slug.bytes().all(|b| SLUG_ALPHABET.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_slug_has_requested_length() {
        assert_eq!(generate_slug(DEFAULT_SLUG_LENGTH).len(), 8);
        assert_eq!(generate_slug(12).len(), 12);
        assert!(generate_slug(0).is_empty());
    }

    #[test]
    fn test_generate_slug_uses_hex_alphabet() {
        for _ in 0..200 {
            let slug = generate_slug(DEFAULT_SLUG_LENGTH);
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
                "unexpected slug {slug}"
            );
        }
    }

    #[test]
    fn test_generate_slug_produces_distinct_values() {
        let slugs: HashSet<String> = (0..1000)
            .map(|_| generate_slug(DEFAULT_SLUG_LENGTH))
            .collect();

        // 16^8 possibilities; a handful of collisions in 1000 draws would be
        // astronomically unlikely.
        assert!(slugs.len() >= 998);
    }

    #[test]
    fn test_generate_slug_covers_alphabet() {
        let seen: HashSet<char> = generate_slug(4096).chars().collect();
        assert_eq!(seen.len(), SLUG_ALPHABET.len());
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("0a1b2c3d"));
        assert!(is_valid_slug("ffffffff"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("0A1B2C3D"));
        assert!(!is_valid_slug("urls"));
        assert!(!is_valid_slug("0a1b-c3d"));
    }
}
