//! Short code generation.
//!
//! Codes are drawn uniformly from the 62-character alphanumeric alphabet
//! (`A-Z`, `a-z`, `0-9`). Uniqueness is probed against a snapshot of the codes
//! already in use with a bounded number of attempts.

use rand::Rng;
use rand::distr::{Alphanumeric, Distribution};
use std::collections::HashSet;

/// Default length of generated short codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Number of draws at the requested length before falling back to a longer code.
pub const MAX_GENERATION_ATTEMPTS: usize = 1000;

/// Generates a random alphanumeric code of `length` characters.
///
/// Uses the thread-local RNG, which is seeded from the operating system.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    generate_code_with(&mut rand::rng(), length)
}

/// Generates a random alphanumeric code using the provided RNG.
pub fn generate_code_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(Alphanumeric.sample(rng)))
        .collect()
}

/// Generates a code of `length` characters that is not in `existing`.
///
/// Makes up to [`MAX_GENERATION_ATTEMPTS`] draws. If all of them collide, returns
/// one code of `length + 1` characters which is *not* checked against
/// `existing`; callers must still insert with an atomic insert-if-absent.
pub fn generate_unique_code(existing: &HashSet<String>, length: usize) -> String {
    generate_unique_code_with(&mut rand::rng(), existing, length, MAX_GENERATION_ATTEMPTS)
}

/// Same as [`generate_unique_code`] with an explicit RNG and attempt bound.
pub fn generate_unique_code_with<R: Rng + ?Sized>(
    rng: &mut R,
    existing: &HashSet<String>,
    length: usize,
    max_attempts: usize,
) -> String {
    for _ in 0..max_attempts {
        let code = generate_code_with(rng, length);
        if !existing.contains(&code) {
            return code;
        }
    }

    tracing::warn!(
        length,
        max_attempts,
        "Short code space exhausted, falling back to a longer code"
    );

    generate_code_with(rng, length + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn all_single_char_codes() -> HashSet<String> {
        ('A'..='Z')
            .chain('a'..='z')
            .chain('0'..='9')
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_generate_code_has_requested_length() {
        for length in [1, 4, 6, 12] {
            assert_eq!(generate_code(length).len(), length);
        }
    }

    #[test]
    fn test_generate_code_zero_length() {
        assert_eq!(generate_code(0), "");
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        for _ in 0..200 {
            let code = generate_code(DEFAULT_CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()), "{code}");
        }
    }

    #[test]
    fn test_generate_code_covers_whole_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<char> = generate_code_with(&mut rng, 20_000).chars().collect();

        assert_eq!(seen.len(), 62);
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        assert_eq!(generate_code_with(&mut a, 6), generate_code_with(&mut b, 6));
    }

    #[test]
    fn test_generate_unique_code_avoids_existing() {
        let mut existing = all_single_char_codes();
        existing.remove("q");

        let mut rng = StdRng::seed_from_u64(1);
        let code = generate_unique_code_with(&mut rng, &existing, 1, MAX_GENERATION_ATTEMPTS);

        assert_eq!(code, "q");
    }

    #[test]
    fn test_generate_unique_code_falls_back_to_longer_code() {
        let existing = all_single_char_codes();

        let code = generate_unique_code(&existing, 1);

        assert_eq!(code.len(), 2);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_unique_code_respects_attempt_bound() {
        let existing = all_single_char_codes();
        let mut rng = StdRng::seed_from_u64(3);

        let code = generate_unique_code_with(&mut rng, &existing, 1, 0);

        assert_eq!(code.len(), 2);
    }

    #[test]
    fn test_generate_unique_codes_under_volume() {
        let mut existing = HashSet::new();

        for _ in 0..5000 {
            let code = generate_unique_code(&existing, DEFAULT_CODE_LENGTH);
            assert_eq!(code.len(), DEFAULT_CODE_LENGTH);
            assert!(existing.insert(code));
        }

        assert_eq!(existing.len(), 5000);
    }

    #[test]
    fn test_generate_unique_codes_in_small_space() {
        // 62^2 = 3844 codes; filling half of it still never repeats.
        let mut existing = HashSet::new();

        for _ in 0..1900 {
            let code = generate_unique_code(&existing, 2);
            assert!(existing.insert(code));
        }
    }
}
