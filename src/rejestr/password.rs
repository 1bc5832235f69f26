//! Password generation and strength checks.
//!
//! A strong password is at least [`MIN_LENGTH`] characters long and mixes
//! lowercase letters, uppercase letters, digits and [`SYMBOLS`].
//!
//! Generated passwords come from `rand::thread_rng`. They are fine for
//! initial or temporary account passwords, but the generator has not been
//! reviewed for secrets that need audited unpredictability guarantees.

use rand::seq::SliceRandom;
use rand::Rng;

/// Minimum accepted password length, in characters.
pub const MIN_LENGTH: usize = 12;

/// Length of passwords produced by [`generate_password`].
pub const GENERATED_LENGTH: usize = 12;

/// The accepted symbol set: ASCII punctuation.
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

/// Generates a 12-character password that passes [`validate_password`].
pub fn generate_password() -> String {
    generate_password_with(&mut rand::thread_rng())
}

/// Same as [`generate_password`], drawing from the given random source.
///
/// One character is taken from each required class, the rest from the full
/// alphabet, and the result is shuffled so the class positions are not fixed.
pub fn generate_password_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let alphabet = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS].concat();

    let mut chars: Vec<char> = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS]
        .iter()
        .map(|set| pick(rng, set))
        .collect();
    while chars.len() < GENERATED_LENGTH {
        chars.push(pick(rng, &alphabet));
    }

    chars.shuffle(rng);
    chars.into_iter().collect()
}

fn pick<R: Rng + ?Sized>(rng: &mut R, set: &str) -> char {
    let bytes = set.as_bytes();
    char::from(bytes[rng.gen_range(0..bytes.len())])
}

/// Returns true when the password satisfies every strength rule.
///
/// # Examples
/// ```
/// use rejestr::password::validate_password;
///
/// assert!(validate_password("Tr0ub4dor&3x"));
/// assert!(!validate_password("Tr0ub4dor&3"));
/// assert!(!validate_password("troub4dor&3xyz"));
/// ```
pub fn validate_password(password: &str) -> bool {
    password_issues(password).is_empty()
}

/// A strength rule that a password breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordIssue {
    TooShort,
    MissingLowercase,
    MissingUppercase,
    MissingDigit,
    MissingSymbol,
}

impl std::fmt::Display for PasswordIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PasswordIssue::TooShort => {
                write!(f, "password must be at least {} characters", MIN_LENGTH)
            }
            PasswordIssue::MissingLowercase => write!(f, "password needs a lowercase letter"),
            PasswordIssue::MissingUppercase => write!(f, "password needs an uppercase letter"),
            PasswordIssue::MissingDigit => write!(f, "password needs a digit"),
            PasswordIssue::MissingSymbol => write!(f, "password needs a symbol"),
        }
    }
}

/// Lists every rule the password breaks, in a stable order.
pub fn password_issues(password: &str) -> Vec<PasswordIssue> {
    let mut issues = Vec::new();

    if password.chars().count() < MIN_LENGTH {
        issues.push(PasswordIssue::TooShort);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        issues.push(PasswordIssue::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        issues.push(PasswordIssue::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        issues.push(PasswordIssue::MissingDigit);
    }
    if !password.chars().any(|c| SYMBOLS.contains(c)) {
        issues.push(PasswordIssue::MissingSymbol);
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_password_is_valid() {
        for _ in 0..500 {
            let password = generate_password();
            assert!(validate_password(&password), "rejected: {}", password);
        }
    }

    #[test]
    fn test_generated_password_length() {
        assert_eq!(generate_password().chars().count(), GENERATED_LENGTH);
    }

    #[test]
    fn test_generated_password_uses_known_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let password = generate_password_with(&mut rng);
        assert!(password
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || SYMBOLS.contains(c)));
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let first = generate_password_with(&mut StdRng::seed_from_u64(42));
        let second = generate_password_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_symbols_are_ascii_punctuation() {
        assert_eq!(SYMBOLS.len(), 32);
        assert!(SYMBOLS.chars().all(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn test_short_password() {
        assert_eq!(password_issues("Ab1!"), vec![PasswordIssue::TooShort]);
    }

    #[test]
    fn test_missing_classes() {
        assert_eq!(
            password_issues("abcdefghijkl"),
            vec![
                PasswordIssue::MissingUppercase,
                PasswordIssue::MissingDigit,
                PasswordIssue::MissingSymbol,
            ]
        );
        assert_eq!(
            password_issues("ABCDEFGHIJ1!"),
            vec![PasswordIssue::MissingLowercase]
        );
    }

    #[test]
    fn test_non_punctuation_is_not_a_symbol() {
        assert!(!validate_password("Abcdefghij1 "));
        assert!(!validate_password("Abcdefghij1ł"));
    }

    #[test]
    fn test_length_counts_characters() {
        // 11 characters even though the byte length is higher
        assert!(!validate_password("Ab1!ąąąąąąą"));
    }

    #[test]
    fn test_valid_password() {
        assert!(validate_password("Correct-Horse-7"));
        assert!(password_issues("Correct-Horse-7").is_empty());
    }
}
