//! Checksum validation for Polish national identifiers.
//!
//! - NIP: 10 digits, tax identification number
//! - PESEL: 11 digits, personal identification number
//! - REGON: 9 or 14 digits, business registry number
//!
//! Every validator returns `false` for input that is not made purely of ASCII
//! digits or has the wrong length. None of them panic.

use thiserror::Error;

const NIP_WEIGHTS: [u32; 9] = [6, 5, 7, 2, 3, 4, 5, 6, 7];
const PESEL_WEIGHTS: [u32; 10] = [1, 3, 7, 9, 1, 3, 7, 9, 1, 3];
const REGON_9_WEIGHTS: [u32; 8] = [8, 9, 2, 3, 4, 5, 6, 7];
const REGON_14_WEIGHTS: [u32; 13] = [2, 4, 8, 5, 0, 9, 7, 3, 6, 1, 2, 4, 8];

/// Validates a NIP number.
///
/// The weighted sum of the first nine digits modulo 11 must equal the tenth
/// digit. A remainder of 10 never matches, so such numbers are invalid.
///
/// # Examples
/// ```
/// use rejestr::identifiers::validate_nip;
///
/// assert!(validate_nip("5260001246"));
/// assert!(!validate_nip("1234567890"));
/// assert!(!validate_nip("526-000-12-46"));
/// ```
pub fn validate_nip(nip: &str) -> bool {
    let Some(digits) = parse_digits(nip, 10) else {
        return false;
    };
    weighted_sum(&digits, &NIP_WEIGHTS) % 11 == digits[9]
}

/// Validates a PESEL number.
///
/// # Examples
/// ```
/// use rejestr::identifiers::validate_pesel;
///
/// assert!(validate_pesel("44051401359"));
/// assert!(!validate_pesel("44051401358"));
/// ```
pub fn validate_pesel(pesel: &str) -> bool {
    let Some(digits) = parse_digits(pesel, 11) else {
        return false;
    };
    let checksum = weighted_sum(&digits, &PESEL_WEIGHTS) % 10;
    (10 - checksum) % 10 == digits[10]
}

/// Validates a REGON number in either its 9-digit or 14-digit form.
///
/// The 14-digit form is only valid when its leading 9 digits are a valid
/// REGON on their own.
///
/// # Examples
/// ```
/// use rejestr::identifiers::validate_regon;
///
/// assert!(validate_regon("123456785"));
/// assert!(validate_regon("12345678512347"));
/// assert!(!validate_regon("12345678512340"));
/// assert!(!validate_regon("1234567"));
/// ```
pub fn validate_regon(regon: &str) -> bool {
    match regon.len() {
        9 => parse_digits(regon, 9)
            .map(|digits| mod11_check_digit(&digits, &REGON_9_WEIGHTS) == digits[8])
            .unwrap_or(false),
        14 => {
            let Some(digits) = parse_digits(regon, 14) else {
                return false;
            };
            // all-ASCII at this point, so the byte slice is on a char boundary
            validate_regon(&regon[..9])
                && mod11_check_digit(&digits, &REGON_14_WEIGHTS) == digits[13]
        }
        _ => false,
    }
}

/// Checks the three identifiers of a user record in a fixed order:
/// PESEL, then NIP, then REGON. Reports the first one that fails.
pub fn check_identifiers(pesel: &str, nip: &str, regon: &str) -> Result<(), IdentifierError> {
    if !validate_pesel(pesel) {
        return Err(IdentifierError::Pesel(pesel.to_string()));
    }
    if !validate_nip(nip) {
        return Err(IdentifierError::Nip(nip.to_string()));
    }
    if !validate_regon(regon) {
        return Err(IdentifierError::Regon(regon.to_string()));
    }
    Ok(())
}

fn parse_digits(value: &str, len: usize) -> Option<Vec<u32>> {
    if value.len() != len || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(value.bytes().map(|b| u32::from(b - b'0')).collect())
}

fn weighted_sum(digits: &[u32], weights: &[u32]) -> u32 {
    digits.iter().zip(weights).map(|(d, w)| d * w).sum()
}

/// REGON maps a remainder of 10 to a check digit of 0.
fn mod11_check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    weighted_sum(digits, weights) % 11 % 10
}

/// The identifier that failed validation, with the rejected value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("invalid PESEL '{0}'")]
    Pesel(String),
    #[error("invalid NIP '{0}'")]
    Nip(String),
    #[error("invalid REGON '{0}'")]
    Regon(String),
}
