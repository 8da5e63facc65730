//! Norwegian national identity number (fødselsnummer) validation.
//!
//! A fødselsnummer is 11 digits: a 6-digit birth date, a 3-digit individual
//! number and two mod-11 control digits computed over the preceding digits.

use std::sync::LazyLock;

use regex::Regex;

static ELEVEN_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{11}$").expect("pattern compiles"));

const K1_WEIGHTS: [u32; 9] = [3, 7, 6, 1, 8, 9, 4, 5, 2];
const K2_WEIGHTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Whether the input is a structurally valid fødselsnummer.
///
/// Checks shape (exactly 11 digits) and both control digits. It does not
/// check the birth date against a calendar; the registry of real numbers is
/// the backend's concern.
pub fn is_valid(ident: &str) -> bool {
    if !ELEVEN_DIGITS.is_match(ident) {
        return false;
    }

    let digits: Vec<u32> = ident.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != 11 {
        return false;
    }

    let k1 = control_digit(&digits[..9], &K1_WEIGHTS);
    let k2 = control_digit(&digits[..10], &K2_WEIGHTS);
    matches!((k1, k2), (Some(a), Some(b)) if a == digits[9] && b == digits[10])
}

/// Mod-11 control digit over `digits` with the given weights.
///
/// Returns `None` for the remainder the scheme cannot encode; such number
/// series are simply never issued.
fn control_digit(digits: &[u32], weights: &[u32]) -> Option<u32> {
    let sum: u32 = digits.iter().zip(weights.iter()).map(|(d, w)| d * w).sum();
    match 11 - (sum % 11) {
        11 => Some(0),
        10 => None,
        digit => Some(digit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Structurally valid numbers (control digits computed per the scheme).
    const VALID: [&str; 4] = ["01019010046", "15069512361", "24056078939", "01010099931"];

    #[test]
    fn test_valid_numbers_pass() {
        for ident in VALID {
            assert!(is_valid(ident), "{ident} should be valid");
        }
    }

    #[test]
    fn test_wrong_control_digits_fail() {
        assert!(!is_valid("01019010047"));
        assert!(!is_valid("01019010056"));
    }

    #[test]
    fn test_wrong_shape_fails() {
        assert!(!is_valid(""));
        assert!(!is_valid("0101901004"));
        assert!(!is_valid("010190100461"));
        assert!(!is_valid("01019o10046"));
        assert!(!is_valid("01019 10046"));
    }
}
