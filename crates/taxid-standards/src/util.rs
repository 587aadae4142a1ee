//! Character cleaning and check digit helpers shared by the oracles.

/// Removes every character in `delete` from `number`.
///
/// # Examples
///
/// ```
/// use taxid_standards::util::clean;
///
/// assert_eq!(clean("205-1233 3797", " -"), "20512333797");
/// assert_eq!(clean("DE136,695 976", " ,"), "DE136695976");
/// ```
pub fn clean(number: &str, delete: &str) -> String {
    number.chars().filter(|ch| !delete.contains(*ch)).collect()
}

/// Returns true if the string is non-empty and all ASCII digits.
pub fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Digit values of an all-digit string.
pub(crate) fn digits(value: &str) -> impl Iterator<Item = i64> + '_ {
    value.bytes().map(|b| i64::from(b - b'0'))
}

/// Sum of `weights[i] * digit[i]` over the shorter of the two.
pub(crate) fn weighted_sum(value: &str, weights: &[i64]) -> i64 {
    digits(value).zip(weights).map(|(d, w)| d * w).sum()
}

/// Luhn checksum of an all-digit string; zero for valid numbers.
///
/// # Examples
///
/// ```
/// use taxid_standards::util::luhn_checksum;
///
/// assert_eq!(luhn_checksum("303265045"), 0);
/// assert_ne!(luhn_checksum("303265046"), 0);
/// ```
pub fn luhn_checksum(value: &str) -> i64 {
    let mut sum = 0;
    for (idx, digit) in value.bytes().rev().map(|b| i64::from(b - b'0')).enumerate() {
        if idx % 2 == 0 {
            sum += digit;
        } else {
            let doubled = digit * 2;
            sum += doubled / 10 + doubled % 10;
        }
    }
    sum % 10
}

/// ISO 7064 Mod 11, 10 checksum; one for valid numbers.
pub fn mod_11_10_checksum(value: &str) -> i64 {
    let mut check = 5;
    for digit in digits(value) {
        let base = if check == 0 { 10 } else { check };
        check = ((base * 2) % 11 + digit) % 10;
    }
    check
}

/// ISO 7064 Mod 97, 10 remainder over digits and letters (`A` = 10).
///
/// Returns `None` if the value holds characters other than ASCII
/// alphanumerics. Valid numbers have remainder one.
pub fn mod_97_10_remainder(value: &str) -> Option<u64> {
    let mut remainder = 0u64;
    for ch in value.chars() {
        let v = ch.to_digit(36)?;
        remainder = if v < 10 {
            (remainder * 10 + u64::from(v)) % 97
        } else {
            (remainder * 100 + u64::from(v)) % 97
        };
    }
    Some(remainder)
}

/// Strips a two-letter country prefix, if present.
pub(crate) fn strip_country<'a>(number: &'a str, code: &str) -> &'a str {
    number.strip_prefix(code).unwrap_or(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_digits() {
        assert!(is_digits("0123"));
        assert!(!is_digits(""));
        assert!(!is_digits("12a"));
    }

    #[test]
    fn test_weighted_sum() {
        assert_eq!(weighted_sum("123", &[1, 2, 3]), 14);
        assert_eq!(weighted_sum("12", &[1, 2, 3]), 5);
    }

    #[test]
    fn test_mod_11_10() {
        assert_eq!(mod_11_10_checksum("136695976"), 1);
        assert_ne!(mod_11_10_checksum("136695977"), 1);
    }

    #[test]
    fn test_mod_97_10() {
        assert_eq!(mod_97_10_remainder("794"), Some(794 % 97));
        assert_eq!(mod_97_10_remainder("A"), Some(10));
        assert_eq!(mod_97_10_remainder("A-1"), None);
    }

    #[test]
    fn test_strip_country() {
        assert_eq!(strip_country("FR123", "FR"), "123");
        assert_eq!(strip_country("123", "FR"), "123");
    }
}
