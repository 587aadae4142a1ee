//! Per-country VAT number rules.
//!
//! Each country receives the number without its leading country code (a
//! repeated code is stripped again by `compact`) and returns the compact
//! national body.

use crate::error::InvalidIdentifier;
use crate::util::{
    clean, is_digits, luhn_checksum, mod_11_10_checksum, mod_97_10_remainder, strip_country,
    weighted_sum,
};

pub(super) struct Country {
    pub code: &'static str,
    pub compact: fn(&str) -> String,
    pub validate: fn(&str) -> Result<String, InvalidIdentifier>,
}

const COUNTRIES: &[Country] = &[
    Country {
        code: "AT",
        compact: at_compact,
        validate: at_validate,
    },
    Country {
        code: "BE",
        compact: be_compact,
        validate: be_validate,
    },
    Country {
        code: "DE",
        compact: de_compact,
        validate: de_validate,
    },
    Country {
        code: "DK",
        compact: dk_compact,
        validate: dk_validate,
    },
    Country {
        code: "FI",
        compact: fi_compact,
        validate: fi_validate,
    },
    Country {
        code: "FR",
        compact: fr_compact,
        validate: fr_validate,
    },
    Country {
        code: "LU",
        compact: lu_compact,
        validate: lu_validate,
    },
    Country {
        code: "NL",
        compact: nl_compact,
        validate: nl_validate,
    },
    Country {
        code: "PL",
        compact: pl_compact,
        validate: pl_validate,
    },
];

pub(super) fn lookup(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|country| country.code == code)
}

/// Country codes with VAT rules, in alphabetical order.
pub fn supported_countries() -> impl Iterator<Item = &'static str> {
    COUNTRIES.iter().map(|country| country.code)
}

fn compact_with(number: &str, delete: &str, code: &str) -> String {
    let number = clean(number, delete).to_uppercase();
    strip_country(number.trim(), code).to_string()
}

fn at_compact(number: &str) -> String {
    compact_with(number, " -./", "AT")
}

/// Austrian UID: `U` followed by 8 digits, Luhn-derived check digit.
fn at_validate(number: &str) -> Result<String, InvalidIdentifier> {
    let number = at_compact(number);
    let Some(digits) = number.strip_prefix('U').filter(|rest| is_digits(rest)) else {
        return Err(InvalidIdentifier::format(&number));
    };
    if digits.len() != 8 {
        return Err(InvalidIdentifier::length(&number));
    }
    let check = (6 - luhn_checksum(&digits[..7])).rem_euclid(10);
    if i64::from(digits.as_bytes()[7] - b'0') != check {
        return Err(InvalidIdentifier::checksum(&number));
    }
    Ok(number)
}

fn be_compact(number: &str) -> String {
    let number = compact_with(number, " -./", "BE");
    if number.len() == 9 {
        format!("0{number}")
    } else {
        number
    }
}

/// Belgian enterprise number: 10 digits, mod-97 check on the last two.
fn be_validate(number: &str) -> Result<String, InvalidIdentifier> {
    let number = be_compact(number);
    if !is_digits(&number) {
        return Err(InvalidIdentifier::format(&number));
    }
    if number.len() != 10 {
        return Err(InvalidIdentifier::length(&number));
    }
    if !number.starts_with(['0', '1']) {
        return Err(InvalidIdentifier::component(&number));
    }
    let (base, check) = number.split_at(8);
    let base: u64 = base.parse().map_err(|_| InvalidIdentifier::format(&number))?;
    let check: u64 = check.parse().map_err(|_| InvalidIdentifier::format(&number))?;
    if base == 0 || (base + check) % 97 != 0 {
        return Err(InvalidIdentifier::checksum(&number));
    }
    Ok(number)
}

fn de_compact(number: &str) -> String {
    compact_with(number, " -./,", "DE")
}

/// German USt-IdNr: 9 digits, ISO 7064 Mod 11, 10.
fn de_validate(number: &str) -> Result<String, InvalidIdentifier> {
    let number = de_compact(number);
    if !is_digits(&number) || number.starts_with('0') {
        return Err(InvalidIdentifier::format(&number));
    }
    if number.len() != 9 {
        return Err(InvalidIdentifier::length(&number));
    }
    if mod_11_10_checksum(&number) != 1 {
        return Err(InvalidIdentifier::checksum(&number));
    }
    Ok(number)
}

fn dk_compact(number: &str) -> String {
    compact_with(number, " -.,/:", "DK")
}

/// Danish CVR: 8 digits, weighted mod 11.
fn dk_validate(number: &str) -> Result<String, InvalidIdentifier> {
    let number = dk_compact(number);
    if !is_digits(&number) || number.starts_with('0') {
        return Err(InvalidIdentifier::format(&number));
    }
    if number.len() != 8 {
        return Err(InvalidIdentifier::length(&number));
    }
    if weighted_sum(&number, &[2, 7, 6, 5, 4, 3, 2, 1]) % 11 != 0 {
        return Err(InvalidIdentifier::checksum(&number));
    }
    Ok(number)
}

fn fi_compact(number: &str) -> String {
    compact_with(number, " -", "FI")
}

/// Finnish ALV: 8 digits, weighted mod 11.
fn fi_validate(number: &str) -> Result<String, InvalidIdentifier> {
    let number = fi_compact(number);
    if !is_digits(&number) {
        return Err(InvalidIdentifier::format(&number));
    }
    if number.len() != 8 {
        return Err(InvalidIdentifier::length(&number));
    }
    if weighted_sum(&number, &[7, 9, 10, 5, 8, 4, 2, 1]) % 11 != 0 {
        return Err(InvalidIdentifier::checksum(&number));
    }
    Ok(number)
}

fn fr_compact(number: &str) -> String {
    compact_with(number, " -.", "FR")
}

/// French TVA: 2-digit key followed by the 9-digit SIREN.
///
/// Only numeric keys are accepted. SIRENs starting with `000` (Monaco) skip
/// the SIREN Luhn check.
fn fr_validate(number: &str) -> Result<String, InvalidIdentifier> {
    let number = fr_compact(number);
    if !is_digits(&number) {
        return Err(InvalidIdentifier::format(&number));
    }
    if number.len() != 11 {
        return Err(InvalidIdentifier::length(&number));
    }
    let (key, siren) = number.split_at(2);
    if !siren.starts_with("000") && luhn_checksum(siren) != 0 {
        return Err(InvalidIdentifier::checksum(&number));
    }
    let expected = mod_97_10_remainder(&format!("{siren}12")).unwrap_or(u64::MAX);
    if key.parse::<u64>().ok() != Some(expected) {
        return Err(InvalidIdentifier::checksum(&number));
    }
    Ok(number)
}

fn lu_compact(number: &str) -> String {
    compact_with(number, " :.-", "LU")
}

/// Luxembourg TVA: 6 digits followed by their remainder mod 89.
fn lu_validate(number: &str) -> Result<String, InvalidIdentifier> {
    let number = lu_compact(number);
    if !is_digits(&number) {
        return Err(InvalidIdentifier::format(&number));
    }
    if number.len() != 8 {
        return Err(InvalidIdentifier::length(&number));
    }
    let (base, check) = number.split_at(6);
    let base: u64 = base.parse().map_err(|_| InvalidIdentifier::format(&number))?;
    let check: u64 = check.parse().map_err(|_| InvalidIdentifier::format(&number))?;
    if base % 89 != check {
        return Err(InvalidIdentifier::checksum(&number));
    }
    Ok(number)
}

/// Dutch BTW: the 9-digit part is zero-padded, the `Bnn` suffix kept.
fn nl_compact(number: &str) -> String {
    let number = compact_with(number, " -.", "NL");
    if number.len() < 3 || !number.is_ascii() {
        return number;
    }
    let (base, suffix) = number.split_at(number.len() - 3);
    format!("{base:0>9}{suffix}")
}

fn nl_bsn_checksum(base: &str) -> i64 {
    let (head, last) = base.split_at(8);
    let sum = weighted_sum(head, &[9, 8, 7, 6, 5, 4, 3, 2]);
    (sum - i64::from(last.as_bytes()[0] - b'0')).rem_euclid(11)
}

/// Dutch BTW: 9 digits, `B`, 2 digits. The 9 digits pass the BSN
/// eleven-test, or the whole `NL` number passes ISO 7064 Mod 97, 10.
fn nl_validate(number: &str) -> Result<String, InvalidIdentifier> {
    let number = nl_compact(number);
    if !number.is_ascii() {
        return Err(InvalidIdentifier::format(&number));
    }
    if number.len() != 12 {
        return Err(InvalidIdentifier::length(&number));
    }
    let (base, suffix) = number.split_at(9);
    let suffix_digits = suffix.get(1..).unwrap_or_default();
    if !is_digits(base) || base.bytes().all(|b| b == b'0') {
        return Err(InvalidIdentifier::format(&number));
    }
    if !suffix.starts_with('B') || !is_digits(suffix_digits) || suffix_digits == "00" {
        return Err(InvalidIdentifier::format(&number));
    }
    let bsn_ok = nl_bsn_checksum(base) == 0;
    let mod97_ok = mod_97_10_remainder(&format!("NL{number}")) == Some(1);
    if !bsn_ok && !mod97_ok {
        return Err(InvalidIdentifier::checksum(&number));
    }
    Ok(number)
}

fn pl_compact(number: &str) -> String {
    compact_with(number, " -", "PL")
}

/// Polish NIP: 10 digits, weighted mod 11.
fn pl_validate(number: &str) -> Result<String, InvalidIdentifier> {
    let number = pl_compact(number);
    if !is_digits(&number) {
        return Err(InvalidIdentifier::format(&number));
    }
    if number.len() != 10 {
        return Err(InvalidIdentifier::length(&number));
    }
    if weighted_sum(&number, &[6, 5, 7, 2, 3, 4, 5, 6, 7, -1]).rem_euclid(11) != 0 {
        return Err(InvalidIdentifier::checksum(&number));
    }
    Ok(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countries_are_sorted_and_unique() {
        let codes: Vec<_> = supported_countries().collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_be_pads_nine_digit_numbers() {
        assert_eq!(be_compact("403019261"), "0403019261");
        assert_eq!(be_validate("403019261").unwrap(), "0403019261");
    }

    #[test]
    fn test_nl_pads_short_base() {
        assert_eq!(nl_compact("4495445B01"), "004495445B01");
    }

    #[test]
    fn test_fr_rejects_alphabetic_keys() {
        assert!(matches!(
            fr_validate("K7399859412"),
            Err(InvalidIdentifier::Format { .. })
        ));
    }
}
