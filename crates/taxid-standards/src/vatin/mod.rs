//! International VAT identification numbers (VATIN).
//!
//! A VATIN is a two-letter country code followed by the national VAT number.
//! Validation is delegated to the country's own rules; the compact form is
//! the uppercased country code followed by the country's compact body.
//!
//! # Examples
//!
//! ```
//! use taxid_standards::{ChecksumOracle, Vatin};
//!
//! assert_eq!(Vatin.validate("FR 40 303 265 045").unwrap(), "FR40303265045");
//! assert_eq!(Vatin.compact("DE136,695 976"), "DE136695976");
//! assert!(!Vatin.is_valid("XX123456789"));
//! ```

mod countries;

use crate::error::InvalidIdentifier;
use crate::oracle::{ChecksumOracle, VatOracle};

pub use countries::supported_countries;

/// Oracle for VAT numbers of the supported countries.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vatin;

/// Splits a trimmed number into its uppercased country code and the rest.
fn split_country(number: &str) -> Result<(String, &str), InvalidIdentifier> {
    let number = number.trim();
    let code = number
        .get(..2)
        .filter(|code| code.bytes().all(|b| b.is_ascii_alphabetic()))
        .ok_or_else(|| InvalidIdentifier::format(number))?;
    Ok((code.to_ascii_uppercase(), &number[2..]))
}

impl ChecksumOracle for Vatin {
    fn validate(&self, number: &str) -> Result<String, InvalidIdentifier> {
        let (code, body) = split_country(number)?;
        let country =
            countries::lookup(&code).ok_or_else(|| InvalidIdentifier::component(number.trim()))?;
        let body = (country.validate)(body)?;
        Ok(format!("{code}{body}"))
    }

    fn compact(&self, number: &str) -> String {
        match split_country(number) {
            Ok((code, body)) => match countries::lookup(&code) {
                Some(country) => format!("{code}{}", (country.compact)(body)),
                None => number.trim().to_string(),
            },
            Err(_) => number.trim().to_string(),
        }
    }
}

impl VatOracle for Vatin {}
