//! Peruvian RUC (Registro Único de Contribuyentes).
//!
//! An 11-digit taxpayer number issued by SUNAT. The first two digits give
//! the taxpayer type, the last is a weighted mod-11 check digit. Numbers of
//! natural persons start with `10` and embed the holder's 8-digit DNI.
//!
//! # Examples
//!
//! ```
//! use taxid_standards::{ChecksumOracle, FiscalRegistryOracle, PeRuc};
//!
//! assert!(PeRuc.is_valid("20512333797"));
//! assert!(!PeRuc.is_valid("20512333798"));
//! assert_eq!(PeRuc.extract_personal_id("10467793549").unwrap(), "46779354");
//! ```

use crate::error::{DecompositionError, InvalidIdentifier};
use crate::oracle::{ChecksumOracle, FiscalRegistryOracle};
use crate::util::{clean, is_digits, weighted_sum};

const WEIGHTS: [i64; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Taxpayer type prefixes in use.
const PREFIXES: [&str; 5] = ["10", "15", "16", "17", "20"];

/// Prefix of natural persons with a DNI.
const PERSON_PREFIX: &str = "10";

/// Oracle for Peruvian RUC numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeRuc;

/// Check digit for the first ten digits of a RUC.
pub fn calc_check_digit(number: &str) -> char {
    let remainder = (11 - weighted_sum(number, &WEIGHTS) % 11) % 10;
    char::from(b'0' + remainder as u8)
}

impl ChecksumOracle for PeRuc {
    fn validate(&self, number: &str) -> Result<String, InvalidIdentifier> {
        let number = self.compact(number);
        if number.len() != 11 {
            return Err(InvalidIdentifier::length(&number));
        }
        if !is_digits(&number) {
            return Err(InvalidIdentifier::format(&number));
        }
        if !PREFIXES.contains(&&number[..2]) {
            return Err(InvalidIdentifier::component(&number));
        }
        if number[10..].chars().next() != Some(calc_check_digit(&number[..10])) {
            return Err(InvalidIdentifier::checksum(&number));
        }
        Ok(number)
    }

    fn compact(&self, number: &str) -> String {
        clean(number, " -").trim().to_string()
    }
}

impl FiscalRegistryOracle for PeRuc {
    fn extract_personal_id(&self, number: &str) -> Result<String, DecompositionError> {
        let number = self.validate(number)?;
        if !number.starts_with(PERSON_PREFIX) {
            return Err(DecompositionError::NotNaturalPerson { number });
        }
        Ok(number[2..10].to_string())
    }
}
