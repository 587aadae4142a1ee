//! Oracle traits consulted by the cleaners.
//!
//! A cleaner never inspects identifier structure itself. It asks an oracle
//! whether a string is valid and what its compact form is, so any compliant
//! implementation of the relevant standard can be swapped in.

use crate::error::{DecompositionError, InvalidIdentifier};

/// Validation and normalization for one identifier standard.
pub trait ChecksumOracle: Send + Sync {
    /// Checks the number and returns its compact form.
    fn validate(&self, number: &str) -> Result<String, InvalidIdentifier>;

    /// Removes separators and whitespace without validating.
    fn compact(&self, number: &str) -> String;

    fn is_valid(&self, number: &str) -> bool {
        self.validate(number).is_ok()
    }
}

/// Oracle for fiscal registry numbers that may embed a personal ID.
pub trait FiscalRegistryOracle: ChecksumOracle {
    /// Derives the personal sub-identifier.
    ///
    /// Fails with [`DecompositionError::NotNaturalPerson`] for registry
    /// entries of organizations.
    fn extract_personal_id(&self, number: &str) -> Result<String, DecompositionError>;
}

/// Oracle for VAT numbers, whose compact form starts with a two-letter
/// country code.
pub trait VatOracle: ChecksumOracle {}
