//! Checksum oracles for tax identifiers.
//!
//! This crate provides the validation and normalization rules the cleaners
//! consult for each identifier kind:
//!
//! - **oracle**: the narrow traits a cleaner depends on
//! - **ruc**: Peruvian fiscal registry numbers (RUC)
//! - **vatin**: international VAT identification numbers
//! - **util**: character cleaning and check digit algorithms

pub mod error;
pub mod oracle;
pub mod ruc;
pub mod util;
pub mod vatin;

pub use error::{DecompositionError, InvalidIdentifier};
pub use oracle::{ChecksumOracle, FiscalRegistryOracle, VatOracle};
pub use ruc::PeRuc;
pub use vatin::Vatin;
