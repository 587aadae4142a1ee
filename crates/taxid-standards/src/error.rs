//! Error types for identifier validation.

use thiserror::Error;

/// Why a number failed validation.
///
/// Each variant carries the compacted number that was checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidIdentifier {
    #[error("invalid length: {number}")]
    Length { number: String },

    #[error("invalid format: {number}")]
    Format { number: String },

    /// A structural part (prefix, country code) has an unknown value.
    #[error("invalid component: {number}")]
    Component { number: String },

    #[error("invalid checksum: {number}")]
    Checksum { number: String },
}

impl InvalidIdentifier {
    pub(crate) fn length(number: &str) -> Self {
        Self::Length {
            number: number.to_string(),
        }
    }

    pub(crate) fn format(number: &str) -> Self {
        Self::Format {
            number: number.to_string(),
        }
    }

    pub(crate) fn component(number: &str) -> Self {
        Self::Component {
            number: number.to_string(),
        }
    }

    pub(crate) fn checksum(number: &str) -> Self {
        Self::Checksum {
            number: number.to_string(),
        }
    }
}

/// Failure to derive a sub-identifier from a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecompositionError {
    #[error("{number} does not belong to a natural person")]
    NotNaturalPerson { number: String },

    #[error(transparent)]
    Invalid(#[from] InvalidIdentifier),
}
