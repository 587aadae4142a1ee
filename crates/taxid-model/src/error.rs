use thiserror::Error;

/// Rejected configuration value.
///
/// Raised while parsing options, before any row is processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("output_format {value} is invalid. It needs to be {expected}.")]
    InvalidOutputFormat {
        value: String,
        expected: &'static str,
    },
    #[error("errors {value} is invalid. It needs to be \"coerce\", \"ignore\" or \"raise\".")]
    InvalidErrorPolicy { value: String },
}
