//! Configuration options for identifier cleaning.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How a cleaner handles values that fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Invalid values become missing.
    #[default]
    Coerce,
    /// Invalid values pass through unchanged.
    Ignore,
    /// The first invalid value aborts the whole operation.
    Raise,
}

impl ErrorPolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Coerce => "coerce",
            Self::Ignore => "ignore",
            Self::Raise => "raise",
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coerce" => Ok(Self::Coerce),
            "ignore" => Ok(Self::Ignore),
            "raise" => Ok(Self::Raise),
            other => Err(ConfigError::InvalidErrorPolicy {
                value: other.to_string(),
            }),
        }
    }
}

/// Output format for Peruvian RUC numbers.
///
/// RUC has no separator scheme, so `Compact` and `Standard` render the same
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RucFormat {
    Compact,
    #[default]
    Standard,
    /// The DNI (CUI) of a natural person, missing for companies.
    Dni,
}

impl RucFormat {
    const EXPECTED: &'static str = "\"compact\", \"standard\" or \"dni\"";

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Standard => "standard",
            Self::Dni => "dni",
        }
    }
}

impl fmt::Display for RucFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RucFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compact" => Ok(Self::Compact),
            "standard" => Ok(Self::Standard),
            "dni" => Ok(Self::Dni),
            other => Err(ConfigError::InvalidOutputFormat {
                value: other.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

/// Output format for VAT identification numbers.
///
/// `Standard` currently renders exactly like `Compact`: no country-specific
/// separator layout is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VatFormat {
    Compact,
    #[default]
    Standard,
}

impl VatFormat {
    const EXPECTED: &'static str = "\"compact\" or \"standard\"";

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Standard => "standard",
        }
    }
}

impl fmt::Display for VatFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VatFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compact" => Ok(Self::Compact),
            "standard" => Ok(Self::Standard),
            other => Err(ConfigError::InvalidOutputFormat {
                value: other.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

/// Options for cleaning a column of RUC numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RucCleanOptions {
    pub output_format: RucFormat,
    /// Replace the original column with the cleaned one.
    pub inplace: bool,
    pub errors: ErrorPolicy,
    /// Display a progress bar while the column is processed.
    pub progress: bool,
}

impl Default for RucCleanOptions {
    fn default() -> Self {
        Self {
            output_format: RucFormat::default(),
            inplace: false,
            errors: ErrorPolicy::default(),
            progress: true,
        }
    }
}

impl RucCleanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_output_format(mut self, output_format: RucFormat) -> Self {
        self.output_format = output_format;
        self
    }

    #[must_use]
    pub fn with_inplace(mut self, inplace: bool) -> Self {
        self.inplace = inplace;
        self
    }

    #[must_use]
    pub fn with_errors(mut self, errors: ErrorPolicy) -> Self {
        self.errors = errors;
        self
    }

    #[must_use]
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }
}

/// Options for cleaning a column of VAT identification numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatCleanOptions {
    pub output_format: VatFormat,
    /// Also emit `country_code` and `identifier` columns.
    pub split: bool,
    /// Replace the original column with the cleaned one.
    pub inplace: bool,
    pub errors: ErrorPolicy,
    /// Display a progress bar while the column is processed.
    pub progress: bool,
}

impl Default for VatCleanOptions {
    fn default() -> Self {
        Self {
            output_format: VatFormat::default(),
            split: false,
            inplace: false,
            errors: ErrorPolicy::default(),
            progress: true,
        }
    }
}

impl VatCleanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_output_format(mut self, output_format: VatFormat) -> Self {
        self.output_format = output_format;
        self
    }

    #[must_use]
    pub fn with_split(mut self, split: bool) -> Self {
        self.split = split;
        self
    }

    #[must_use]
    pub fn with_inplace(mut self, inplace: bool) -> Self {
        self.inplace = inplace;
        self
    }

    #[must_use]
    pub fn with_errors(mut self, errors: ErrorPolicy) -> Self {
        self.errors = errors;
        self
    }

    #[must_use]
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }
}
