//! Per-row cleaning results.

/// The cleaned form of one input row.
///
/// `None` is the absence marker and becomes a null cell in the output column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultRow {
    /// One output column.
    Single(Option<String>),
    /// The whole identifier plus its country code and body.
    Split {
        whole: Option<String>,
        country_code: Option<String>,
        identifier: Option<String>,
    },
}

impl ResultRow {
    /// An all-absent row in the requested shape.
    pub fn absent(split: bool) -> Self {
        if split {
            Self::Split {
                whole: None,
                country_code: None,
                identifier: None,
            }
        } else {
            Self::Single(None)
        }
    }

    /// The value destined for the `<column>_clean` column.
    pub fn whole(&self) -> Option<&str> {
        match self {
            Self::Single(value) => value.as_deref(),
            Self::Split { whole, .. } => whole.as_deref(),
        }
    }

    /// Number of output columns this row occupies.
    pub fn width(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Split { .. } => 3,
        }
    }

    /// Splits the row into `(whole, country_code, identifier)`.
    ///
    /// Single rows yield absent trailing components.
    pub fn into_parts(self) -> (Option<String>, Option<String>, Option<String>) {
        match self {
            Self::Single(value) => (value, None, None),
            Self::Split {
                whole,
                country_code,
                identifier,
            } => (whole, country_code, identifier),
        }
    }
}

/// What happened to a row while it was cleaned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The raw value was a null sentinel.
    Null,
    /// The raw value failed validation.
    Invalid,
    /// The raw value was valid and normalized.
    Valid,
    /// Valid RUC whose DNI was requested, but it does not belong to a person.
    NotPersonal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_shapes() {
        assert_eq!(ResultRow::absent(false), ResultRow::Single(None));
        assert_eq!(ResultRow::absent(true).width(), 3);
        assert_eq!(ResultRow::absent(true).whole(), None);
    }

    #[test]
    fn test_into_parts() {
        let row = ResultRow::Split {
            whole: Some("FR40303265045".to_string()),
            country_code: Some("FR".to_string()),
            identifier: Some("40303265045".to_string()),
        };
        assert_eq!(row.whole(), Some("FR40303265045"));
        let (whole, cc, body) = row.into_parts();
        assert_eq!(whole.as_deref(), Some("FR40303265045"));
        assert_eq!(cc.as_deref(), Some("FR"));
        assert_eq!(body.as_deref(), Some("40303265045"));

        let (whole, cc, body) = ResultRow::Single(Some("x".to_string())).into_parts();
        assert_eq!(whole.as_deref(), Some("x"));
        assert!(cc.is_none() && body.is_none());
    }
}
