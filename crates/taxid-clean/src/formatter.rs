//! Per-value cleaning.
//!
//! Every cleaner runs the same state machine on the string form of a cell:
//!
//! 1. null sentinel → absent, whatever the error policy
//! 2. invalid → abort (`raise`), raw value (`ignore`) or absent (`coerce`)
//! 3. valid → the oracle's compact form, optionally decomposed
//!
//! [`RucFormatter`] and [`VatFormatter`] differ only in step 3.

use taxid_common::is_null_value;
use taxid_model::{ErrorPolicy, Outcome, ResultRow, RucFormat, VatFormat};
use taxid_standards::{ChecksumOracle, FiscalRegistryOracle, VatOracle};

use crate::error::{CleanError, Result};

/// A cleaned row and how it came about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    pub row: ResultRow,
    pub outcome: Outcome,
}

impl Formatted {
    fn single(value: Option<String>, outcome: Outcome) -> Self {
        Self {
            row: ResultRow::Single(value),
            outcome,
        }
    }
}

/// Cleans one raw value.
///
/// Implementations are pure: the result depends on `raw` alone, so a
/// column may be mapped in any order or on any number of threads.
pub trait ValueFormatter: Sync {
    /// Whether rows carry the `country_code` and `identifier` components.
    fn split(&self) -> bool {
        false
    }

    fn format(&self, raw: &str) -> Result<Formatted>;
}

/// Result of the shared null and validity checks.
enum Screen {
    Null,
    Rejected(Option<String>),
    Accepted,
}

fn screen<O: ChecksumOracle + ?Sized>(raw: &str, oracle: &O, errors: ErrorPolicy) -> Result<Screen> {
    if is_null_value(raw) {
        return Ok(Screen::Null);
    }
    if oracle.is_valid(raw) {
        return Ok(Screen::Accepted);
    }
    match errors {
        ErrorPolicy::Raise => Err(CleanError::Unparseable {
            value: raw.to_string(),
        }),
        ErrorPolicy::Ignore => Ok(Screen::Rejected(Some(raw.to_string()))),
        ErrorPolicy::Coerce => Ok(Screen::Rejected(None)),
    }
}

/// Formatter for Peruvian RUC numbers.
#[derive(Debug)]
pub struct RucFormatter<'o, O: ?Sized> {
    oracle: &'o O,
    output_format: RucFormat,
    errors: ErrorPolicy,
}

impl<'o, O: FiscalRegistryOracle + ?Sized> RucFormatter<'o, O> {
    pub fn new(oracle: &'o O, output_format: RucFormat, errors: ErrorPolicy) -> Self {
        Self {
            oracle,
            output_format,
            errors,
        }
    }
}

impl<O: FiscalRegistryOracle + ?Sized> ValueFormatter for RucFormatter<'_, O> {
    fn format(&self, raw: &str) -> Result<Formatted> {
        let formatted = match screen(raw, self.oracle, self.errors)? {
            Screen::Null => Formatted::single(None, Outcome::Null),
            Screen::Rejected(value) => Formatted::single(value, Outcome::Invalid),
            Screen::Accepted => match self.output_format {
                RucFormat::Compact | RucFormat::Standard => {
                    Formatted::single(Some(self.oracle.compact(raw)), Outcome::Valid)
                }
                // Companies have no DNI. This is data, not an error, so it
                // bypasses the error policy.
                RucFormat::Dni => match self.oracle.extract_personal_id(raw) {
                    Ok(dni) => Formatted::single(Some(dni), Outcome::Valid),
                    Err(_) => Formatted::single(None, Outcome::NotPersonal),
                },
            },
        };
        Ok(formatted)
    }
}

/// Formatter for VAT identification numbers.
#[derive(Debug)]
pub struct VatFormatter<'o, O: ?Sized> {
    oracle: &'o O,
    output_format: VatFormat,
    split: bool,
    errors: ErrorPolicy,
}

impl<'o, O: VatOracle + ?Sized> VatFormatter<'o, O> {
    pub fn new(oracle: &'o O, output_format: VatFormat, split: bool, errors: ErrorPolicy) -> Self {
        Self {
            oracle,
            output_format,
            split,
            errors,
        }
    }

    fn shaped(&self, whole: Option<String>) -> ResultRow {
        if self.split {
            ResultRow::Split {
                whole,
                country_code: None,
                identifier: None,
            }
        } else {
            ResultRow::Single(whole)
        }
    }

    fn normalized(&self, raw: &str) -> String {
        match self.output_format {
            // No separator layout exists for the standard form yet.
            VatFormat::Compact | VatFormat::Standard => self.oracle.compact(raw),
        }
    }
}

impl<O: VatOracle + ?Sized> ValueFormatter for VatFormatter<'_, O> {
    fn split(&self) -> bool {
        self.split
    }

    fn format(&self, raw: &str) -> Result<Formatted> {
        let formatted = match screen(raw, self.oracle, self.errors)? {
            Screen::Null => Formatted {
                row: ResultRow::absent(self.split),
                outcome: Outcome::Null,
            },
            Screen::Rejected(value) => Formatted {
                row: self.shaped(value),
                outcome: Outcome::Invalid,
            },
            Screen::Accepted => {
                let whole = self.normalized(raw);
                let row = if self.split {
                    ResultRow::Split {
                        country_code: whole.get(..2).map(str::to_string),
                        identifier: whole.get(2..).map(str::to_string),
                        whole: Some(whole),
                    }
                } else {
                    ResultRow::Single(Some(whole))
                };
                Formatted {
                    row,
                    outcome: Outcome::Valid,
                }
            }
        };
        Ok(formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxid_standards::{PeRuc, Vatin};

    fn ruc(format: RucFormat, errors: ErrorPolicy, raw: &str) -> Result<Formatted> {
        RucFormatter::new(&PeRuc, format, errors).format(raw)
    }

    fn vat(split: bool, errors: ErrorPolicy, raw: &str) -> Result<Formatted> {
        VatFormatter::new(&Vatin, VatFormat::Standard, split, errors).format(raw)
    }

    #[test]
    fn test_ruc_valid_is_compacted() {
        let formatted = ruc(RucFormat::Standard, ErrorPolicy::Coerce, "20512 333-797").unwrap();
        assert_eq!(formatted.row, ResultRow::Single(Some("20512333797".to_string())));
        assert_eq!(formatted.outcome, Outcome::Valid);
        let compact = ruc(RucFormat::Compact, ErrorPolicy::Coerce, "20512 333-797").unwrap();
        assert_eq!(compact.row, formatted.row);
    }

    #[test]
    fn test_ruc_invalid_follows_policy() {
        let coerced = ruc(RucFormat::Standard, ErrorPolicy::Coerce, "20512333798").unwrap();
        assert_eq!(coerced.row, ResultRow::Single(None));
        assert_eq!(coerced.outcome, Outcome::Invalid);

        let ignored = ruc(RucFormat::Standard, ErrorPolicy::Ignore, "20512333798").unwrap();
        assert_eq!(ignored.row, ResultRow::Single(Some("20512333798".to_string())));

        let raised = ruc(RucFormat::Standard, ErrorPolicy::Raise, "20512333798");
        assert!(matches!(raised, Err(CleanError::Unparseable { value }) if value == "20512333798"));
    }

    #[test]
    fn test_ruc_null_is_policy_exempt() {
        for errors in [ErrorPolicy::Coerce, ErrorPolicy::Ignore, ErrorPolicy::Raise] {
            let formatted = ruc(RucFormat::Dni, errors, "NaN").unwrap();
            assert_eq!(formatted.row, ResultRow::Single(None));
            assert_eq!(formatted.outcome, Outcome::Null);
        }
    }

    #[test]
    fn test_ruc_dni_of_company_is_absent_even_when_raising() {
        let formatted = ruc(RucFormat::Dni, ErrorPolicy::Raise, "20512333797").unwrap();
        assert_eq!(formatted.row, ResultRow::Single(None));
        assert_eq!(formatted.outcome, Outcome::NotPersonal);
    }

    #[test]
    fn test_ruc_dni_of_person() {
        let formatted = ruc(RucFormat::Dni, ErrorPolicy::Coerce, "10467793549").unwrap();
        assert_eq!(formatted.row, ResultRow::Single(Some("46779354".to_string())));
    }

    #[test]
    fn test_vat_split() {
        let formatted = vat(true, ErrorPolicy::Coerce, "FR 40 303 265 045").unwrap();
        assert_eq!(
            formatted.row,
            ResultRow::Split {
                whole: Some("FR40303265045".to_string()),
                country_code: Some("FR".to_string()),
                identifier: Some("40303265045".to_string()),
            }
        );
    }

    #[test]
    fn test_vat_invalid_keeps_shape() {
        let ignored = vat(true, ErrorPolicy::Ignore, "FR 41 303 265 045").unwrap();
        assert_eq!(
            ignored.row,
            ResultRow::Split {
                whole: Some("FR 41 303 265 045".to_string()),
                country_code: None,
                identifier: None,
            }
        );
        let coerced = vat(false, ErrorPolicy::Coerce, "FR 41 303 265 045").unwrap();
        assert_eq!(coerced.row, ResultRow::Single(None));
    }

    #[test]
    fn test_vat_null_shapes() {
        assert_eq!(vat(true, ErrorPolicy::Raise, "").unwrap().row, ResultRow::absent(true));
        assert_eq!(vat(false, ErrorPolicy::Raise, "None").unwrap().row, ResultRow::absent(false));
    }

    #[test]
    fn test_vat_standard_equals_compact() {
        let compact = VatFormatter::new(&Vatin, VatFormat::Compact, false, ErrorPolicy::Coerce)
            .format("DE136,695 976")
            .unwrap();
        let standard = VatFormatter::new(&Vatin, VatFormat::Standard, false, ErrorPolicy::Coerce)
            .format("DE136,695 976")
            .unwrap();
        assert_eq!(compact, standard);
    }
}
