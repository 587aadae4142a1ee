//! Peruvian RUC cleaning and validation.
//!
//! # Examples
//!
//! ```
//! use polars::prelude::*;
//! use taxid_clean::clean_pe_ruc;
//! use taxid_model::RucCleanOptions;
//!
//! let df = df!("ruc" => ["20512333797", "20512333798"]).unwrap();
//! let options = RucCleanOptions::new().with_progress(false);
//! let cleaned = clean_pe_ruc(&df, "ruc", &options).unwrap();
//!
//! let clean = cleaned.column("ruc_clean").unwrap().str().unwrap();
//! assert_eq!(clean.get(0), Some("20512333797"));
//! assert_eq!(clean.get(1), None);
//! ```

use polars::prelude::DataFrame;
use taxid_model::RucCleanOptions;
use taxid_standards::{FiscalRegistryOracle, PeRuc};
use tracing::info_span;

use crate::error::Result;
use crate::executor::{CleanOutput, execute_clean};
use crate::formatter::RucFormatter;
use crate::mapper::{ColumnMapper, ParallelMapper};
use crate::validate::{Validation, ValidationTarget, validate_with};

/// Clean a column of RUC numbers with the built-in oracle on the rayon pool.
///
/// Adds `<column>_clean` (or replaces `column` when `inplace`). With
/// `output_format = dni` the clean column holds the DNI of natural persons
/// and is missing for companies.
pub fn clean_pe_ruc(df: &DataFrame, column: &str, options: &RucCleanOptions) -> Result<DataFrame> {
    clean_pe_ruc_with(df, column, options, &PeRuc, &ParallelMapper::default())
        .map(|output| output.frame)
}

/// Clean a column of RUC numbers with an explicit oracle and mapper.
pub fn clean_pe_ruc_with<O, M>(
    df: &DataFrame,
    column: &str,
    options: &RucCleanOptions,
    oracle: &O,
    mapper: &M,
) -> Result<CleanOutput>
where
    O: FiscalRegistryOracle + ?Sized,
    M: ColumnMapper,
{
    let span = info_span!(
        "clean_pe_ruc",
        column = %column,
        rows = df.height(),
        output_format = %options.output_format,
        errors = %options.errors,
        inplace = options.inplace
    );
    let _guard = span.enter();
    let formatter = RucFormatter::new(oracle, options.output_format, options.errors);
    execute_clean(df, column, &formatter, mapper, options.inplace, options.progress)
}

/// Validate RUC numbers in a scalar, column or table.
pub fn validate_pe_ruc<'a>(target: impl Into<ValidationTarget<'a>>) -> Result<Validation> {
    validate_with(target.into(), &PeRuc)
}
