//! VAT identification number cleaning and validation.
//!
//! # Examples
//!
//! ```
//! use polars::prelude::*;
//! use taxid_clean::clean_vatin;
//! use taxid_model::VatCleanOptions;
//!
//! let df = df!("vatin" => ["FR 40 303 265 045", "DE136,695 976"]).unwrap();
//! let options = VatCleanOptions::new().with_inplace(true).with_progress(false);
//! let cleaned = clean_vatin(&df, "vatin", &options).unwrap();
//!
//! let clean = cleaned.column("vatin").unwrap().str().unwrap();
//! assert_eq!(clean.get(0), Some("FR40303265045"));
//! assert_eq!(clean.get(1), Some("DE136695976"));
//! ```

use polars::prelude::DataFrame;
use taxid_model::VatCleanOptions;
use taxid_standards::{VatOracle, Vatin};
use tracing::info_span;

use crate::error::Result;
use crate::executor::{CleanOutput, execute_clean};
use crate::formatter::VatFormatter;
use crate::mapper::{ColumnMapper, ParallelMapper};
use crate::validate::{Validation, ValidationTarget, validate_with};

/// Clean a column of VAT numbers with the built-in oracle on the rayon pool.
///
/// Adds `<column>_clean` (or replaces `column` when `inplace`), plus
/// `country_code` and `identifier` when `split` is set.
pub fn clean_vatin(df: &DataFrame, column: &str, options: &VatCleanOptions) -> Result<DataFrame> {
    clean_vatin_with(df, column, options, &Vatin, &ParallelMapper::default())
        .map(|output| output.frame)
}

/// Clean a column of VAT numbers with an explicit oracle and mapper.
pub fn clean_vatin_with<O, M>(
    df: &DataFrame,
    column: &str,
    options: &VatCleanOptions,
    oracle: &O,
    mapper: &M,
) -> Result<CleanOutput>
where
    O: VatOracle + ?Sized,
    M: ColumnMapper,
{
    let span = info_span!(
        "clean_vatin",
        column = %column,
        rows = df.height(),
        output_format = %options.output_format,
        split = options.split,
        errors = %options.errors,
        inplace = options.inplace
    );
    let _guard = span.enter();
    let formatter = VatFormatter::new(oracle, options.output_format, options.split, options.errors);
    execute_clean(df, column, &formatter, mapper, options.inplace, options.progress)
}

/// Validate VAT numbers in a scalar, column or table.
pub fn validate_vatin<'a>(target: impl Into<ValidationTarget<'a>>) -> Result<Validation> {
    validate_with(target.into(), &Vatin)
}
