//! Column cleaning execution.
//!
//! Extracts the source column as strings, maps it through a
//! [`ValueFormatter`] and assembles the output DataFrame.

use polars::prelude::*;
use taxid_common::column_strings;
use taxid_model::{CleanReport, ResultRow};

use crate::error::{CleanError, Result};
use crate::formatter::ValueFormatter;
use crate::mapper::ColumnMapper;
use crate::progress::Progress;

/// Name of the column holding the country code of split VAT numbers.
pub const COUNTRY_CODE_COLUMN: &str = "country_code";

/// Name of the column holding the national part of split VAT numbers.
pub const IDENTIFIER_COLUMN: &str = "identifier";

/// Name of the cleaned column for a source column.
pub fn clean_column_name(column: &str) -> String {
    format!("{column}_clean")
}

/// A cleaned DataFrame with outcome counts.
#[derive(Debug, Clone)]
pub struct CleanOutput {
    pub frame: DataFrame,
    pub report: CleanReport,
}

/// Clean one column of a DataFrame.
///
/// The input frame is not modified. The result holds every input column
/// plus `<column>_clean` (and `country_code`, `identifier` when the
/// formatter splits). With `inplace`, the cleaned values replace the source
/// column under its own name instead.
pub fn execute_clean<F, M>(
    df: &DataFrame,
    column: &str,
    formatter: &F,
    mapper: &M,
    inplace: bool,
    progress: bool,
) -> Result<CleanOutput>
where
    F: ValueFormatter + ?Sized,
    M: ColumnMapper,
{
    let source = df
        .column(column)
        .map_err(|_| CleanError::ColumnNotFound {
            column: column.to_string(),
        })?;
    let raw = column_strings(source)?;

    let progress = Progress::new(raw.len(), progress, column);
    let formatted = mapper.map_column(&raw, &progress, |value| formatter.format(value));
    progress.finish();
    let formatted = match formatted {
        Ok(formatted) => formatted,
        Err(err) => {
            tracing::warn!(column = %column, "cleaning aborted");
            return Err(err);
        }
    };

    let report = CleanReport::from_outcomes(formatted.iter().map(|f| f.outcome));
    tracing::debug!(
        column = %column,
        rows = report.rows,
        valid = report.valid,
        invalid = report.invalid,
        null = report.null,
        not_personal = report.not_personal,
        "column cleaned"
    );

    let rows = formatted.into_iter().map(|f| f.row);
    let frame = assemble(df, column, rows, formatter.split(), inplace)?;
    Ok(CleanOutput { frame, report })
}

/// Build the output DataFrame from cleaned rows.
fn assemble(
    df: &DataFrame,
    column: &str,
    rows: impl ExactSizeIterator<Item = ResultRow>,
    split: bool,
    inplace: bool,
) -> Result<DataFrame> {
    let height = rows.len();
    let mut whole = Vec::with_capacity(height);
    let mut country_codes = Vec::with_capacity(if split { height } else { 0 });
    let mut identifiers = Vec::with_capacity(if split { height } else { 0 });
    for row in rows {
        let (value, country_code, identifier) = row.into_parts();
        whole.push(value);
        if split {
            country_codes.push(country_code);
            identifiers.push(identifier);
        }
    }

    let target = if inplace {
        column.to_string()
    } else {
        clean_column_name(column)
    };

    let mut frame = df.clone();
    frame.with_column(Series::new(target.into(), whole))?;
    if split {
        frame.with_column(Series::new(COUNTRY_CODE_COLUMN.into(), country_codes))?;
        frame.with_column(Series::new(IDENTIFIER_COLUMN.into(), identifiers))?;
    }
    Ok(frame)
}
