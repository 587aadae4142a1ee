//! Validation without normalization.
//!
//! The granularity of the answer follows the granularity of the input: a
//! scalar yields a bool, a column a boolean series of the same length, a
//! whole table a boolean table of the same shape.

use polars::prelude::*;
use taxid_common::column_strings;
use taxid_standards::ChecksumOracle;

use crate::error::{CleanError, Result};

/// What to validate.
#[derive(Debug, Clone, Copy)]
pub enum ValidationTarget<'a> {
    Scalar(&'a str),
    Column(&'a Column),
    /// A whole table, or one of its columns when `column` is given.
    Table {
        frame: &'a DataFrame,
        column: Option<&'a str>,
    },
}

impl<'a> From<&'a str> for ValidationTarget<'a> {
    fn from(value: &'a str) -> Self {
        Self::Scalar(value)
    }
}

impl<'a> From<&'a Column> for ValidationTarget<'a> {
    fn from(column: &'a Column) -> Self {
        Self::Column(column)
    }
}

impl<'a> From<&'a DataFrame> for ValidationTarget<'a> {
    fn from(frame: &'a DataFrame) -> Self {
        Self::Table {
            frame,
            column: None,
        }
    }
}

/// Validation verdicts shaped like their target.
#[derive(Debug, Clone)]
pub enum Validation {
    Scalar(bool),
    /// One verdict per row, named after the validated column.
    Column(Series),
    /// One verdict per cell, with the validated table's column names.
    Table(DataFrame),
}

impl Validation {
    pub fn as_scalar(&self) -> Option<bool> {
        match self {
            Self::Scalar(valid) => Some(*valid),
            _ => None,
        }
    }

    pub fn as_column(&self) -> Option<&Series> {
        match self {
            Self::Column(series) => Some(series),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&DataFrame> {
        match self {
            Self::Table(frame) => Some(frame),
            _ => None,
        }
    }
}

/// Validate a scalar, column or table against an oracle.
///
/// Cells are coerced to strings first; nulls are never valid.
pub fn validate_with<O: ChecksumOracle + ?Sized>(
    target: ValidationTarget<'_>,
    oracle: &O,
) -> Result<Validation> {
    match target {
        ValidationTarget::Scalar(value) => Ok(Validation::Scalar(oracle.is_valid(value))),
        ValidationTarget::Column(column) => validate_column(column, oracle).map(Validation::Column),
        ValidationTarget::Table {
            frame,
            column: Some(name),
        } => {
            let column = frame
                .column(name)
                .map_err(|_| CleanError::ColumnNotFound {
                    column: name.to_string(),
                })?;
            validate_column(column, oracle).map(Validation::Column)
        }
        ValidationTarget::Table {
            frame,
            column: None,
        } => {
            let columns = frame
                .get_columns()
                .iter()
                .map(|column| validate_column(column, oracle).map(IntoColumn::into_column))
                .collect::<Result<Vec<_>>>()?;
            Ok(Validation::Table(DataFrame::new(columns)?))
        }
    }
}

fn validate_column<O: ChecksumOracle + ?Sized>(column: &Column, oracle: &O) -> Result<Series> {
    let verdicts: Vec<bool> = column_strings(column)?
        .iter()
        .map(|value| oracle.is_valid(value))
        .collect();
    Ok(Series::new(column.name().clone(), verdicts))
}
