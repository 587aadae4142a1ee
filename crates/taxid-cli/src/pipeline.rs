//! One cleaning or validation run over a CSV file.
//!
//! The binary turns command line arguments into a [`CleanJob`] or
//! [`ValidateJob`]; everything from reading the input to producing the run
//! summary happens here.

use std::path::PathBuf;

use anyhow::{Context, Result};
use polars::prelude::*;
use serde::Serialize;
use tracing::{info, info_span, warn};

use taxid_clean::{
    CleanError, CleanOutput, ParallelMapper, SequentialMapper, Validation, ValidationTarget,
    clean_pe_ruc_with, clean_vatin_with, validate_pe_ruc, validate_vatin,
};
use taxid_model::{CleanReport, RucCleanOptions, VatCleanOptions};
use taxid_standards::{PeRuc, Vatin};

use crate::io::{read_csv, write_csv};
use crate::logging::redact_value;

/// Identifier kind a run works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    Ruc,
    Vat,
}

impl IdentifierKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ruc => "ruc",
            Self::Vat => "vat",
        }
    }
}

/// How a column is mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Execution {
    Sequential,
    Parallel { chunk_size: usize },
}

/// Cleaner configuration for one identifier kind.
#[derive(Debug, Clone)]
pub enum CleanSettings {
    Ruc(RucCleanOptions),
    Vat(VatCleanOptions),
}

impl CleanSettings {
    pub fn kind(&self) -> IdentifierKind {
        match self {
            Self::Ruc(_) => IdentifierKind::Ruc,
            Self::Vat(_) => IdentifierKind::Vat,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CleanJob {
    pub input: PathBuf,
    pub column: String,
    pub settings: CleanSettings,
    pub execution: Execution,
    /// Destination CSV; stdout when `None`.
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ValidateJob {
    pub input: PathBuf,
    pub kind: IdentifierKind,
    /// Validate one column; every column when `None`.
    pub column: Option<String>,
    pub output: Option<PathBuf>,
}

/// Summary of a cleaning run.
#[derive(Debug, Clone, Serialize)]
pub struct CleanRun {
    pub kind: IdentifierKind,
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub column: String,
    pub report: CleanReport,
}

/// Summary of a validation run.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateRun {
    pub kind: IdentifierKind,
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub columns: Vec<ColumnValidity>,
}

/// Valid and invalid cell counts of one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnValidity {
    pub column: String,
    pub valid: usize,
    pub invalid: usize,
}

/// Suffix of the boolean column added by a single-column validation.
pub const VALID_SUFFIX: &str = "_valid";

/// Clean one column of a DataFrame with the configured mapper.
pub fn clean_frame(
    df: &DataFrame,
    column: &str,
    settings: &CleanSettings,
    execution: Execution,
) -> taxid_clean::Result<CleanOutput> {
    match (settings, execution) {
        (CleanSettings::Ruc(options), Execution::Sequential) => {
            clean_pe_ruc_with(df, column, options, &PeRuc, &SequentialMapper)
        }
        (CleanSettings::Ruc(options), Execution::Parallel { chunk_size }) => {
            let mapper = ParallelMapper::new().with_chunk_size(chunk_size);
            clean_pe_ruc_with(df, column, options, &PeRuc, &mapper)
        }
        (CleanSettings::Vat(options), Execution::Sequential) => {
            clean_vatin_with(df, column, options, &Vatin, &SequentialMapper)
        }
        (CleanSettings::Vat(options), Execution::Parallel { chunk_size }) => {
            let mapper = ParallelMapper::new().with_chunk_size(chunk_size);
            clean_vatin_with(df, column, options, &Vatin, &mapper)
        }
    }
}

/// Read, clean and write one CSV file.
pub fn run_clean(job: &CleanJob) -> Result<CleanRun> {
    let kind = job.settings.kind();
    let span = info_span!("run", kind = kind.as_str(), input = %job.input.display());
    let _guard = span.enter();

    let df = read_csv(&job.input)?;
    info!(rows = df.height(), columns = df.width(), "input loaded");

    let output = match clean_frame(&df, &job.column, &job.settings, job.execution) {
        Ok(output) => output,
        Err(CleanError::Unparseable { value }) => {
            warn!(value = redact_value(&value), "invalid identifier under raise policy");
            return Err(CleanError::Unparseable { value })
                .with_context(|| format!("clean column {}", job.column));
        }
        Err(err) => return Err(err).with_context(|| format!("clean column {}", job.column)),
    };
    let CleanOutput { mut frame, report } = output;
    write_csv(&mut frame, job.output.as_deref())?;
    info!(
        valid = report.valid,
        invalid = report.invalid,
        null = report.null,
        "run finished"
    );

    Ok(CleanRun {
        kind,
        input: job.input.clone(),
        output: job.output.clone(),
        column: job.column.clone(),
        report,
    })
}

/// Validate one column, or every column, of a DataFrame.
///
/// With a column, the result is the input plus a `<column>_valid` flag
/// column. Without one, the result holds one flag column per input column.
pub fn validate_frame(
    df: &DataFrame,
    kind: IdentifierKind,
    column: Option<&str>,
) -> taxid_clean::Result<(DataFrame, Vec<ColumnValidity>)> {
    let target = ValidationTarget::Table { frame: df, column };
    let validation = match kind {
        IdentifierKind::Ruc => validate_pe_ruc(target)?,
        IdentifierKind::Vat => validate_vatin(target)?,
    };
    match validation {
        Validation::Column(flags) => {
            let counts = vec![column_validity(&flags)?];
            let name = format!("{}{VALID_SUFFIX}", flags.name());
            let mut frame = df.clone();
            frame.with_column(flags.with_name(name.into()))?;
            Ok((frame, counts))
        }
        Validation::Table(flags) => {
            let counts = flags
                .get_columns()
                .iter()
                .map(|column| column_validity(column.as_materialized_series()))
                .collect::<taxid_clean::Result<Vec<_>>>()?;
            Ok((flags, counts))
        }
        // A table target never validates to a scalar.
        Validation::Scalar(_) => Ok((DataFrame::empty(), Vec::new())),
    }
}

fn column_validity(flags: &Series) -> taxid_clean::Result<ColumnValidity> {
    let valid = flags
        .bool()?
        .into_iter()
        .filter(|flag| *flag == Some(true))
        .count();
    Ok(ColumnValidity {
        column: flags.name().to_string(),
        valid,
        invalid: flags.len() - valid,
    })
}

/// Read, validate and write one CSV file.
pub fn run_validate(job: &ValidateJob) -> Result<ValidateRun> {
    let span = info_span!("run", kind = job.kind.as_str(), input = %job.input.display());
    let _guard = span.enter();

    let df = read_csv(&job.input)?;
    let (mut frame, columns) =
        validate_frame(&df, job.kind, job.column.as_deref()).context("validate input")?;
    write_csv(&mut frame, job.output.as_deref())?;

    Ok(ValidateRun {
        kind: job.kind,
        input: job.input.clone(),
        output: job.output.clone(),
        columns,
    })
}
