//! CSV input and output.
//!
//! Every column is read as a string so identifiers keep their leading zeros
//! and separators; the cleaners decide what a value means.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;

/// Read a CSV file with a header row, all columns as strings.
pub fn read_csv(path: &Path) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("open {}", path.display()))?
        .finish()
        .with_context(|| format!("parse {}", path.display()))
}

/// Write `df` as CSV to `path`, or to stdout when `path` is `None`.
pub fn write_csv(df: &mut DataFrame, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create {}", path.display()))?;
            write_to(df, file).with_context(|| format!("write {}", path.display()))
        }
        None => {
            let stdout = io::stdout();
            write_to(df, stdout.lock()).context("write stdout")
        }
    }
}

fn write_to<W: Write>(df: &mut DataFrame, writer: W) -> PolarsResult<()> {
    CsvWriter::new(writer).include_header(true).finish(df)
}
