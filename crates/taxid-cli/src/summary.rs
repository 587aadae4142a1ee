//! Run summaries on stderr.
//!
//! stdout may carry the cleaned CSV, so summaries always go to stderr.

use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use taxid_cli::pipeline::{CleanRun, ValidateRun};

use crate::cli::SummaryFormatArg;

pub fn print_clean_summary(run: &CleanRun, format: SummaryFormatArg) -> Result<()> {
    if format == SummaryFormatArg::Json {
        return print_json(run);
    }
    eprintln!("Input: {}", run.input.display());
    if let Some(path) = &run.output {
        eprintln!("Output: {}", path.display());
    }
    let report = &run.report;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Kind"),
        header_cell("Rows"),
        header_cell("Valid"),
        header_cell("Invalid"),
        header_cell("Null"),
        header_cell("Not personal"),
    ]);
    apply_table_style(&mut table);
    for index in 2..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(&run.column)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(run.kind.as_str()),
        Cell::new(report.rows),
        count_cell(report.valid, Color::Green),
        count_cell(report.invalid, Color::Red),
        count_cell(report.null, Color::Yellow),
        count_cell(report.not_personal, Color::Yellow),
    ]);
    eprintln!("{table}");
    Ok(())
}

pub fn print_validate_summary(run: &ValidateRun, format: SummaryFormatArg) -> Result<()> {
    if format == SummaryFormatArg::Json {
        return print_json(run);
    }
    eprintln!("Input: {}", run.input.display());
    if let Some(path) = &run.output {
        eprintln!("Output: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Valid"),
        header_cell("Invalid"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut total_valid = 0usize;
    let mut total_invalid = 0usize;
    for column in &run.columns {
        total_valid += column.valid;
        total_invalid += column.invalid;
        table.add_row(vec![
            Cell::new(&column.column).fg(Color::Blue),
            count_cell(column.valid, Color::Green),
            count_cell(column.invalid, Color::Red),
        ]);
    }
    if run.columns.len() > 1 {
        table.add_row(vec![
            Cell::new("TOTAL")
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            count_cell(total_valid, Color::Green).add_attribute(Attribute::Bold),
            count_cell(total_invalid, Color::Red).add_attribute(Attribute::Bold),
        ]);
    }
    eprintln!("{table}");
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    eprintln!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
