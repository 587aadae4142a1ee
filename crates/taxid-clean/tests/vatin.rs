//! Tests for VAT column cleaning.

use polars::prelude::*;
use taxid_clean::{CleanError, SequentialMapper, clean_vatin, clean_vatin_with};
use taxid_model::{ErrorPolicy, VatCleanOptions, VatFormat};
use taxid_standards::Vatin;

fn vat_df(values: &[&str]) -> DataFrame {
    DataFrame::new(vec![
        Series::new(
            "vatin".into(),
            values.iter().copied().map(String::from).collect::<Vec<_>>(),
        )
        .into_column(),
    ])
    .unwrap()
}

fn options() -> VatCleanOptions {
    VatCleanOptions::new().with_progress(false)
}

fn values(df: &DataFrame, column: &str) -> Vec<Option<String>> {
    df.column(column)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|value| value.map(String::from))
        .collect()
}

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

#[test]
fn test_inplace_cleaning() {
    let df = vat_df(&["FR 40 303 265 045", "DE136,695 976"]);

    let cleaned = clean_vatin(&df, "vatin", &options().with_inplace(true)).unwrap();

    assert_eq!(cleaned.width(), 1);
    assert_eq!(
        values(&cleaned, "vatin"),
        vec![some("FR40303265045"), some("DE136695976")]
    );
}

#[test]
fn test_split_adds_components() {
    let df = vat_df(&["FR 40 303 265 045", "N/A", "FR 41 303 265 045"]);

    let cleaned = clean_vatin(&df, "vatin", &options().with_split(true)).unwrap();

    let names: Vec<String> = cleaned
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(names, vec!["vatin", "vatin_clean", "country_code", "identifier"]);
    assert_eq!(
        values(&cleaned, "vatin_clean"),
        vec![some("FR40303265045"), None, None]
    );
    assert_eq!(values(&cleaned, "country_code"), vec![some("FR"), None, None]);
    assert_eq!(
        values(&cleaned, "identifier"),
        vec![some("40303265045"), None, None]
    );
}

#[test]
fn test_split_ignore_keeps_raw_value_only_in_clean_column() {
    let df = vat_df(&["XX 123"]);
    let opts = options().with_split(true).with_errors(ErrorPolicy::Ignore);

    let cleaned = clean_vatin(&df, "vatin", &opts).unwrap();

    assert_eq!(values(&cleaned, "vatin_clean"), vec![some("XX 123")]);
    assert_eq!(values(&cleaned, "country_code"), vec![None]);
    assert_eq!(values(&cleaned, "identifier"), vec![None]);
}

#[test]
fn test_split_inplace() {
    let df = vat_df(&["DE136,695 976"]);
    let opts = options().with_split(true).with_inplace(true);

    let cleaned = clean_vatin(&df, "vatin", &opts).unwrap();

    let names: Vec<String> = cleaned
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(names, vec!["vatin", "country_code", "identifier"]);
    assert_eq!(values(&cleaned, "vatin"), vec![some("DE136695976")]);
    assert_eq!(values(&cleaned, "identifier"), vec![some("136695976")]);
}

#[test]
fn test_compact_and_standard_agree() {
    let df = vat_df(&["FR 40 303 265 045", "BE 0403.019.261", "nonsense"]);

    let compact = clean_vatin(
        &df,
        "vatin",
        &options().with_output_format(VatFormat::Compact),
    )
    .unwrap();
    let standard = clean_vatin(
        &df,
        "vatin",
        &options().with_output_format(VatFormat::Standard),
    )
    .unwrap();

    assert_eq!(values(&compact, "vatin_clean"), values(&standard, "vatin_clean"));
}

#[test]
fn test_raise_names_first_invalid_value() {
    let df = vat_df(&["FR 40 303 265 045", "DE 000", "ZZ1"]);
    let opts = options().with_errors(ErrorPolicy::Raise);

    let err = clean_vatin_with(&df, "vatin", &opts, &Vatin, &SequentialMapper).unwrap_err();

    assert!(matches!(err, CleanError::Unparseable { value } if value == "DE 000"));
}

#[test]
fn test_report_counts() {
    let df = vat_df(&["FR 40 303 265 045", "", "ZZ1", "DE136695976"]);

    let output =
        clean_vatin_with(&df, "vatin", &options(), &Vatin, &SequentialMapper).unwrap();

    assert_eq!(output.report.rows, 4);
    assert_eq!(output.report.valid, 2);
    assert_eq!(output.report.null, 1);
    assert_eq!(output.report.invalid, 1);
}
