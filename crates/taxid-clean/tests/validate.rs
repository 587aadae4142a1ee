//! Tests for shape-aware validation.

use polars::prelude::*;
use taxid_clean::{CleanError, ValidationTarget, validate_pe_ruc, validate_vatin};

#[test]
fn test_scalar() {
    let verdict = validate_pe_ruc("20512333797").unwrap();
    assert_eq!(verdict.as_scalar(), Some(true));
    let verdict = validate_vatin("DE136695977").unwrap();
    assert_eq!(verdict.as_scalar(), Some(false));
}

#[test]
fn test_column() {
    let column = Column::new(
        "ruc".into(),
        vec![Some("20512333797"), Some("20512333798"), None],
    );

    let verdict = validate_pe_ruc(&column).unwrap();

    let series = verdict.as_column().unwrap();
    assert_eq!(series.name().as_str(), "ruc");
    let flags: Vec<Option<bool>> = series.bool().unwrap().into_iter().collect();
    assert_eq!(flags, vec![Some(true), Some(false), Some(false)]);
}

#[test]
fn test_table_column() {
    let df = DataFrame::new(vec![
        Column::new("name".into(), vec!["Acme", "Other"]),
        Column::new("vat".into(), vec!["FR 40 303 265 045", "FR40303265046"]),
    ])
    .unwrap();

    let verdict = validate_vatin(ValidationTarget::Table {
        frame: &df,
        column: Some("vat"),
    })
    .unwrap();

    let flags: Vec<Option<bool>> = verdict
        .as_column()
        .unwrap()
        .bool()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(flags, vec![Some(true), Some(false)]);
}

#[test]
fn test_whole_table() {
    let df = DataFrame::new(vec![
        Column::new("a".into(), vec!["20512333797", "x"]),
        Column::new("b".into(), vec!["", "10467793549"]),
    ])
    .unwrap();

    let verdict = validate_pe_ruc(&df).unwrap();

    let table = verdict.as_table().unwrap();
    assert_eq!(table.shape(), (2, 2));
    let a: Vec<Option<bool>> = table.column("a").unwrap().bool().unwrap().into_iter().collect();
    let b: Vec<Option<bool>> = table.column("b").unwrap().bool().unwrap().into_iter().collect();
    assert_eq!(a, vec![Some(true), Some(false)]);
    assert_eq!(b, vec![Some(false), Some(true)]);
}

#[test]
fn test_missing_column() {
    let df = DataFrame::new(vec![Column::new("a".into(), vec!["x"])]).unwrap();

    let err = validate_vatin(ValidationTarget::Table {
        frame: &df,
        column: Some("vat"),
    })
    .unwrap_err();

    assert!(matches!(err, CleanError::ColumnNotFound { .. }));
}
