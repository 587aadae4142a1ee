//! Polars cell coercion.
//!
//! Every cleaner works on the string form of a cell, whatever the column's
//! dtype. These helpers define that string form.

use polars::prelude::*;

/// Converts a Polars `AnyValue` to its `String` representation.
///
/// Returns an empty string for `Null` (itself a null sentinel), formats
/// floats without trailing zeros so that numeric identifiers read back from
/// CSV as `f64` keep their digits.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use taxid_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int64(20512333797)), "20512333797");
/// assert_eq!(any_to_string(AnyValue::Float64(20512333797.0)), "20512333797");
/// assert_eq!(any_to_string(AnyValue::String("FR 40 303 265 045")), "FR 40 303 265 045");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// Non-finite values keep their Rust spelling (`NaN`, `inf`), so a `NaN`
/// cell lands in the null sentinel set.
///
/// # Examples
///
/// ```
/// use taxid_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(0.0), "0");
/// assert_eq!(format_numeric(f64::NAN), "NaN");
/// ```
pub fn format_numeric(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let s = format!("{v}");
    if !v.is_finite() || !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Coerces every cell of a column to its string form, in row order.
pub fn column_strings(column: &Column) -> PolarsResult<Vec<String>> {
    let mut values = Vec::with_capacity(column.len());
    for idx in 0..column.len() {
        values.push(any_to_string(column.get(idx)?));
    }
    Ok(values)
}
