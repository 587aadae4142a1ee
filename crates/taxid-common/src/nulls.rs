//! Null sentinel strings.
//!
//! Spreadsheet exports and DataFrame libraries spell "no value" in many
//! ways. A cell whose string form is one of these is absent data, not an
//! invalid identifier.

/// String representations treated as an explicit absence of data.
pub const NULL_VALUES: &[&str] = &[
    "",
    "#N/A",
    "#N/A N/A",
    "#NA",
    "-1.#IND",
    "-1.#QNAN",
    "-NaN",
    "-nan",
    "1.#IND",
    "1.#QNAN",
    "<NA>",
    "N/A",
    "NA",
    "NULL",
    "NaN",
    "n/a",
    "nan",
    "null",
    "None",
];

/// Returns true if the value is one of the [`NULL_VALUES`].
///
/// Matching is exact: no trimming and no case folding.
///
/// # Examples
///
/// ```
/// use taxid_common::is_null_value;
///
/// assert!(is_null_value(""));
/// assert!(is_null_value("NaN"));
/// assert!(!is_null_value(" "));
/// assert!(!is_null_value("NONE"));
/// ```
pub fn is_null_value(value: &str) -> bool {
    NULL_VALUES.contains(&value)
}
