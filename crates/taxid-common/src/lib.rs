//! Shared utilities for the tax identifier crates.
//!
//! This crate provides the pieces every cleaner needs before an identifier
//! reaches its checksum oracle: coercing Polars cells to strings and
//! recognizing the strings that stand for missing data.

pub mod nulls;
pub mod polars;

pub use nulls::{NULL_VALUES, is_null_value};
pub use polars::{any_to_string, column_strings, format_numeric};
