//! Tax identifier column cleaning.
//!
//! This crate turns raw identifier columns of a Polars DataFrame into clean,
//! canonical ones:
//!
//! - **formatter**: the per-value state machine (null check, validation,
//!   error policy, normalization, decomposition)
//! - **mapper**: sequential and rayon-backed column mapping
//! - **executor**: column extraction and output assembly
//! - **ruc** / **vatin**: the cleaners and validators per identifier kind
//! - **validate**: shape-aware validation of scalars, columns and tables
//! - **progress**: optional progress bar over the mapping step

pub mod error;
pub mod executor;
pub mod formatter;
pub mod mapper;
pub mod progress;
pub mod ruc;
pub mod validate;
pub mod vatin;

pub use error::{CleanError, Result};
pub use executor::{CleanOutput, execute_clean};
pub use formatter::{Formatted, RucFormatter, ValueFormatter, VatFormatter};
pub use mapper::{ColumnMapper, ParallelMapper, SequentialMapper};
pub use ruc::{clean_pe_ruc, clean_pe_ruc_with, validate_pe_ruc};
pub use validate::{Validation, ValidationTarget, validate_with};
pub use vatin::{clean_vatin, clean_vatin_with, validate_vatin};
