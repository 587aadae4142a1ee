pub mod error;
pub mod options;
pub mod report;
pub mod row;

pub use error::ConfigError;
pub use options::{ErrorPolicy, RucCleanOptions, RucFormat, VatCleanOptions, VatFormat};
pub use report::CleanReport;
pub use row::{Outcome, ResultRow};
