//! Library components of the `taxid` command line tool.

pub mod io;
pub mod logging;
pub mod pipeline;
