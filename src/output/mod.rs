//! Report assembly and rendering

pub mod formatter;
pub mod report;

pub use formatter::OutputFormatter;
pub use report::{ReportMetadata, ScanReport};
