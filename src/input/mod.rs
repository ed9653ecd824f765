//! Reading CV and job-description files into scan-ready text

pub mod format;
pub mod reader;

pub use format::SourceFormat;
pub use reader::DocumentReader;
