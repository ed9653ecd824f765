//! Scan report: engine findings plus run metadata

use crate::scanner::AtsFindings;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Findings wrapped with everything a saved report needs to stand alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub findings: AtsFindings,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// Version of the scanner used
    pub scanner_version: String,

    /// CV file analyzed
    pub cv_file: String,

    /// Job description file analyzed
    pub job_file: String,

    /// Input sizes, for context when reading the score
    pub cv_chars: usize,
    pub cv_words: usize,
    pub job_chars: usize,
    pub job_words: usize,

    /// Total processing time
    pub processing_time_ms: u64,
}

impl ScanReport {
    pub fn new(
        findings: AtsFindings,
        cv_file: String,
        job_file: String,
        cv_text: &str,
        job_text: &str,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            findings,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                scanner_version: env!("CARGO_PKG_VERSION").to_string(),
                cv_file,
                job_file,
                cv_chars: cv_text.chars().count(),
                cv_words: cv_text.unicode_words().count(),
                job_chars: job_text.chars().count(),
                job_words: job_text.unicode_words().count(),
                processing_time_ms,
            },
        }
    }
}
