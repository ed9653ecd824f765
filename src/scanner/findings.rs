//! Result record produced by the scanning engine

use serde::{Deserialize, Serialize};

/// Outcome of scanning a CV against a job description.
///
/// `found_keywords` and `missing_keywords` partition the deduplicated,
/// classified keyword set extracted from the job description (capped at the
/// configured limit); every extracted keyword appears in exactly one of the
/// two, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsFindings {
    /// Compatibility score, always within 0..=100.
    pub score: u8,

    /// Job-description keywords not found in the CV, in discovery order.
    pub missing_keywords: Vec<String>,

    /// Human-readable knock-out and penalty warnings. Empty unless a
    /// defined knock-out or penalty condition fired.
    pub critical_errors: Vec<String>,

    /// Keywords present in both texts, in discovery order.
    pub found_keywords: Vec<String>,

    /// Band-based verdict, one of four fixed messages.
    pub feedback_summary: String,

    /// Per-category weight breakdown.
    pub details: MatchDetails,
}

/// Earned scoring weight restricted to each skill classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDetails {
    /// Weight earned by matched core tech-stack keywords.
    pub hard_skills_match: u32,

    /// Weight earned by matched soft-skill keywords.
    pub soft_skills_match: u32,
}
