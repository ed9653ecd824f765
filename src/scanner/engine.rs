//! ATS keyword matching and scoring engine
//!
//! The engine is a pure function over `(cv_text, job_description)` pairs:
//! deterministic, synchronous, no I/O, total over arbitrary UTF-8 input
//! (including empty strings). All state is compiled once at construction
//! and only read afterwards, so one [`AtsScanner`] can serve concurrent
//! callers without locking.

use crate::config::ScanConfig;
use crate::error::{AtsScannerError, Result};
use crate::scanner::findings::{AtsFindings, MatchDetails};
use crate::scanner::lexicon::Lexicon;
use aho_corasick::AhoCorasick;
use regex::Regex;
use std::collections::HashSet;

/// Phrases in a job description that signal a work-authorization requirement.
const VISA_REQUIRED_TERMS: &[&str] = &["visa", "sponsorship", "work permit"];

/// Phrases in a CV that count as evidence of work-authorization status.
const VISA_EVIDENCE_TERMS: &[&str] = &[
    "visa",
    "permit",
    "citizen",
    "ciudadan",
    "autoriza",
    "passport",
    "blue card",
];

/// Phrases in a job description that signal an English requirement.
const ENGLISH_REQUIRED_TERMS: &[&str] = &["english", "ingles", "inglés"];

const VISA_WARNING: &str = "Critical alert: the posting mentions visa/permit requirements and \
     your CV shows no clear work-authorization status (citizenship, permit, passport).";

const ENGLISH_WARNING: &str = "Language filter: the posting requires English but your CV lists no \
     explicit proficiency level (e.g. 'Advanced', 'C1', 'Fluent').";

const LENGTH_WARNING: &str =
    "Length: CV is too brief. Modern ATS systems favor detail about responsibilities.";

const KNOCK_OUT_SUMMARY: &str =
    "Likely rejection due to knock-out requirements (language or critical skills).";

const EXCELLENT_SUMMARY: &str =
    "Excellent match. Your technical profile and context are aligned with the posting.";

const GOOD_SUMMARY: &str =
    "Good potential. Add the missing keywords to make sure you pass the filter.";

const LOW_SUMMARY: &str =
    "Low compatibility. Adjust your CV to use the exact terminology of the posting.";

/// ATS scanner holding the compiled lexicon, knock-out automatons, and
/// scoring constants.
pub struct AtsScanner {
    lexicon: Lexicon,
    config: ScanConfig,
    punctuation: Regex,
    jd_token: Regex,
    english_level: Regex,
    visa_required: AhoCorasick,
    visa_evidence: AhoCorasick,
    english_required: AhoCorasick,
}

impl AtsScanner {
    /// Create a scanner with the default scoring constants.
    pub fn new() -> Result<Self> {
        Self::with_config(ScanConfig::default())
    }

    /// Create a scanner with custom scoring constants.
    pub fn with_config(config: ScanConfig) -> Result<Self> {
        // Punctuation that would otherwise fuse or split tokens ("Node.js"
        // becomes "node js").
        let punctuation = Regex::new(r"[.,/#!$%^&*;:{}=\-_`~()]")
            .map_err(|e| AtsScannerError::Processing(format!("punctuation regex: {}", e)))?;

        // ASCII word boundaries on purpose: accented letters terminate a
        // token ("inglés" yields "ingl"), matching the reference behavior.
        let jd_token = Regex::new(r"(?-u)\b[a-z]{3,}\b")
            .map_err(|e| AtsScannerError::Processing(format!("token regex: {}", e)))?;

        let english_level = Regex::new(
            r"(?-u)\b(?:b2|c1|c2|advanced|fluent|native|nativo|avanzado|bilingual|bilingue|proficient|proficiency)\b",
        )
        .map_err(|e| AtsScannerError::Processing(format!("english level regex: {}", e)))?;

        // `is_match` over these automatons is exactly "text contains any of
        // the listed substrings".
        let visa_required = Self::build_matcher(VISA_REQUIRED_TERMS)?;
        let visa_evidence = Self::build_matcher(VISA_EVIDENCE_TERMS)?;
        let english_required = Self::build_matcher(ENGLISH_REQUIRED_TERMS)?;

        Ok(Self {
            lexicon: Lexicon::new(),
            config,
            punctuation,
            jd_token,
            english_level,
            visa_required,
            visa_evidence,
            english_required,
        })
    }

    fn build_matcher(patterns: &[&str]) -> Result<AhoCorasick> {
        AhoCorasick::new(patterns)
            .map_err(|e| AtsScannerError::Processing(format!("Failed to build matcher: {}", e)))
    }

    /// Scan a CV against a job description.
    ///
    /// Never fails: degenerate input (empty strings, no qualifying keywords)
    /// degrades to a score of 0 instead of an error.
    pub fn analyze(&self, cv_text: &str, job_description: &str) -> AtsFindings {
        let clean_cv = self.normalize(cv_text);
        let clean_jd = self.normalize(job_description);

        let target_keywords = self.extract_target_keywords(&clean_jd);

        let mut critical_errors = Vec::new();
        let mut knock_out_hit = false;

        // Knock-out rules run independently of keyword scoring.
        if self.visa_required.is_match(&clean_jd) && !self.visa_evidence.is_match(&clean_cv) {
            critical_errors.push(VISA_WARNING.to_string());
            // Warns loudly but does not cap the score on its own.
        }

        if self.english_required.is_match(&clean_jd) && !self.english_level.is_match(&clean_cv) {
            critical_errors.push(ENGLISH_WARNING.to_string());
            knock_out_hit = true;
        }

        let mut total_possible: i64 = 0;
        let mut earned: i64 = 0;
        let mut found_keywords = Vec::new();
        let mut missing_keywords = Vec::new();
        let mut details = MatchDetails::default();

        for keyword in &target_keywords {
            let is_core = self.lexicon.is_core_tech(keyword);
            // Core priority is exact: a keyword matching both sets weighs
            // as core. The trailing fallback is unreachable while the
            // extraction filter holds, but kept so loosening the filter
            // cannot skew the arithmetic.
            let weight = if is_core {
                self.config.core_weight
            } else if self.lexicon.is_soft_skill(keyword) {
                self.config.soft_weight
            } else {
                self.config.soft_weight
            };

            total_possible += weight;

            if self.lexicon.has_term(&clean_cv, keyword) {
                earned += weight;
                if is_core {
                    details.hard_skills_match += weight as u32;
                } else {
                    details.soft_skills_match += weight as u32;
                }
                found_keywords.push(keyword.clone());
            } else {
                missing_keywords.push(keyword.clone());
            }
        }

        // Length penalty. May drive `earned` negative; the percentage is
        // clamped below.
        if clean_cv.chars().count() < self.config.min_cv_chars {
            critical_errors.push(LENGTH_WARNING.to_string());
            earned -= self.config.short_cv_penalty;
        }

        // Division-by-zero guard for a JD with no qualifying keywords.
        let divisor = if total_possible == 0 { 1 } else { total_possible };
        let percentage = ((earned as f64 / divisor as f64) * 100.0).round() as i64;
        let mut score = percentage.clamp(0, 100) as u8;

        let feedback_summary = if knock_out_hit {
            score = score.min(self.config.knock_out_cap);
            KNOCK_OUT_SUMMARY
        } else if score >= self.config.excellent_threshold {
            EXCELLENT_SUMMARY
        } else if score >= self.config.good_threshold {
            GOOD_SUMMARY
        } else {
            LOW_SUMMARY
        };

        AtsFindings {
            score,
            missing_keywords,
            critical_errors,
            found_keywords,
            feedback_summary: feedback_summary.to_string(),
            details,
        }
    }

    /// Lowercase and strip token-fusing punctuation.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        self.punctuation.replace_all(&lowered, " ").into_owned()
    }

    /// Extract the scored keyword set from a normalized job description:
    /// runs of 3+ lowercase ASCII letters, deduplicated in first-seen order,
    /// filtered to terms classifying into either skill set, capped.
    fn extract_target_keywords(&self, clean_jd: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut keywords = Vec::new();

        for token in self.jd_token.find_iter(clean_jd) {
            let token = token.as_str();
            if !seen.insert(token.to_string()) {
                continue;
            }
            if self.lexicon.is_core_tech(token) || self.lexicon.is_soft_skill(token) {
                keywords.push(token.to_string());
                if keywords.len() >= self.config.keyword_cap {
                    break;
                }
            }
        }

        keywords
    }
}
