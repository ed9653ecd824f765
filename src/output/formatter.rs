//! Rendering of scan reports as console text, JSON, or markdown

use crate::config::OutputFormat;
use crate::error::{AtsScannerError, Result};
use crate::output::report::ScanReport;
use colored::Colorize;
use std::path::Path;

pub struct OutputFormatter {
    color: bool,
}

impl OutputFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn format(&self, report: &ScanReport, format: &OutputFormat, detailed: bool) -> Result<String> {
        match format {
            OutputFormat::Console => Ok(self.format_console(report, detailed)),
            OutputFormat::Json => self.format_json(report),
            OutputFormat::Markdown => Ok(self.format_markdown(report, detailed)),
        }
    }

    pub fn save_to_file(&self, content: &str, path: &Path) -> Result<()> {
        std::fs::write(path, content).map_err(|e| {
            AtsScannerError::OutputFormatting(format!(
                "Failed to save report to '{}': {}",
                path.display(),
                e
            ))
        })
    }

    fn format_console(&self, report: &ScanReport, detailed: bool) -> String {
        let findings = &report.findings;
        let mut out = String::new();

        out.push_str(&format!("\n{}\n", self.paint_bold("ATS Compatibility Report")));
        out.push_str(&format!("CV: {}\n", report.metadata.cv_file));
        out.push_str(&format!("Job: {}\n\n", report.metadata.job_file));

        let score_line = format!("Score: {}/100", findings.score);
        out.push_str(&format!("{}\n", self.paint_score(&score_line, findings.score)));
        out.push_str(&format!("{}\n", findings.feedback_summary));

        if !findings.critical_errors.is_empty() {
            out.push_str(&format!("\n{}\n", self.paint_red_bold("Critical warnings:")));
            for error in &findings.critical_errors {
                out.push_str(&format!("  ! {}\n", self.paint_red(error)));
            }
        }

        out.push_str(&format!(
            "\n{} ({})\n",
            self.paint_bold("Found keywords"),
            findings.found_keywords.len()
        ));
        for keyword in &findings.found_keywords {
            out.push_str(&format!("  + {}\n", self.paint_green(keyword)));
        }

        out.push_str(&format!(
            "\n{} ({})\n",
            self.paint_bold("Missing keywords"),
            findings.missing_keywords.len()
        ));
        for keyword in &findings.missing_keywords {
            out.push_str(&format!("  - {}\n", self.paint_red(keyword)));
        }

        if detailed {
            out.push_str(&format!("\n{}\n", self.paint_bold("Details")));
            out.push_str(&format!(
                "  Hard skills weight earned: {}\n",
                findings.details.hard_skills_match
            ));
            out.push_str(&format!(
                "  Soft skills weight earned: {}\n",
                findings.details.soft_skills_match
            ));
            out.push_str(&format!(
                "  CV size: {} chars, {} words\n",
                report.metadata.cv_chars, report.metadata.cv_words
            ));
            out.push_str(&format!(
                "  Job description size: {} chars, {} words\n",
                report.metadata.job_chars, report.metadata.job_words
            ));
            out.push_str(&format!(
                "  Processing time: {}ms\n",
                report.metadata.processing_time_ms
            ));
            out.push_str(&format!(
                "  Scanner version: {}\n",
                report.metadata.scanner_version
            ));
        }

        out
    }

    fn format_json(&self, report: &ScanReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn format_markdown(&self, report: &ScanReport, detailed: bool) -> String {
        let findings = &report.findings;
        let mut out = String::new();

        out.push_str("# ATS Compatibility Report\n\n");
        out.push_str(&format!("- **CV**: {}\n", report.metadata.cv_file));
        out.push_str(&format!("- **Job**: {}\n", report.metadata.job_file));
        out.push_str(&format!(
            "- **Generated**: {}\n\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        out.push_str(&format!("## Score: {}/100\n\n", findings.score));
        out.push_str(&format!("{}\n", findings.feedback_summary));

        if !findings.critical_errors.is_empty() {
            out.push_str("\n## Critical warnings\n\n");
            for error in &findings.critical_errors {
                out.push_str(&format!("- {}\n", error));
            }
        }

        out.push_str("\n## Found keywords\n\n");
        if findings.found_keywords.is_empty() {
            out.push_str("_none_\n");
        }
        for keyword in &findings.found_keywords {
            out.push_str(&format!("- {}\n", keyword));
        }

        out.push_str("\n## Missing keywords\n\n");
        if findings.missing_keywords.is_empty() {
            out.push_str("_none_\n");
        }
        for keyword in &findings.missing_keywords {
            out.push_str(&format!("- {}\n", keyword));
        }

        if detailed {
            out.push_str("\n## Details\n\n");
            out.push_str(&format!(
                "| Hard skills weight | Soft skills weight | CV words | Job words | Time (ms) |\n\
                 |---|---|---|---|---|\n\
                 | {} | {} | {} | {} | {} |\n",
                findings.details.hard_skills_match,
                findings.details.soft_skills_match,
                report.metadata.cv_words,
                report.metadata.job_words,
                report.metadata.processing_time_ms
            ));
        }

        out
    }

    fn paint_score(&self, text: &str, score: u8) -> String {
        if !self.color {
            return text.to_string();
        }
        if score >= 85 {
            text.green().bold().to_string()
        } else if score >= 60 {
            text.yellow().bold().to_string()
        } else {
            text.red().bold().to_string()
        }
    }

    fn paint_bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_green(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_red(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_red_bold(&self, text: &str) -> String {
        if self.color {
            text.red().bold().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::report::ScanReport;
    use crate::scanner::AtsScanner;

    fn sample_report() -> ScanReport {
        let scanner = AtsScanner::new().unwrap();
        let cv = "React y Node.js, inglés C1";
        let jd = "React, Node, AWS";
        let findings = scanner.analyze(cv, jd);
        ScanReport::new(
            findings,
            "cv.txt".to_string(),
            "jd.txt".to_string(),
            cv,
            jd,
            1,
        )
    }

    #[test]
    fn test_console_output_is_plain_without_color() {
        let formatter = OutputFormatter::new(false);
        let report = sample_report();
        let out = formatter
            .format(&report, &OutputFormat::Console, false)
            .unwrap();

        assert!(out.contains("ATS Compatibility Report"));
        assert!(out.contains("Score:"));
        assert!(out.contains("aws"));
        // No ANSI escapes when color is off
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn test_json_output_round_trips() {
        let formatter = OutputFormatter::new(false);
        let report = sample_report();
        let out = formatter.format(&report, &OutputFormat::Json, true).unwrap();

        let parsed: ScanReport = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.findings.score, report.findings.score);
        assert_eq!(parsed.metadata.cv_file, "cv.txt");
    }

    #[test]
    fn test_markdown_sections() {
        let formatter = OutputFormatter::new(false);
        let report = sample_report();
        let out = formatter
            .format(&report, &OutputFormat::Markdown, true)
            .unwrap();

        assert!(out.starts_with("# ATS Compatibility Report"));
        assert!(out.contains("## Found keywords"));
        assert!(out.contains("## Missing keywords"));
        assert!(out.contains("## Details"));
    }
}
