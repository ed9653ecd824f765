//! Integration tests for the ATS scanner

use ats_scanner::config::OutputFormat;
use ats_scanner::input::DocumentReader;
use ats_scanner::output::{OutputFormatter, ScanReport};
use ats_scanner::AtsScanner;
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut reader = DocumentReader::new();
    let path = Path::new("tests/fixtures/sample_cv.txt");

    let result = reader.read(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("Maria Fernanda Lopez"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut reader = DocumentReader::new();
    let path = Path::new("tests/fixtures/sample_cv.md");

    let result = reader.read(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("Maria Fernanda Lopez"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut reader = DocumentReader::new();
    let path = Path::new("tests/fixtures/sample_cv.txt");

    // First read
    let text1 = reader.read(path).await.unwrap();
    assert_eq!(reader.cache_size(), 1);

    // Second read should use cache
    let text2 = reader.read(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(reader.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut reader = DocumentReader::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = reader.read(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut reader = DocumentReader::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = reader.read(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_full_scan_pipeline() {
    let mut reader = DocumentReader::new();
    let cv_text = reader
        .read(Path::new("tests/fixtures/sample_cv.txt"))
        .await
        .unwrap();
    let job_text = reader
        .read(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let scanner = AtsScanner::new().unwrap();
    let findings = scanner.analyze(&cv_text, &job_text);

    // The job description yields 11 classified keywords; the fixture CV
    // covers all but kubernetes and communication.
    assert_eq!(findings.score, 84);
    assert_eq!(
        findings.missing_keywords,
        vec!["kubernetes".to_string(), "communication".to_string()]
    );
    assert!(findings.found_keywords.contains(&"react".to_string()));
    assert!(findings.found_keywords.contains(&"docker".to_string()));
    assert!(findings.found_keywords.contains(&"teamwork".to_string()));

    // The posting requires English and the CV declares "Advanced", so no
    // knock-out fires; the CV is long enough to dodge the length penalty.
    assert!(findings.critical_errors.is_empty());
    assert!(findings.feedback_summary.starts_with("Good potential"));
}

#[tokio::test]
async fn test_markdown_cv_scans_like_plain_text() {
    let mut reader = DocumentReader::new();
    let cv_text = reader
        .read(Path::new("tests/fixtures/sample_cv.md"))
        .await
        .unwrap();
    let job_text = reader
        .read(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let scanner = AtsScanner::new().unwrap();
    let findings = scanner.analyze(&cv_text, &job_text);

    assert!(findings.score <= 100);
    assert!(findings.found_keywords.contains(&"react".to_string()));
    assert!(findings.missing_keywords.contains(&"kubernetes".to_string()));
    // "Advanced English" survives markdown extraction, so no language cap.
    assert!(findings.score > 45);
}

#[tokio::test]
async fn test_report_save_to_file() {
    let mut reader = DocumentReader::new();
    let cv_text = reader
        .read(Path::new("tests/fixtures/sample_cv.txt"))
        .await
        .unwrap();
    let job_text = reader
        .read(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let scanner = AtsScanner::new().unwrap();
    let findings = scanner.analyze(&cv_text, &job_text);
    let report = ScanReport::new(
        findings,
        "sample_cv.txt".to_string(),
        "sample_job.txt".to_string(),
        &cv_text,
        &job_text,
        1,
    );

    let formatter = OutputFormatter::new(false);
    let rendered = formatter.format(&report, &OutputFormat::Json, true).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("report.json");
    formatter.save_to_file(&rendered, &out_path).unwrap();

    let saved = std::fs::read_to_string(&out_path).unwrap();
    let parsed: ScanReport = serde_json::from_str(&saved).unwrap();
    assert_eq!(parsed.findings.score, 84);
}
