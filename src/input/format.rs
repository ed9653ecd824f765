//! Supported source formats for the two scanner inputs

use std::path::Path;

/// Extensions accepted for CV files. PDFs are common for CVs, so they are
/// supported on this side only.
pub const CV_EXTENSIONS: &[&str] = &["pdf", "txt", "md"];

/// Extensions accepted for job descriptions, which arrive as pasted text.
pub const JOB_EXTENSIONS: &[&str] = &["txt", "md"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Pdf,
    PlainText,
    Markdown,
}

impl SourceFormat {
    /// Detect the format from the file extension. `None` means the file
    /// cannot be scanned.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_lowercase().as_str() {
            "pdf" => Some(SourceFormat::Pdf),
            "txt" => Some(SourceFormat::PlainText),
            "md" | "markdown" => Some(SourceFormat::Markdown),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_detection_from_extension() {
        assert_eq!(
            SourceFormat::from_path(Path::new("cv.PDF")),
            Some(SourceFormat::Pdf)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("job.txt")),
            Some(SourceFormat::PlainText)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("cv.markdown")),
            Some(SourceFormat::Markdown)
        );
        assert_eq!(SourceFormat::from_path(Path::new("cv.docx")), None);
        assert_eq!(SourceFormat::from_path(Path::new("noextension")), None);
    }
}
