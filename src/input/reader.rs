//! Document reader turning CV and job-description files into plain text

use crate::error::{AtsScannerError, Result};
use crate::input::format::SourceFormat;
use log::debug;
use pulldown_cmark::{Event, Parser, Tag};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Reads scan inputs from disk, extracting plain text per format.
///
/// Extracted text is cached by path for the lifetime of the reader, so
/// scanning a CV against several postings reads the CV once.
pub struct DocumentReader {
    cache: HashMap<PathBuf, String>,
}

impl DocumentReader {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    pub async fn read(&mut self, path: &Path) -> Result<String> {
        if let Some(text) = self.cache.get(path) {
            debug!("Using cached text for: {}", path.display());
            return Ok(text.clone());
        }

        if !path.exists() {
            return Err(AtsScannerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let format = SourceFormat::from_path(path).ok_or_else(|| {
            AtsScannerError::UnsupportedFormat(format!(
                "Cannot scan this file type: {}",
                path.display()
            ))
        })?;

        let text = match format {
            SourceFormat::Pdf => {
                debug!("Extracting text from PDF: {}", path.display());
                Self::read_pdf(path).await?
            }
            SourceFormat::PlainText => {
                debug!("Reading plain text file: {}", path.display());
                fs::read_to_string(path).await.map_err(AtsScannerError::Io)?
            }
            SourceFormat::Markdown => {
                debug!("Extracting text from markdown: {}", path.display());
                let markdown = fs::read_to_string(path).await.map_err(AtsScannerError::Io)?;
                markdown_to_text(&markdown)
            }
        };

        self.cache.insert(path.to_path_buf(), text.clone());
        Ok(text)
    }

    async fn read_pdf(path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(AtsScannerError::Io)?;

        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            AtsScannerError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for DocumentReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Flatten markdown to the text the scoring engine should see: heading,
/// paragraph, and list-item content on their own lines, formatting markers
/// and link targets gone. Inline code is kept because skill names often
/// appear as code spans.
fn markdown_to_text(markdown: &str) -> String {
    let mut out = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Text(text) => out.push_str(&text),
            Event::Code(code) => out.push_str(&code),
            Event::SoftBreak | Event::HardBreak => out.push(' '),
            Event::End(Tag::Paragraph)
            | Event::End(Tag::Heading(..))
            | Event::End(Tag::Item) => out.push('\n'),
            _ => {}
        }
    }

    let lines: Vec<&str> = out
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_formatting_is_stripped() {
        let markdown = "# Title\n\nSome **bold** and *italic* text.\n\n- React\n- `Node.js`\n";
        let text = markdown_to_text(markdown);

        assert!(text.contains("Title"));
        assert!(text.contains("Some bold and italic text."));
        assert!(text.contains("React"));
        assert!(text.contains("Node.js"));
        assert!(!text.contains('#'));
        assert!(!text.contains('*'));
        assert!(!text.contains('-'));
    }

    #[test]
    fn test_markdown_links_keep_label_only() {
        let text = markdown_to_text("See [my portfolio](https://example.com/maria) for details.");
        assert!(text.contains("my portfolio"));
        assert!(!text.contains("https://example.com"));
    }

    #[test]
    fn test_markdown_blocks_become_lines() {
        let text = markdown_to_text("## Skills\n\nReact\n\nNode");
        assert_eq!(text, "Skills\nReact\nNode");
    }
}
