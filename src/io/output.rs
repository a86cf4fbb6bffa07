use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

/// Stylesheet for the contract classes emitted by the converter, matching
/// what the PDF exporter embeds around the fragment
const PAGE_STYLE: &str = r#"body {
  font-family: 'Times New Roman', Times, serif;
  line-height: 1.6;
  color: #333;
  margin: 0;
  padding: 20px;
}
.contract-section { font-size: 22px; margin-top: 30px; }
.contract-subsection { font-size: 18px; margin-top: 24px; }
.contract-subsubsection { font-size: 16px; margin-top: 18px; }
.contract-paragraph { margin: 12px 0; text-align: justify; }
.signature-line {
  display: inline-block;
  width: 200px;
  border-bottom: 1px solid #333;
}"#;

/// A standalone printable HTML page wrapping a rendered contract fragment.
///
/// This is the page the PDF exporter rasterizes: a centered header with the
/// title, document type, and date, followed by the fragment embedded
/// unmodified.
pub struct PrintablePage<'a> {
    title: &'a str,
    document_type: &'a str,
    fragment: &'a str,
}

impl<'a> PrintablePage<'a> {
    pub fn new(title: &'a str, document_type: &'a str, fragment: &'a str) -> Self {
        Self {
            title,
            document_type,
            fragment,
        }
    }

    /// Render the full page
    pub fn format(&self) -> String {
        let date = Local::now().format("%B %e, %Y");
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
{style}
</style>
</head>
<body>
<div style="text-align: center; margin-bottom: 20px;">
<h1 style="margin-bottom: 10px; font-size: 24px;">{title}</h1>
<p style="color: #666; font-size: 16px;">Document Type: {document_type}</p>
<p style="font-size: 14px;">Date: {date}</p>
<hr style="margin-top: 20px; margin-bottom: 30px;">
</div>
{fragment}
</body>
</html>
"#,
            title = self.title,
            style = PAGE_STYLE,
            document_type = self.document_type,
            date = date,
            fragment = self.fragment,
        )
    }

    /// Write the page to a file
    pub fn write_file(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.format())
            .with_context(|| format!("Failed to write file: {:?}", path))
    }
}

/// Write a bare HTML fragment to a file
pub fn write_fragment(path: &Path, fragment: &str) -> Result<()> {
    std::fs::write(path, fragment).with_context(|| format!("Failed to write file: {:?}", path))
}
