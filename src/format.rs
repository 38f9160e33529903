//! Document format detection

use crate::error::CheckError;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Plain text, one logical line per line
    Text,
    /// Word-processor document (Office Open XML)
    Docx,
    /// Presentation (OpenDocument)
    Odp,
}

impl DocumentFormat {
    /// Detect the format from a file extension, ignoring case
    pub fn from_path(path: &Path) -> Result<Self, CheckError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ext.parse().map_err(|_| {
            CheckError::UnsupportedFormat(format!(
                "cannot tell the format of {} from its extension",
                path.display()
            ))
        })
    }

    /// Name of the XML entry holding the document body, for zip containers
    pub fn content_entry(self) -> Option<&'static str> {
        match self {
            DocumentFormat::Text => None,
            DocumentFormat::Docx => Some("word/document.xml"),
            DocumentFormat::Odp => Some("content.xml"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentFormat::Text => "txt",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Odp => "odp",
        }
    }
}

impl FromStr for DocumentFormat {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "txt" => Ok(DocumentFormat::Text),
            "docx" => Ok(DocumentFormat::Docx),
            "odp" => Ok(DocumentFormat::Odp),
            _ => Err(CheckError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
