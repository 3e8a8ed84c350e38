//! Resume file type detection

use crate::error::{JobMatcherError, Result};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileType {
    Text,
    Markdown,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }

    /// A path without an extension is invalid input rather than an unknown type
    pub fn from_path(path: &Path) -> Result<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .ok_or_else(|| {
                JobMatcherError::InvalidInput(format!("File has no extension: {}", path.display()))
            })
    }
}
