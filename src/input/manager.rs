//! Resume reading with a per-file text cache

use crate::error::{JobMatcherError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PlainTextExtractor, TextExtractor};
use log::{debug, info};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Reads resume files, keeping the extracted text keyed by canonical path so
/// two spellings of the same file share one entry.
pub struct InputManager {
    cache: HashMap<PathBuf, String>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self { cache: HashMap::new() }
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let canonical = tokio::fs::canonicalize(path).await.map_err(|_| {
            JobMatcherError::InvalidInput(format!("File does not exist: {}", path.display()))
        })?;

        if let Some(text) = self.cache.get(&canonical) {
            debug!("Resume text cache hit: {}", canonical.display());
            return Ok(text.clone());
        }

        let text = match FileType::from_path(&canonical)? {
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(&canonical).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(&canonical).await?
            }
            FileType::Unknown => {
                return Err(JobMatcherError::UnsupportedFormat(format!(
                    "Unsupported resume file type: {}",
                    path.display()
                )));
            }
        };

        self.cache.insert(canonical, text.clone());
        Ok(text)
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
