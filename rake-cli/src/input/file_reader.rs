//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads documents as raw bytes; UTF-8 validation is left to the extractor
pub struct FileReader;

impl FileReader {
    /// Read a file's bytes
    pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }
}
