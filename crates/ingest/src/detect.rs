//! Source-format detection for uploaded ads exports.

use serde::{Deserialize, Serialize};

use adboard_core::types::Platform;

use crate::error::ImportError;

/// Recognized export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CsvFormat {
    FacebookAds,
    GoogleAds,
}

impl CsvFormat {
    pub fn platform(self) -> Platform {
        match self {
            CsvFormat::FacebookAds => Platform::Facebook,
            CsvFormat::GoogleAds => Platform::Google,
        }
    }
}

/// Detects the export format from the file name or, failing that, from a
/// case-insensitive content signature. The file name wins when both carry a
/// hint. No hint at all is an error reported to the caller; no fallback
/// format is assumed.
pub fn detect_format(file_name: &str, content: &str) -> Result<CsvFormat, ImportError> {
    let name = file_name.to_ascii_lowercase();
    if name.contains("facebook") {
        return Ok(CsvFormat::FacebookAds);
    }
    if name.contains("google") {
        return Ok(CsvFormat::GoogleAds);
    }

    let body = content.to_ascii_lowercase();
    if body.contains("facebook") {
        return Ok(CsvFormat::FacebookAds);
    }
    if body.contains("google") {
        return Ok(CsvFormat::GoogleAds);
    }

    Err(ImportError::FormatDetection {
        file_name: file_name.to_string(),
    })
}
