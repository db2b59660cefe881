//! # Scanner Module
//!
//! Discovers screenshot files in directories.
//!
//! ## Supported Formats
//! - PNG (.png)
//! - JPEG (.jpg, .jpeg)
//!
//! ## Example
//! ```rust,ignore
//! use screenshot_classifier::core::scanner::{ScanConfig, ScreenshotScanner};
//!
//! let scanner = ScreenshotScanner::new(ScanConfig::default());
//! let result = scanner.scan(&["./fastlane/screenshots".into()]);
//! ```

mod filter;
mod walker;

pub use filter::ImageFilter;
pub use walker::{ScanConfig, ScreenshotScanner};

use crate::error::ScanError;
use std::path::PathBuf;

/// Result of a scan operation
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Candidate images, sorted and de-duplicated
    pub images: Vec<PathBuf>,
    /// Errors that occurred during scanning (non-fatal)
    pub errors: Vec<ScanError>,
}

impl ScanResult {
    /// Fail with the first error when nothing was found and every root failed.
    ///
    /// A scan that found no images and hit no errors (an empty folder) is fine.
    pub fn ensure_found(mut self) -> Result<Self, ScanError> {
        if self.images.is_empty() && !self.errors.is_empty() {
            return Err(self.errors.remove(0));
        }
        Ok(self)
    }
}
