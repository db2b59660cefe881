//! Directory walking implementation using walkdir.

use super::filter::{is_hidden, ImageFilter};
use super::ScanResult;
use crate::error::ScanError;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Configuration for the directory scanner
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Whether to follow symbolic links
    pub follow_symlinks: bool,
    /// Whether to include hidden files and directories
    pub include_hidden: bool,
    /// Maximum directory depth (None = unlimited)
    pub max_depth: Option<usize>,
    /// Custom extensions to include (None = png, jpg, jpeg)
    pub extensions: Option<Vec<String>>,
}

/// Collects screenshot candidates from files and directories
pub struct ScreenshotScanner {
    config: ScanConfig,
    filter: ImageFilter,
}

impl ScreenshotScanner {
    /// Create a new scanner with the given configuration
    pub fn new(config: ScanConfig) -> Self {
        let mut filter = ImageFilter::new().with_hidden(config.include_hidden);

        if let Some(ref extensions) = config.extensions {
            filter = filter.with_extensions(extensions.clone());
        }

        Self { config, filter }
    }

    /// Scan every root. Files named directly are kept even if the filter
    /// would skip them; missing roots are recorded and skipped.
    pub fn scan(&self, roots: &[PathBuf]) -> ScanResult {
        let mut images = BTreeSet::new();
        let mut errors = Vec::new();

        for root in roots {
            if root.is_file() {
                images.insert(root.clone());
                continue;
            }

            match self.scan_directory(root) {
                Ok((found, walk_errors)) => {
                    tracing::debug!(
                        root = %root.display(),
                        found = found.len(),
                        errors = walk_errors.len(),
                        "scanned directory"
                    );
                    images.extend(found);
                    errors.extend(walk_errors);
                }
                Err(e) => errors.push(e),
            }
        }

        ScanResult {
            images: images.into_iter().collect(),
            errors,
        }
    }

    fn scan_directory(&self, root: &Path) -> Result<(Vec<PathBuf>, Vec<ScanError>), ScanError> {
        if !root.is_dir() {
            return Err(ScanError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }

        let mut walker = WalkDir::new(root).follow_links(self.config.follow_symlinks);
        if let Some(depth) = self.config.max_depth {
            walker = walker.max_depth(depth);
        }

        let include_hidden = self.config.include_hidden;
        let entries = walker.into_iter().filter_entry(|entry| {
            // Never prune the root itself, even when it is a dot-directory.
            include_hidden || entry.depth() == 0 || !is_hidden(entry.path())
        });

        let mut images = Vec::new();
        let mut errors = Vec::new();

        for entry_result in entries {
            match entry_result {
                Ok(entry) => {
                    let is_file = entry.file_type().is_file() || entry.path().is_file();
                    if is_file && self.filter.should_include(entry.path()) {
                        images.push(entry.into_path());
                    }
                }
                Err(e) => {
                    let path = e.path().map(|p| p.to_path_buf()).unwrap_or_default();
                    let error = if e.io_error().map(|e| e.kind())
                        == Some(std::io::ErrorKind::PermissionDenied)
                    {
                        ScanError::PermissionDenied { path }
                    } else {
                        ScanError::ReadDirectory {
                            path,
                            reason: e.to_string(),
                        }
                    };
                    errors.push(error);
                }
            }
        }

        Ok((images, errors))
    }
}

impl Default for ScreenshotScanner {
    fn default() -> Self {
        Self::new(ScanConfig::default())
    }
}
