//! # Error Module
//!
//! Typed failures for screenshot classification.
//!
//! ## Design Principles
//! - **Never panic** on user data - return errors instead
//! - **Include context** - paths and raw dimensions, so a new table entry can be added
//! - **Caller decides policy** - nothing here logs or aborts

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum ShotSizerError {
    #[error("Classification error: {0}")]
    Classify(#[from] ClassifyError),

    /// Raised only when no root yielded any screenshot
    #[error("Scanning error: {0}")]
    Scan(#[from] ScanError),

    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Errors returned when an image cannot be assigned a device size class
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("Could not find or parse image at {path}: {reason}")]
    UnreadableImage { path: PathBuf, reason: String },

    #[error("Unsupported screen size {width}x{height}")]
    UnsupportedResolution { width: u32, height: u32 },
}

/// Errors reported by an image metadata reader
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("Failed to open image file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse image header {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("Image is empty or corrupted: {path}")]
    EmptyImage { path: PathBuf },
}

/// Errors that occur while collecting screenshots from directories
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Permission denied accessing: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Failed to read directory {path}: {reason}")]
    ReadDirectory { path: PathBuf, reason: String },
}

/// A string did not name any known device size class
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown device class '{input}' (expected an identifier like 'iOS-5.5-in' or a code like 'iphone6Plus')")]
pub struct ParseDeviceClassError {
    pub input: String,
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, ShotSizerError>;
