//! # Metadata Module
//!
//! Measures image pixel dimensions without decoding pixel data.
//!
//! ## Readers
//! - [`ImageMetadataReader`] - the seam the classifier calls through
//! - [`HeaderReader`] - default implementation backed by the `image` crate,
//!   which only parses the format header
//!
//! Implementations must be safe to call from many threads at once; batch
//! classification shares one reader across a rayon pool.

use crate::error::ReadError;
use image::{ImageError, ImageReader};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Measured size of an image in device pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Either side is zero
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Reads the pixel dimensions of an image file.
///
/// Must return an error, never a zero-sized success, when the file is
/// missing, unreadable, or not a parseable image.
pub trait ImageMetadataReader: Send + Sync {
    fn measure(&self, path: &Path) -> Result<Dimensions, ReadError>;
}

impl<R: ImageMetadataReader + ?Sized> ImageMetadataReader for &R {
    fn measure(&self, path: &Path) -> Result<Dimensions, ReadError> {
        (**self).measure(path)
    }
}

impl<R: ImageMetadataReader + ?Sized> ImageMetadataReader for Box<R> {
    fn measure(&self, path: &Path) -> Result<Dimensions, ReadError> {
        (**self).measure(path)
    }
}

/// Reader that parses just enough of the file header to learn its size.
///
/// The format is sniffed from the file contents first and falls back to the
/// extension, so a PNG saved as `.jpg` still measures correctly.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderReader;

impl ImageMetadataReader for HeaderReader {
    fn measure(&self, path: &Path) -> Result<Dimensions, ReadError> {
        let io_error = |source: std::io::Error| ReadError::Io {
            path: path.to_path_buf(),
            source,
        };

        let reader = ImageReader::open(path)
            .map_err(io_error)?
            .with_guessed_format()
            .map_err(io_error)?;

        let (width, height) = reader.into_dimensions().map_err(|e| match e {
            ImageError::IoError(source) => ReadError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => ReadError::Decode {
                path: path.to_path_buf(),
                reason: other.to_string(),
            },
        })?;

        let dimensions = Dimensions::new(width, height);
        if dimensions.is_empty() {
            return Err(ReadError::EmptyImage {
                path: path.to_path_buf(),
            });
        }
        Ok(dimensions)
    }
}
