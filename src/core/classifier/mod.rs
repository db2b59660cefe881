//! # Classifier Module
//!
//! Maps image pixel dimensions onto a [`DeviceSizeClass`].
//!
//! ## Matching Rules
//! - Dimensions are compared orientation-insensitively: `w x h` matches an
//!   entry `cw x ch` when `(w, h) == (cw, ch)` or `(w, h) == (ch, cw)`
//! - Classes are tried in [`DeviceSizeClass::ALL`] order and each class's
//!   resolutions in declared order; the first hit wins
//! - No "closest" match exists; anything off-table is `UnsupportedResolution`
//!
//! Nothing in this module logs or panics. Callers choose whether a failure
//! is fatal.

mod validation;

pub use validation::{is_supported_format, FailureReason, ValidationOutcome, SUPPORTED_EXTENSIONS};

use crate::core::device::{canonical_entries, DeviceSizeClass, Resolution};
use crate::core::metadata::{HeaderReader, ImageMetadataReader};
use crate::error::ClassifyError;
use std::path::Path;

/// Find the device class for an image of `width x height` pixels
pub fn classify_dimensions(width: u32, height: u32) -> Result<DeviceSizeClass, ClassifyError> {
    first_match(canonical_entries(), width, height)
        .ok_or(ClassifyError::UnsupportedResolution { width, height })
}

/// Earliest entry matching `width x height` in either orientation
fn first_match(
    entries: impl IntoIterator<Item = (DeviceSizeClass, Resolution)>,
    width: u32,
    height: u32,
) -> Option<DeviceSizeClass> {
    entries
        .into_iter()
        .find(|(_, resolution)| resolution.matches(width, height))
        .map(|(class, _)| class)
}

/// Classifies screenshots using an injected metadata reader
#[derive(Debug, Clone, Default)]
pub struct Classifier<R = HeaderReader> {
    reader: R,
}

impl Classifier<HeaderReader> {
    /// Classifier backed by the `image` crate header parser
    pub fn new() -> Self {
        Self {
            reader: HeaderReader,
        }
    }
}

impl<R: ImageMetadataReader> Classifier<R> {
    pub fn with_reader(reader: R) -> Self {
        Self { reader }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn classify_dimensions(
        &self,
        width: u32,
        height: u32,
    ) -> Result<DeviceSizeClass, ClassifyError> {
        classify_dimensions(width, height)
    }

    /// Measure the image at `path` and classify it
    pub fn classify_image(&self, path: &Path) -> Result<DeviceSizeClass, ClassifyError> {
        let dimensions = self
            .reader
            .measure(path)
            .map_err(|e| ClassifyError::UnreadableImage {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        // Readers are required to fail instead, but a zero size can never classify.
        if dimensions.is_empty() {
            return Err(ClassifyError::UnreadableImage {
                path: path.to_path_buf(),
                reason: format!("reader returned empty size {}", dimensions),
            });
        }

        classify_dimensions(dimensions.width, dimensions.height)
    }

    /// Check that the image at `path` is an accepted format and really
    /// belongs to `claimed`.
    ///
    /// Never fails: every problem is reported through the outcome's reason.
    pub fn validate(&self, path: &Path, claimed: DeviceSizeClass) -> ValidationOutcome {
        if !is_supported_format(path) {
            let extension = path
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default();
            return ValidationOutcome::invalid(FailureReason::UnsupportedFormat { extension });
        }

        match self.classify_image(path) {
            Ok(actual) if actual == claimed => ValidationOutcome::valid(),
            Ok(actual) => {
                ValidationOutcome::invalid(FailureReason::ClassMismatch { claimed, actual })
            }
            Err(e) => ValidationOutcome::invalid(e.into()),
        }
    }

    pub fn device_code(&self, class: DeviceSizeClass) -> &'static str {
        class.device_code()
    }

    pub fn display_name(&self, class: DeviceSizeClass) -> &'static str {
        class.display_name()
    }
}
