//! A single screenshot bound to a device size class.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::classifier::{Classifier, ValidationOutcome};
use crate::core::device::DeviceSizeClass;
use crate::core::metadata::ImageMetadataReader;
use crate::error::ClassifyError;

/// One screenshot for one locale and device class.
///
/// Immutable once built. The image itself is only read while measuring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screenshot {
    path: PathBuf,
    language: String,
    device_class: DeviceSizeClass,
}

impl Screenshot {
    /// Build with an explicit class. Does not touch the file.
    pub fn new(
        path: impl Into<PathBuf>,
        language: impl Into<String>,
        device_class: DeviceSizeClass,
    ) -> Self {
        Self {
            path: path.into(),
            language: language.into(),
            device_class,
        }
    }

    /// Build by measuring the image and classifying it
    pub fn detect<R: ImageMetadataReader>(
        path: impl Into<PathBuf>,
        language: impl Into<String>,
        classifier: &Classifier<R>,
    ) -> Result<Self, ClassifyError> {
        let path = path.into();
        let device_class = classifier.classify_image(&path)?;
        Ok(Self::new(path, language, device_class))
    }

    /// Use `device_class` when given, otherwise classify the image
    pub fn open<R: ImageMetadataReader>(
        path: impl Into<PathBuf>,
        language: impl Into<String>,
        device_class: Option<DeviceSizeClass>,
        classifier: &Classifier<R>,
    ) -> Result<Self, ClassifyError> {
        match device_class {
            Some(class) => Ok(Self::new(path, language, class)),
            None => Self::detect(path, language, classifier),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn device_class(&self) -> DeviceSizeClass {
        self.device_class
    }

    /// Re-check format and size against the stored class
    pub fn validate<R: ImageMetadataReader>(&self, classifier: &Classifier<R>) -> ValidationOutcome {
        classifier.validate(&self.path, self.device_class)
    }

    /// Store API notation for this screenshot's device
    pub fn device_code(&self) -> &'static str {
        self.device_class.device_code()
    }

    pub fn display_name(&self) -> &'static str {
        self.device_class.display_name()
    }
}
