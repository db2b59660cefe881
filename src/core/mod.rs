//! # Core Module
//!
//! The UI-agnostic classification engine.
//!
//! ## Modules
//! - `device` - The closed set of device size classes and their static tables
//! - `metadata` - Measures image dimensions through a pluggable reader
//! - `classifier` - Dimension lookup and screenshot validation
//! - `screenshot` - The screenshot entity
//! - `scanner` - Discovers screenshot files in directories
//! - `batch` - Parallel classification of many files

pub mod batch;
pub mod classifier;
pub mod device;
pub mod metadata;
pub mod scanner;
pub mod screenshot;

// Re-export commonly used types
pub use batch::{BatchClassifier, BatchReport};
pub use classifier::{classify_dimensions, Classifier, FailureReason, ValidationOutcome};
pub use device::{device_code, display_name, DeviceSizeClass};
pub use metadata::{Dimensions, HeaderReader, ImageMetadataReader};
pub use screenshot::Screenshot;
