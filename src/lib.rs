//! # Screenshot Classifier
//!
//! Buckets app-store screenshots into device size classes by pixel
//! dimensions, and checks that a screenshot claimed for a class really
//! matches one of that class's resolutions.
//!
//! ## Core Philosophy
//! - **Table, not heuristics** - a size either matches a known resolution or it fails
//! - **Either orientation** - portrait and landscape captures classify the same
//! - **Caller owns policy** - failures come back as typed values, never panics or logs
//!
//! ## Architecture
//! - `core` - The classification engine
//! - `error` - Typed error values
//! - `cli` - Command-line interface (binary only)

pub mod core;
pub mod error;

// Re-export commonly used types at the crate root
pub use crate::core::{
    classify_dimensions, device_code, display_name, Classifier, DeviceSizeClass, Screenshot,
    ValidationOutcome,
};
pub use error::{ClassifyError, Result, ShotSizerError};

/// Initialize tracing for the library
///
/// This should be called by the application entry point (CLI or GUI).
pub fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    // A host application may already have installed its own subscriber.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
