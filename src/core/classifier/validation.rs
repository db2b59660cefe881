//! Validation outcome types and the file format allow-list.

use crate::core::device::DeviceSizeClass;
use crate::error::ClassifyError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Extensions accepted for store screenshots (compared ignoring case)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Check the file extension against [`SUPPORTED_EXTENSIONS`]
pub fn is_supported_format(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

/// Why a screenshot failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    /// Extension is outside the allow-list (empty when the path has none)
    UnsupportedFormat { extension: String },
    UnreadableImage { path: PathBuf, reason: String },
    UnsupportedResolution { width: u32, height: u32 },
    /// The image classifies, just not as the claimed class
    ClassMismatch {
        claimed: DeviceSizeClass,
        actual: DeviceSizeClass,
    },
}

impl FailureReason {
    pub fn description(&self) -> String {
        match self {
            Self::UnsupportedFormat { extension } if extension.is_empty() => {
                "File has no extension (expected png, jpg or jpeg)".to_string()
            }
            Self::UnsupportedFormat { extension } => {
                format!("Unsupported format '.{}' (expected png, jpg or jpeg)", extension)
            }
            Self::UnreadableImage { path, reason } => {
                format!("Could not read {}: {}", path.display(), reason)
            }
            Self::UnsupportedResolution { width, height } => {
                format!("Resolution {}x{} matches no device class", width, height)
            }
            Self::ClassMismatch { claimed, actual } => format!(
                "Expected {} ({}) but image size matches {} ({})",
                claimed,
                claimed.display_name(),
                actual,
                actual.display_name()
            ),
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description())
    }
}

impl From<ClassifyError> for FailureReason {
    fn from(error: ClassifyError) -> Self {
        match error {
            ClassifyError::UnreadableImage { path, reason } => {
                FailureReason::UnreadableImage { path, reason }
            }
            ClassifyError::UnsupportedResolution { width, height } => {
                FailureReason::UnsupportedResolution { width, height }
            }
        }
    }
}

/// Result of checking a screenshot against a claimed class.
///
/// `reason` is `Some` exactly when the outcome is invalid. Fields are private
/// and deserialization rejects input that breaks this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OutcomeFields")]
pub struct ValidationOutcome {
    valid: bool,
    reason: Option<FailureReason>,
}

impl ValidationOutcome {
    pub fn valid() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    pub fn invalid(reason: FailureReason) -> Self {
        Self {
            valid: false,
            reason: Some(reason),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Why validation failed; `None` when valid
    pub fn reason(&self) -> Option<&FailureReason> {
        self.reason.as_ref()
    }

    pub fn into_reason(self) -> Option<FailureReason> {
        self.reason
    }
}

#[derive(Deserialize)]
struct OutcomeFields {
    valid: bool,
    reason: Option<FailureReason>,
}

impl TryFrom<OutcomeFields> for ValidationOutcome {
    type Error = String;

    fn try_from(fields: OutcomeFields) -> Result<Self, Self::Error> {
        match (fields.valid, fields.reason) {
            (true, None) => Ok(Self::valid()),
            (false, Some(reason)) => Ok(Self::invalid(reason)),
            (true, Some(_)) => Err("a valid outcome cannot carry a failure reason".to_string()),
            (false, None) => Err("an invalid outcome needs a failure reason".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_list_ignores_case() {
        assert!(is_supported_format(Path::new("a.png")));
        assert!(is_supported_format(Path::new("a.PNG")));
        assert!(is_supported_format(Path::new("a.Jpeg")));
        assert!(is_supported_format(Path::new("dir.v2/a.jpg")));
    }

    #[test]
    fn allow_list_rejects_others() {
        assert!(!is_supported_format(Path::new("a.gif")));
        assert!(!is_supported_format(Path::new("a.heic")));
        assert!(!is_supported_format(Path::new("png")));
        assert!(!is_supported_format(Path::new("a.png.txt")));
    }

    #[test]
    fn outcome_constructors_keep_reason_consistent() {
        assert!(ValidationOutcome::valid().is_valid());
        assert_eq!(ValidationOutcome::valid().reason(), None);
        let invalid = ValidationOutcome::invalid(FailureReason::UnsupportedResolution {
            width: 1,
            height: 2,
        });
        assert!(!invalid.is_valid());
        assert!(invalid.reason().is_some());
    }

    #[test]
    fn deserialize_rejects_valid_outcome_with_reason() {
        let json = r#"{"valid":true,"reason":{"kind":"unsupported_format","extension":"gif"}}"#;
        assert!(serde_json::from_str::<ValidationOutcome>(json).is_err());
    }

    #[test]
    fn deserialize_rejects_invalid_outcome_without_reason() {
        let json = r#"{"valid":false,"reason":null}"#;
        assert!(serde_json::from_str::<ValidationOutcome>(json).is_err());
    }

    #[test]
    fn consistent_outcome_survives_json() {
        let outcome = ValidationOutcome::invalid(FailureReason::UnsupportedFormat {
            extension: "gif".to_string(),
        });
        let json = serde_json::to_string(&outcome).unwrap();
        let back: ValidationOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
    }

    #[test]
    fn mismatch_description_names_both_classes() {
        let reason = FailureReason::ClassMismatch {
            claimed: DeviceSizeClass::Iphone47,
            actual: DeviceSizeClass::Ipad,
        };
        let text = reason.to_string();
        assert!(text.contains("iOS-4.7-in"));
        assert!(text.contains("iPad"));
    }

    #[test]
    fn classify_error_maps_to_reason() {
        let reason: FailureReason = ClassifyError::UnsupportedResolution {
            width: 5,
            height: 6,
        }
        .into();
        assert_eq!(
            reason,
            FailureReason::UnsupportedResolution {
                width: 5,
                height: 6
            }
        );
    }

    #[test]
    fn reason_serializes_with_kind_tag() {
        let json = serde_json::to_value(FailureReason::UnsupportedFormat {
            extension: "gif".to_string(),
        })
        .unwrap();
        assert_eq!(json["kind"], "unsupported_format");
        assert_eq!(json["extension"], "gif");
    }
}
