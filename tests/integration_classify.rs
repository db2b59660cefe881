//! Integration tests for classification of real image files.
//!
//! These tests verify end-to-end behavior including:
//! - Header-only measurement of PNG and JPEG files
//! - Validation of format, size and claimed class
//! - Directory scanning feeding batch classification

use image::{ImageFormat, RgbImage};
use screenshot_classifier::core::batch::BatchClassifier;
use screenshot_classifier::core::classifier::FailureReason;
use screenshot_classifier::core::scanner::{ScanConfig, ScreenshotScanner};
use screenshot_classifier::{Classifier, ClassifyError, DeviceSizeClass, Screenshot};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write a blank image of the given size; the format follows the extension.
fn create_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    RgbImage::new(width, height).save(&path).unwrap();
    path
}

#[test]
fn classifies_png_and_jpeg_files() {
    let temp = TempDir::new().unwrap();
    let png = create_image(temp.path(), "six.png", 750, 1334);
    let jpg = create_image(temp.path(), "plus_landscape.jpg", 2208, 1242);

    let classifier = Classifier::new();

    assert_eq!(classifier.classify_image(&png), Ok(DeviceSizeClass::Iphone47));
    assert_eq!(classifier.classify_image(&jpg), Ok(DeviceSizeClass::Iphone55));
}

#[test]
fn unknown_size_carries_raw_dimensions() {
    let temp = TempDir::new().unwrap();
    let path = create_image(temp.path(), "odd.png", 1170, 2532);

    let err = Classifier::new().classify_image(&path).unwrap_err();

    assert_eq!(
        err,
        ClassifyError::UnsupportedResolution {
            width: 1170,
            height: 2532
        }
    );
}

#[test]
fn missing_or_corrupt_files_are_unreadable() {
    let temp = TempDir::new().unwrap();
    let corrupt = temp.path().join("corrupt.png");
    fs::write(&corrupt, b"this is not a valid image file").unwrap();
    let missing = temp.path().join("missing.png");

    let classifier = Classifier::new();

    for path in [corrupt, missing] {
        match classifier.classify_image(&path) {
            Err(ClassifyError::UnreadableImage { path: reported, .. }) => {
                assert_eq!(reported, path)
            }
            other => panic!("expected UnreadableImage for {}, got {other:?}", path.display()),
        }
    }
}

#[test]
fn validate_checks_format_before_size() {
    let temp = TempDir::new().unwrap();
    // PNG bytes under a .gif name: the size would match, the extension does not.
    let gif = temp.path().join("six.gif");
    RgbImage::new(750, 1334)
        .save_with_format(&gif, ImageFormat::Png)
        .unwrap();

    let outcome = Classifier::new().validate(&gif, DeviceSizeClass::Iphone47);

    assert!(!outcome.is_valid());
    assert_eq!(
        outcome.reason(),
        Some(&FailureReason::UnsupportedFormat {
            extension: "gif".to_string()
        })
    );
}

#[test]
fn validate_accepts_uppercase_extension() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("WATCH.PNG");
    RgbImage::new(312, 390)
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();

    let outcome = Classifier::new().validate(&path, DeviceSizeClass::AppleWatch);

    assert!(outcome.is_valid(), "unexpected reason: {:?}", outcome.reason());
}

#[test]
fn screenshot_construction_and_mismatch_warning() {
    let temp = TempDir::new().unwrap();
    let path = create_image(temp.path(), "en-US/ipad.png", 1024, 768);
    let classifier = Classifier::new();

    let detected = Screenshot::open(&path, "en-US", None, &classifier).unwrap();
    assert_eq!(detected.device_class(), DeviceSizeClass::Ipad);
    assert_eq!(detected.device_code(), "ipad");
    assert!(detected.validate(&classifier).is_valid());

    // Filed under the wrong class: construction succeeds, validation flags it.
    let misfiled =
        Screenshot::open(&path, "en-US", Some(DeviceSizeClass::Mac), &classifier).unwrap();
    let outcome = misfiled.validate(&classifier);
    assert!(!outcome.is_valid());
    assert_eq!(
        outcome.reason(),
        Some(&FailureReason::ClassMismatch {
            claimed: DeviceSizeClass::Mac,
            actual: DeviceSizeClass::Ipad,
        })
    );
}

#[test]
fn scan_then_batch_classify_folder_tree() {
    let temp = TempDir::new().unwrap();
    create_image(temp.path(), "en-US/1_iphone6.png", 750, 1334);
    create_image(temp.path(), "en-US/2_ipad.jpg", 2048, 1536);
    create_image(temp.path(), "de-DE/1_iphone6.png", 1334, 750);
    create_image(temp.path(), "de-DE/2_unknown.png", 100, 200);
    fs::write(temp.path().join("de-DE/README.txt"), b"notes").unwrap();

    let scan = ScreenshotScanner::new(ScanConfig::default()).scan(&[temp.path().to_path_buf()]);
    assert!(scan.errors.is_empty());
    assert_eq!(scan.images.len(), 4);

    let report = BatchClassifier::new().classify_all(&scan.images);

    assert_eq!(report.entries.len(), 4);
    assert_eq!(report.failed, 1);
    assert_eq!(report.entries_for(DeviceSizeClass::Iphone47).count(), 2);
    assert_eq!(report.entries_for(DeviceSizeClass::Ipad).count(), 1);

    let failure = report.failures().next().unwrap();
    assert!(failure.path.ends_with("2_unknown.png"));
    assert_eq!(
        failure.failure,
        Some(FailureReason::UnsupportedResolution {
            width: 100,
            height: 200
        })
    );
}

#[test]
fn batch_report_serializes_to_json() {
    let temp = TempDir::new().unwrap();
    let path = create_image(temp.path(), "watch.png", 390, 312);

    let report = BatchClassifier::new().classify_all(&[path]);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["entries"][0]["device_class"], "iOS-Apple-Watch");
    assert_eq!(json["by_class"][0]["count"], 1);
    assert_eq!(json["failed"], 0);
}
