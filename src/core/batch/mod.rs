//! # Batch Module
//!
//! Classifies many screenshots at once on the rayon thread pool.
//!
//! Classification is a pure function of each file, so workers share the
//! classifier without locking. Report entries keep the input order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use crate::core::classifier::{Classifier, FailureReason};
use crate::core::device::DeviceSizeClass;
use crate::core::metadata::{HeaderReader, ImageMetadataReader};

/// Classification of one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    pub path: PathBuf,
    /// Set when the image matched a class
    pub device_class: Option<DeviceSizeClass>,
    /// Set when it did not
    pub failure: Option<FailureReason>,
}

impl BatchEntry {
    pub fn is_classified(&self) -> bool {
        self.device_class.is_some()
    }
}

/// Number of screenshots that landed in one class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCount {
    pub device_class: DeviceSizeClass,
    pub count: usize,
}

/// Results of a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// One entry per input path, in input order
    pub entries: Vec<BatchEntry>,
    /// Non-zero counts, in classification order
    pub by_class: Vec<ClassCount>,
    /// Entries that could not be classified
    pub failed: usize,
    pub duration_ms: u64,
}

impl BatchReport {
    pub fn classified(&self) -> usize {
        self.entries.iter().filter(|e| e.is_classified()).count()
    }

    /// Successfully classified entries for one class
    pub fn entries_for(&self, class: DeviceSizeClass) -> impl Iterator<Item = &BatchEntry> {
        self.entries
            .iter()
            .filter(move |e| e.device_class == Some(class))
    }

    pub fn failures(&self) -> impl Iterator<Item = &BatchEntry> {
        self.entries.iter().filter(|e| !e.is_classified())
    }
}

/// Runs a [`Classifier`] over many paths in parallel
pub struct BatchClassifier<R = HeaderReader> {
    classifier: Classifier<R>,
}

impl BatchClassifier<HeaderReader> {
    pub fn new() -> Self {
        Self {
            classifier: Classifier::new(),
        }
    }
}

impl Default for BatchClassifier<HeaderReader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ImageMetadataReader> BatchClassifier<R> {
    pub fn with_classifier(classifier: Classifier<R>) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &Classifier<R> {
        &self.classifier
    }

    pub fn classify_all(&self, paths: &[PathBuf]) -> BatchReport {
        self.classify_all_with_progress(paths, |_, _| {})
    }

    /// Classify every path, calling `on_progress(completed, total)` from the
    /// worker threads as files finish.
    pub fn classify_all_with_progress<F>(&self, paths: &[PathBuf], on_progress: F) -> BatchReport
    where
        F: Fn(usize, usize) + Sync,
    {
        let start = Instant::now();
        let total = paths.len();
        let completed = AtomicUsize::new(0);

        tracing::debug!(total, "classifying screenshots");

        let entries: Vec<BatchEntry> = paths
            .par_iter()
            .map(|path| {
                let entry = match self.classifier.classify_image(path) {
                    Ok(class) => BatchEntry {
                        path: path.clone(),
                        device_class: Some(class),
                        failure: None,
                    },
                    Err(e) => BatchEntry {
                        path: path.clone(),
                        device_class: None,
                        failure: Some(e.into()),
                    },
                };

                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                on_progress(done, total);
                entry
            })
            .collect();

        let by_class = DeviceSizeClass::ALL
            .iter()
            .map(|&device_class| ClassCount {
                device_class,
                count: entries
                    .iter()
                    .filter(|e| e.device_class == Some(device_class))
                    .count(),
            })
            .filter(|c| c.count > 0)
            .collect();

        let failed = entries.iter().filter(|e| !e.is_classified()).count();
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::debug!(total, failed, duration_ms, "classification finished");

        BatchReport {
            entries,
            by_class,
            failed,
            duration_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metadata::Dimensions;
    use crate::error::ReadError;
    use std::path::Path;

    /// Reads the size out of file names like `750x1334.png`
    struct NameReader;

    impl ImageMetadataReader for NameReader {
        fn measure(&self, path: &Path) -> Result<Dimensions, ReadError> {
            let decode_error = || ReadError::Decode {
                path: path.to_path_buf(),
                reason: "no size in name".to_string(),
            };
            let stem = path.file_stem().and_then(|s| s.to_str()).ok_or_else(decode_error)?;
            let (w, h) = stem.split_once('x').ok_or_else(decode_error)?;
            match (w.parse(), h.parse()) {
                (Ok(width), Ok(height)) => Ok(Dimensions::new(width, height)),
                _ => Err(decode_error()),
            }
        }
    }

    fn batch() -> BatchClassifier<NameReader> {
        BatchClassifier::with_classifier(Classifier::with_reader(NameReader))
    }

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn empty_input_gives_empty_report() {
        let report = batch().classify_all(&[]);
        assert!(report.entries.is_empty());
        assert!(report.by_class.is_empty());
        assert_eq!(report.failed, 0);
    }

    #[test]
    fn entries_keep_input_order() {
        let input = paths(&["312x390.png", "1334x750.png", "bogus.png", "2048x1536.jpg"]);
        let report = batch().classify_all(&input);

        let out: Vec<&PathBuf> = report.entries.iter().map(|e| &e.path).collect();
        assert_eq!(out, input.iter().collect::<Vec<_>>());
        assert_eq!(report.entries[0].device_class, Some(DeviceSizeClass::AppleWatch));
        assert_eq!(report.entries[1].device_class, Some(DeviceSizeClass::Iphone47));
        assert!(matches!(
            report.entries[2].failure,
            Some(FailureReason::UnreadableImage { .. })
        ));
    }

    #[test]
    fn counts_follow_class_order() {
        let input = paths(&["312x390.png", "750x1334.png", "1334x750.png", "7x7.png"]);
        let report = batch().classify_all(&input);

        assert_eq!(
            report.by_class,
            vec![
                ClassCount {
                    device_class: DeviceSizeClass::Iphone47,
                    count: 2
                },
                ClassCount {
                    device_class: DeviceSizeClass::AppleWatch,
                    count: 1
                },
            ]
        );
        assert_eq!(report.failed, 1);
        assert_eq!(report.classified(), 3);
        assert_eq!(report.entries_for(DeviceSizeClass::Iphone47).count(), 2);
        assert_eq!(
            report.failures().next().and_then(|e| e.failure.clone()),
            Some(FailureReason::UnsupportedResolution {
                width: 7,
                height: 7
            })
        );
    }

    #[test]
    fn progress_reaches_total() {
        let input = paths(&["312x390.png", "750x1334.png", "1x1.png"]);
        let max_seen = AtomicUsize::new(0);

        batch().classify_all_with_progress(&input, |done, total| {
            assert_eq!(total, 3);
            max_seen.fetch_max(done, Ordering::Relaxed);
        });

        assert_eq!(max_seen.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn classified_counts_entries_not_failed_field() {
        let report = BatchReport {
            entries: Vec::new(),
            by_class: Vec::new(),
            failed: 5,
            duration_ms: 0,
        };
        assert_eq!(report.classified(), 0);
    }
}
