//! # CLI Module
//!
//! Command-line interface for the screenshot classifier.
//!
//! ## Usage
//! ```bash
//! # Classify every screenshot under a folder
//! shot-sizer classify ./fastlane/screenshots
//!
//! # JSON output
//! shot-sizer classify ./fastlane/screenshots --output json
//!
//! # Check a screenshot against the class it was filed under
//! shot-sizer validate en-US/1.png --device iphone6Plus
//!
//! # Show the resolution table
//! shot-sizer devices
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use screenshot_classifier::core::batch::{BatchClassifier, BatchReport};
use screenshot_classifier::core::scanner::{ScanConfig, ScreenshotScanner};
use screenshot_classifier::error::Result;
use screenshot_classifier::{Classifier, DeviceSizeClass, Screenshot, ValidationOutcome};
use std::path::PathBuf;
use std::process::ExitCode;

/// Screenshot Classifier - sort store screenshots by device size
#[derive(Parser, Debug)]
#[command(name = "shot-sizer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify screenshots by their pixel dimensions
    Classify {
        /// Files or directories to classify
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        output: OutputFormat,

        /// Include hidden files
        #[arg(long)]
        include_hidden: bool,

        /// Maximum directory depth to descend
        #[arg(long)]
        max_depth: Option<usize>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
    /// Check that a screenshot matches the device class it is filed under
    Validate {
        /// Screenshot file
        path: PathBuf,

        /// Claimed device class (identifier like iOS-4.7-in or code like iphone6)
        #[arg(short, long)]
        device: DeviceSizeClass,

        /// Language tag of the screenshot
        #[arg(short, long, default_value = "en-US")]
        language: String,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        output: OutputFormat,
    },
    /// List the supported device classes and their resolutions
    Devices {
        /// Output format
        #[arg(short, long, default_value = "pretty")]
        output: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Pretty,
    /// JSON output for scripting
    Json,
    /// Minimal tab-separated output
    Minimal,
}

/// Run the CLI
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            paths,
            output,
            include_hidden,
            max_depth,
            verbose,
        } => run_classify(paths, output, include_hidden, max_depth, verbose),
        Commands::Validate {
            path,
            device,
            language,
            output,
        } => run_validate(path, device, language, output),
        Commands::Devices { output } => run_devices(output),
    }
}

fn run_classify(
    paths: Vec<PathBuf>,
    output: OutputFormat,
    include_hidden: bool,
    max_depth: Option<usize>,
    verbose: bool,
) -> Result<ExitCode> {
    let term = Term::stderr();

    let scanner = ScreenshotScanner::new(ScanConfig {
        include_hidden,
        max_depth,
        ..Default::default()
    });
    let scan = scanner.scan(&paths).ensure_found()?;

    for error in &scan.errors {
        tracing::warn!("{}", error);
        if matches!(output, OutputFormat::Pretty) {
            term.write_line(&format!("{} {}", style("!").yellow().bold(), error))
                .ok();
        }
    }

    let progress = if matches!(output, OutputFormat::Pretty) {
        let pb = ProgressBar::new(scan.images.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓░"),
        );
        Some(pb)
    } else {
        None
    };

    let batch = BatchClassifier::new();
    let report = batch.classify_all_with_progress(&scan.images, |done, _total| {
        if let Some(ref pb) = progress {
            pb.set_position(done as u64);
        }
    });

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    match output {
        OutputFormat::Pretty => print_pretty_report(&term, &report, verbose),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Minimal => print_minimal_report(&report),
    }

    if report.failed > 0 || !scan.errors.is_empty() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn run_validate(
    path: PathBuf,
    device: DeviceSizeClass,
    language: String,
    output: OutputFormat,
) -> Result<ExitCode> {
    let classifier = Classifier::new();
    let screenshot = Screenshot::open(path, language, Some(device), &classifier)?;
    let outcome = screenshot.validate(&classifier);

    if let Some(reason) = outcome.reason() {
        tracing::warn!(
            path = %screenshot.path().display(),
            device = %screenshot.device_class(),
            "Looks like the screenshot does not match the requirements: {}",
            reason
        );
    }

    match output {
        OutputFormat::Pretty => print_pretty_validation(&screenshot, &outcome),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "screenshot": screenshot,
                "device_code": screenshot.device_code(),
                "valid": outcome.is_valid(),
                "reason": outcome.reason(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Minimal => println!(
            "{}\t{}",
            screenshot.path().display(),
            if outcome.is_valid() { "valid" } else { "invalid" }
        ),
    }

    Ok(if outcome.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_devices(output: OutputFormat) -> Result<ExitCode> {
    match output {
        OutputFormat::Pretty => {
            let term = Term::stdout();
            for class in DeviceSizeClass::ALL {
                term.write_line(&format!(
                    "{:<16} {:<12} {}",
                    style(class.identifier()).bold(),
                    style(class.device_code()).cyan(),
                    class.display_name()
                ))
                .ok();
                let sizes: Vec<String> = class.resolutions().iter().map(|r| r.to_string()).collect();
                term.write_line(&format!("  {}", style(sizes.join(", ")).dim()))
                    .ok();
            }
        }
        OutputFormat::Json => {
            let devices: Vec<_> = DeviceSizeClass::ALL
                .iter()
                .map(|class| {
                    serde_json::json!({
                        "identifier": class.identifier(),
                        "device_code": class.device_code(),
                        "display_name": class.display_name(),
                        "resolutions": class.resolutions(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&devices)?);
        }
        OutputFormat::Minimal => {
            for class in DeviceSizeClass::ALL {
                println!("{}\t{}", class.identifier(), class.device_code());
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_pretty_report(term: &Term, report: &BatchReport, verbose: bool) {
    term.write_line("").ok();
    term.write_line(&format!("{} Classification Complete", style("✓").green().bold()))
        .ok();
    term.write_line("").ok();

    term.write_line(&format!(
        "  {} screenshots checked in {:.1}s",
        style(report.entries.len()).cyan(),
        report.duration_ms as f64 / 1000.0
    ))
    .ok();
    term.write_line(&format!("  {} classified", style(report.classified()).cyan()))
        .ok();
    if report.failed > 0 {
        term.write_line(&format!("  {} not recognised", style(report.failed).red()))
            .ok();
    }
    term.write_line("").ok();

    for count in &report.by_class {
        let class = count.device_class;
        term.write_line(&format!(
            "  {} {} ({})",
            style(format!("{}:", class.display_name())).bold(),
            style(count.count).yellow(),
            style(class.device_code()).dim()
        ))
        .ok();

        if verbose {
            for entry in report.entries_for(class) {
                term.write_line(&format!("    {} {}", style("○").dim(), entry.path.display()))
                    .ok();
            }
        }
    }

    let mut failures = report.failures().peekable();
    if failures.peek().is_some() {
        term.write_line("").ok();
        term.write_line(&format!("{}", style("Not recognised:").bold().underlined()))
            .ok();
        for entry in failures {
            let reason = entry
                .failure
                .as_ref()
                .map(|r| r.to_string())
                .unwrap_or_default();
            term.write_line(&format!(
                "    {} {} {}",
                style("✗").red(),
                entry.path.display(),
                style(reason).dim()
            ))
            .ok();
        }
    }
}

fn print_pretty_validation(screenshot: &Screenshot, outcome: &ValidationOutcome) {
    let term = Term::stdout();
    let class = screenshot.device_class();

    if outcome.is_valid() {
        term.write_line(&format!(
            "{} {} matches {} ({})",
            style("✓").green().bold(),
            screenshot.path().display(),
            style(class.display_name()).cyan(),
            class.device_code()
        ))
        .ok();
    } else {
        term.write_line(&format!(
            "{} {} does not match {}",
            style("✗").red().bold(),
            screenshot.path().display(),
            style(class.display_name()).cyan()
        ))
        .ok();
        if let Some(reason) = outcome.reason() {
            term.write_line(&format!("  {}", style(reason).dim())).ok();
        }
    }
}

fn print_minimal_report(report: &BatchReport) {
    for entry in &report.entries {
        let code = entry
            .device_class
            .map(|c| c.device_code())
            .unwrap_or("unknown");
        println!("{}\t{}", entry.path.display(), code);
    }
}
