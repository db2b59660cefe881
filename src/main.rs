//! # shot-sizer CLI
//!
//! Command-line interface for the screenshot classifier.
//!
//! ## Usage
//! ```bash
//! shot-sizer classify ./screenshots --output json
//! shot-sizer validate en-US/1.png --device iphone6
//! ```

mod cli;

use screenshot_classifier::Result;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    screenshot_classifier::init_tracing();
    cli::run()
}
