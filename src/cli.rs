//! Command-line interface
//!
//! One optional positional argument: the path to the collector config file.

use clap::Parser;
use std::path::PathBuf;

/// Publish this collector's test-helper addresses to the bouncer
#[derive(Parser, Debug)]
#[command(name = "collector-register")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the collector config file
    pub config: Option<PathBuf>,
}
