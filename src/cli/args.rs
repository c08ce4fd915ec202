//! Command line argument parsing for the categorize CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::artifact::ARTIFACT_PATH_ENV;

/// Categorize - assign a category label to a piece of text
#[derive(Parser, Debug, Clone)]
#[command(name = "categorize")]
#[command(about = "Classify one text into a category with a pre-trained model")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct CategorizeArgs {
    /// Text to classify (put it after `--` when it starts with a hyphen)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Model artifact to load instead of the one next to the executable
    #[arg(short, long, value_name = "MODEL_FILE", env = ARTIFACT_PATH_ENV)]
    pub model: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "plain")]
    pub output_format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,
}

impl CategorizeArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            // Normal is 1; each -v adds one.
            self.verbose.saturating_add(1)
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The bare label
    Plain,
    /// A single-line JSON object
    Json,
}
