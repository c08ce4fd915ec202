//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::args::{CategorizeArgs, OutputFormat};
use crate::error::Result;

/// Result structure for a prediction.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PredictionOutput {
    pub label: String,
}

/// Print a predicted label to stdout in the selected format.
pub fn output_prediction(label: &str, args: &CategorizeArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_prediction(&mut out, label, args.output_format)?;
    out.flush()?;
    Ok(())
}

/// Write a predicted label as exactly one line.
pub fn write_prediction<W: Write>(out: &mut W, label: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => writeln!(out, "{label}")?,
        OutputFormat::Json => {
            let result = PredictionOutput {
                label: label.to_string(),
            };
            writeln!(out, "{}", serde_json::to_string(&result)?)?;
        }
    }
    Ok(())
}
