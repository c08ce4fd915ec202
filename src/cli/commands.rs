//! Command implementation for the categorize CLI.

use log::debug;

use crate::cli::args::CategorizeArgs;
use crate::cli::output::output_prediction;
use crate::error::{CategorizeError, Result};
use crate::predictor::Predictor;

/// Execute a CLI invocation: load the model, classify the text, print the label.
pub fn execute_command(args: CategorizeArgs) -> Result<()> {
    let text = args.text.as_deref().ok_or_else(|| {
        CategorizeError::missing_argument("no text to classify (usage: categorize <TEXT>)")
    })?;

    let predictor = match &args.model {
        Some(path) => Predictor::load_artifact_from(path)?,
        None => Predictor::load_artifact()?,
    };

    let label = predictor.predict(text)?;
    debug!("Predicted label {label:?} for {} bytes of input", text.len());

    output_prediction(label, &args)
}
