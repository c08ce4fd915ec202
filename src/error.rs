//! Error types for the categorize crate.
//!
//! All failures are represented by the [`CategorizeError`] enum. Every variant
//! is fatal for a prediction run; the binary reports the error on stderr and
//! exits with [`CategorizeError::exit_code`].
//!
//! # Examples
//!
//! ```
//! use categorize::error::{CategorizeError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(CategorizeError::artifact_corrupt("vocabulary is empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => assert_eq!(e.exit_code(), 4),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for categorize operations.
#[derive(Error, Debug)]
pub enum CategorizeError {
    /// No input text was supplied on the command line.
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    /// The model artifact file does not exist.
    #[error("Model artifact not found: {}", path.display())]
    ArtifactMissing { path: PathBuf },

    /// The model artifact could not be decoded or failed validation.
    #[error("Model artifact is corrupt: {0}")]
    ArtifactCorrupt(String),

    /// The feature vector does not fit the classifier.
    #[error("Prediction failed: {0}")]
    PredictionFailure(String),

    /// Analysis-related errors (tokenizer construction, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with CategorizeError.
pub type Result<T> = std::result::Result<T, CategorizeError>;

impl CategorizeError {
    /// Create a new missing argument error.
    pub fn missing_argument<S: Into<String>>(msg: S) -> Self {
        CategorizeError::MissingArgument(msg.into())
    }

    /// Create a new artifact missing error.
    pub fn artifact_missing<P: Into<PathBuf>>(path: P) -> Self {
        CategorizeError::ArtifactMissing { path: path.into() }
    }

    /// Create a new artifact corrupt error.
    pub fn artifact_corrupt<S: Into<String>>(msg: S) -> Self {
        CategorizeError::ArtifactCorrupt(msg.into())
    }

    /// Create a new prediction failure.
    pub fn prediction<S: Into<String>>(msg: S) -> Self {
        CategorizeError::PredictionFailure(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        CategorizeError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        CategorizeError::Other(msg.into())
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CategorizeError::MissingArgument(_) => 2,
            CategorizeError::ArtifactMissing { .. } => 3,
            CategorizeError::ArtifactCorrupt(_) => 4,
            CategorizeError::PredictionFailure(_) => 5,
            _ => 1,
        }
    }
}
