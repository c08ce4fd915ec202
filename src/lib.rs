//! # Categorize
//!
//! Single-text category prediction with a pre-trained TF-IDF model.
//!
//! ## Features
//!
//! - TF-IDF feature extraction with a configurable analysis pipeline
//! - Linear and multinomial naive Bayes classifiers
//! - JSON or bincode model artifacts
//! - A one-shot command line front end

pub mod analysis;
pub mod artifact;
pub mod cli;
pub mod error;
pub mod ml;
pub mod predictor;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
