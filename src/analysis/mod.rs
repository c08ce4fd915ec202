//! Text analysis module.
//!
//! Provides the analysis pipeline used by the TF-IDF vectorizer: char
//! filters, a regex tokenizer, token filters and the analyzer that chains
//! them together.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
