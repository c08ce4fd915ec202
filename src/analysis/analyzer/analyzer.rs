//! Core analyzer trait definition.
//!
//! Analyzers are the complete text processing pipeline that turns a raw
//! document into the terms looked up in a vectorizer vocabulary:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Token Filters → Terms
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and logging).
    fn name(&self) -> &str;
}
