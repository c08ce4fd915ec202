//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the whole text string before it is passed to the
//! tokenizer, so token patterns see normalized text.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Unicode-aware lowercasing
//! - [`strip_accents::StripAccentsCharFilter`] - Accent removal via NFKD decomposition

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod strip_accents;

pub use lowercase::LowercaseCharFilter;
pub use strip_accents::{AccentStripping, StripAccentsCharFilter};
