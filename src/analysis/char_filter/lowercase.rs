//! Lowercase char filter.

use super::CharFilter;

/// A char filter that lowercases the entire input before tokenization.
///
/// Lowercasing ahead of the tokenizer lets case-sensitive token patterns such
/// as `[a-z]+` see the folded text.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        if input.is_ascii() {
            input.to_ascii_lowercase()
        } else {
            input.to_lowercase()
        }
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
