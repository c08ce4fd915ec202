//! Word n-gram (shingle) filter.
//!
//! Expands a token stream into every contiguous word n-gram with `n` in
//! `min_n..=max_n`. Grams are joined with a single space, emitted grouped by
//! `n` and then by starting position.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::{CategorizeError, Result};

/// A filter that emits word n-grams.
#[derive(Clone, Debug)]
pub struct ShingleFilter {
    min_n: usize,
    max_n: usize,
}

impl ShingleFilter {
    /// Create a shingle filter for n-grams of size `min_n..=max_n`.
    pub fn new(min_n: usize, max_n: usize) -> Result<Self> {
        if min_n == 0 || min_n > max_n {
            return Err(CategorizeError::analysis(format!(
                "Invalid n-gram range ({min_n}, {max_n})"
            )));
        }
        Ok(ShingleFilter { min_n, max_n })
    }

    /// Get the n-gram range.
    pub fn range(&self) -> (usize, usize) {
        (self.min_n, self.max_n)
    }
}

impl Filter for ShingleFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let words: Vec<Token> = tokens.collect();
        let mut grams = Vec::new();
        let mut position = 0;

        for n in self.min_n..=self.max_n.min(words.len()) {
            for window in words.windows(n) {
                let text = window
                    .iter()
                    .map(|t| t.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                let start = window[0].start_offset;
                let end = window[n - 1].end_offset;
                grams.push(Token::with_offsets(text, position, start, end));
                position += 1;
            }
        }

        Ok(Box::new(grams.into_iter()))
    }

    fn name(&self) -> &'static str {
        "shingle"
    }
}
