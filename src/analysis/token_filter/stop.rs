//! Stop word removal.
//!
//! Drops tokens found in the vectorizer's stop word list, so they never reach
//! the n-gram builder or the vocabulary lookup. Matching is exact; lowercasing
//! happens earlier, in the char filters.
//!
//! # Examples
//!
//! ```
//! use categorize::analysis::token::Token;
//! use categorize::analysis::token_filter::{Filter, StopFilter};
//!
//! let filter = StopFilter::from_words(["the", "were"]);
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("results", 1),
//!     Token::new("were", 2),
//!     Token::new("announced", 3),
//! ];
//!
//! let kept: Vec<String> = filter
//!     .filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(kept, ["results", "announced"]);
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes stop words from the token stream.
#[derive(Clone, Debug, Default)]
pub struct StopFilter {
    words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Build a filter from any list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            words: Arc::new(words.into_iter().map(Into::into).collect()),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let words = Arc::clone(&self.words);
        Ok(Box::new(tokens.filter(move |t| !words.contains(&t.text))))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
