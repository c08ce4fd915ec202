//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows through the analysis pipeline; a
//! [`TokenStream`] is a boxed iterator of tokens handed from the tokenizer to
//! each token filter in turn.
//!
//! # Examples
//!
//! ```
//! use categorize::analysis::token::Token;
//!
//! let token = Token::with_offsets("election", 1, 4, 12);
//! assert_eq!(token.text, "election");
//! assert_eq!(&"the election"[token.start_offset..token.end_offset], "election");
//! ```

use std::fmt;

/// One term produced by the tokenizer or a token filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Term text
    pub text: String,

    /// Index in the stream (0-based)
    pub position: usize,

    /// Byte range in the char-filtered text
    pub start_offset: usize,
    pub end_offset: usize,
}

impl Token {
    /// A token without source offsets.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Self::with_offsets(text, position, 0, 0)
    }

    /// A token covering `start_offset..end_offset` of the analyzed text.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_without_offsets() {
        let token = Token::new("vote", 3);
        assert_eq!(token.text, "vote");
        assert_eq!(token.position, 3);
        assert_eq!((token.start_offset, token.end_offset), (0, 0));
    }

    #[test]
    fn test_token_display() {
        let token = Token::with_offsets("rugby", 0, 0, 5);
        assert_eq!(token.to_string(), "rugby");
    }
}
