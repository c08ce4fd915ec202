//! Regex-based tokenizer implementation.
//!
//! Token patterns are written in Python `re` syntax, where `\w` is a letter,
//! a number or `_` and never a combining mark. Before compiling, `\w` and `\W`
//! are rewritten to those classes. Patterns of the form `\b\w..\w+\b` become
//! plain runs of word characters, since the `regex` crate's `\b` also treats
//! combining marks as word characters.

use std::sync::Arc;

use log::debug;
use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{CategorizeError, Result};

/// Default token pattern: runs of two or more word characters.
pub const DEFAULT_TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

/// Python's `\w` for str patterns.
const WORD_CLASS: &str = r"[\p{L}\p{N}_]";
const NON_WORD_CLASS: &str = r"[^\p{L}\p{N}_]";

/// A regex-based tokenizer that extracts tokens using regular expressions.
///
/// When the pattern contains a single capture group, the captured text is the
/// token instead of the whole match.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// Pattern as written in the artifact
    source: String,
    /// Compiled translation of `source`
    regex: Arc<Regex>,
    /// Whether the token is the first capture group rather than the full match
    capture: bool,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_TOKEN_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let translated =
            word_run_pattern(pattern).unwrap_or_else(|| translate_word_classes(pattern));
        if translated.contains(r"\b") || translated.contains(r"\B") {
            debug!("token pattern {pattern:?} keeps Unicode word boundaries");
        }
        let regex = Regex::new(&translated)
            .map_err(|e| CategorizeError::analysis(format!("Invalid regex pattern: {e}")))?;

        // captures_len() counts the implicit whole-match group.
        let capture = match regex.captures_len() {
            1 => false,
            2 => true,
            n => {
                return Err(CategorizeError::analysis(format!(
                    "Token pattern may contain at most one capture group, found {}",
                    n - 1
                )));
            }
        };

        Ok(RegexTokenizer {
            source: pattern.to_string(),
            regex: Arc::new(regex),
            capture,
        })
    }

    /// Get the pattern this tokenizer was built from.
    pub fn pattern(&self) -> &str {
        &self.source
    }
}

/// `(?u)\b` + k × `\w` + `+\b` is a maximal run of at least k word
/// characters, which `find_iter` yields directly.
fn word_run_pattern(pattern: &str) -> Option<String> {
    let body = pattern.strip_prefix("(?u)").unwrap_or(pattern);
    let mut rest = body.strip_prefix(r"\b")?.strip_suffix(r"\b")?;
    let mut min_len = 0;
    while let Some(tail) = rest.strip_prefix(r"\w") {
        min_len += 1;
        rest = tail;
    }
    (min_len > 0 && rest == "+").then(|| format!("{WORD_CLASS}{{{min_len},}}"))
}

/// Replace `\w` and `\W` with explicit classes, leaving other escapes alone.
fn translate_word_classes(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('w') => out.push_str(WORD_CLASS),
            Some('W') => out.push_str(NON_WORD_CLASS),
            Some(next) => {
                out.push('\\');
                out.push(next);
            }
            None => out.push('\\'),
        }
    }
    out
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = if self.capture {
            self.regex
                .captures_iter(text)
                .filter_map(|caps| caps.get(1))
                .enumerate()
                .map(|(position, mat)| {
                    Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
                })
                .collect()
        } else {
            self.regex
                .find_iter(text)
                .enumerate()
                .map(|(position, mat)| {
                    Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
                })
                .collect()
        };

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
