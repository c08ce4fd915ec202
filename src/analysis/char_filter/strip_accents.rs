//! Accent stripping char filter.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::canonical_combining_class;

use super::CharFilter;

/// How accents are removed from the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentStripping {
    /// NFKD decomposition, then drop every non-ASCII character.
    Ascii,
    /// NFKD decomposition, then drop characters with a nonzero canonical
    /// combining class. Text that NFKD leaves unchanged is returned as is.
    Unicode,
}

/// A char filter that removes accents from the input.
#[derive(Clone, Debug)]
pub struct StripAccentsCharFilter {
    mode: AccentStripping,
}

impl StripAccentsCharFilter {
    /// Create a new accent stripping filter with the given mode.
    pub fn new(mode: AccentStripping) -> Self {
        Self { mode }
    }

    /// Get the stripping mode.
    pub fn mode(&self) -> AccentStripping {
        self.mode
    }
}

impl CharFilter for StripAccentsCharFilter {
    fn filter(&self, input: &str) -> String {
        match self.mode {
            AccentStripping::Ascii => input.nfkd().filter(|c| c.is_ascii()).collect(),
            AccentStripping::Unicode => {
                // ASCII text carries no accents.
                if input.is_ascii() {
                    return input.to_string();
                }
                let decomposed: String = input.nfkd().collect();
                if decomposed == input {
                    return decomposed;
                }
                decomposed
                    .chars()
                    .filter(|c| canonical_combining_class(*c) == 0)
                    .collect()
            }
        }
    }

    fn name(&self) -> &'static str {
        "strip_accents"
    }
}
