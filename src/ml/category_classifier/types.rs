//! Serialized state of a fitted vectorizer and classifier.
//!
//! These structs are the on-disk schema of a model artifact. Optional
//! vectorizer settings default to the values a stock TF-IDF vectorizer is
//! fitted with.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::AccentStripping;
use crate::analysis::tokenizer::regex::DEFAULT_TOKEN_PATTERN;

/// Vector normalization applied after TF-IDF weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    /// Divide by the sum of absolute values.
    L1,
    /// Divide by the Euclidean length.
    L2,
}

/// Fitted TF-IDF vectorizer state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfIdfState {
    /// Term -> column index.
    pub vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per column.
    #[serde(default)]
    pub idf: Vec<f64>,
    /// Lowercase the text before tokenizing.
    #[serde(default = "default_true")]
    pub lowercase: bool,
    /// Accent removal applied after lowercasing.
    #[serde(default)]
    pub strip_accents: Option<AccentStripping>,
    /// Regex selecting tokens.
    #[serde(default = "default_token_pattern")]
    pub token_pattern: String,
    /// Inclusive word n-gram range.
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    /// Words removed before n-grams are built.
    #[serde(default)]
    pub stop_words: Option<Vec<String>>,
    /// Output normalization.
    #[serde(default = "default_norm")]
    pub norm: Option<Norm>,
    /// Weight term frequencies by `idf`.
    #[serde(default = "default_true")]
    pub use_idf: bool,
    /// Replace tf with `1 + ln(tf)`.
    #[serde(default)]
    pub sublinear_tf: bool,
    /// Clamp non-zero term counts to 1.
    #[serde(default)]
    pub binary: bool,
}

impl TfIdfState {
    /// State with the given vocabulary and idf weights and default settings.
    pub fn new(vocabulary: HashMap<String, usize>, idf: Vec<f64>) -> Self {
        Self {
            vocabulary,
            idf,
            lowercase: true,
            strip_accents: None,
            token_pattern: default_token_pattern(),
            ngram_range: default_ngram_range(),
            stop_words: None,
            norm: default_norm(),
            use_idf: true,
            sublinear_tf: false,
            binary: false,
        }
    }
}

/// Fitted linear model: one weight row per decision function.
///
/// Binary problems may carry a single row whose positive side is `classes[1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModelState {
    pub classes: Vec<String>,
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
}

/// Fitted multinomial naive Bayes model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaiveBayesState {
    pub classes: Vec<String>,
    pub feature_log_prob: Vec<Vec<f64>>,
    pub class_log_prior: Vec<f64>,
}

/// The classifier half of an artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierState {
    Linear(LinearModelState),
    MultinomialNb(NaiveBayesState),
}

fn default_true() -> bool {
    true
}

fn default_token_pattern() -> String {
    DEFAULT_TOKEN_PATTERN.to_string()
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vectorizer_defaults() {
        let state: TfIdfState =
            serde_json::from_str(r#"{"vocabulary": {"vote": 0}, "idf": [1.5]}"#).unwrap();

        assert!(state.lowercase);
        assert!(state.use_idf);
        assert!(!state.sublinear_tf);
        assert!(!state.binary);
        assert_eq!(state.norm, Some(Norm::L2));
        assert_eq!(state.ngram_range, (1, 1));
        assert_eq!(state.token_pattern, DEFAULT_TOKEN_PATTERN);
        assert_eq!(state, TfIdfState::new(state.vocabulary.clone(), vec![1.5]));
    }

    #[test]
    fn test_explicit_settings() {
        let state: TfIdfState = serde_json::from_str(
            r#"{
                "vocabulary": {"vote": 0},
                "norm": null,
                "strip_accents": "unicode",
                "ngram_range": [1, 2],
                "stop_words": ["the"],
                "sublinear_tf": true,
                "max_df": 0.9
            }"#,
        )
        .unwrap();

        assert_eq!(state.norm, None);
        assert_eq!(state.strip_accents, Some(AccentStripping::Unicode));
        assert_eq!(state.ngram_range, (1, 2));
        assert_eq!(state.stop_words, Some(vec!["the".to_string()]));
        assert!(state.sublinear_tf);
        assert!(state.idf.is_empty());
    }

    #[test]
    fn test_classifier_state_tags() {
        let state: ClassifierState = serde_json::from_str(
            r#"{"multinomial_nb": {
                "classes": ["a", "b"],
                "feature_log_prob": [[-0.1], [-2.3]],
                "class_log_prior": [-0.69, -0.69]
            }}"#,
        )
        .unwrap();
        assert!(matches!(state, ClassifierState::MultinomialNb(_)));

        let json = serde_json::to_string(&ClassifierState::Linear(LinearModelState {
            classes: vec!["a".into(), "b".into()],
            coef: vec![vec![1.0]],
            intercept: vec![0.0],
        }))
        .unwrap();
        assert!(json.starts_with(r#"{"linear":"#));
    }
}
