//! TF-IDF vectorizer for text feature extraction.

use std::collections::HashMap;
use std::sync::Arc;

use ahash::AHashMap;
use log::debug;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::char_filter::{LowercaseCharFilter, StripAccentsCharFilter};
use crate::analysis::token_filter::{ShingleFilter, StopFilter};
use crate::analysis::tokenizer::RegexTokenizer;
use crate::error::{CategorizeError, Result};

use super::classifier::FeatureExtractor;
use super::sparse::SparseVector;
use super::types::{Norm, TfIdfState};

/// Fitted TF-IDF vectorizer.
///
/// Transforms one document by counting in-vocabulary terms, optionally
/// clamping or damping the counts, weighting by idf and normalizing.
pub struct TfIdfVectorizer {
    /// Vocabulary: term -> column index.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per column (empty when idf is disabled).
    idf: Vec<f64>,
    norm: Option<Norm>,
    sublinear_tf: bool,
    binary: bool,
    /// Analyzer for tokenization.
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("use_idf", &!self.idf.is_empty())
            .field("norm", &self.norm)
            .field("sublinear_tf", &self.sublinear_tf)
            .field("binary", &self.binary)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Rebuild a fitted vectorizer from its serialized state.
    ///
    /// Inconsistent state (bad vocabulary indices, idf length, token pattern
    /// or n-gram range) is reported as artifact corruption.
    pub fn from_state(state: TfIdfState) -> Result<Self> {
        Self::validate_vocabulary(&state.vocabulary)?;

        if state.use_idf {
            if state.idf.len() != state.vocabulary.len() {
                return Err(CategorizeError::artifact_corrupt(format!(
                    "vectorizer: {} idf weights for a vocabulary of {} terms",
                    state.idf.len(),
                    state.vocabulary.len()
                )));
            }
            if state.idf.iter().any(|w| !w.is_finite()) {
                return Err(CategorizeError::artifact_corrupt(
                    "vectorizer: idf weights must be finite",
                ));
            }
        }

        let analyzer = Self::build_analyzer(&state)
            .map_err(|e| CategorizeError::artifact_corrupt(format!("vectorizer: {e}")))?;

        Ok(Self {
            vocabulary: state.vocabulary,
            idf: if state.use_idf { state.idf } else { Vec::new() },
            norm: state.norm,
            sublinear_tf: state.sublinear_tf,
            binary: state.binary,
            analyzer: Arc::new(analyzer),
        })
    }

    /// Column indices must be exactly `0..vocabulary.len()`.
    fn validate_vocabulary(vocabulary: &HashMap<String, usize>) -> Result<()> {
        if vocabulary.is_empty() {
            return Err(CategorizeError::artifact_corrupt(
                "vectorizer: vocabulary is empty",
            ));
        }
        let mut seen = vec![false; vocabulary.len()];
        for (term, &index) in vocabulary {
            match seen.get_mut(index) {
                Some(slot) if !*slot => *slot = true,
                Some(_) => {
                    return Err(CategorizeError::artifact_corrupt(format!(
                        "vectorizer: column {index} assigned to more than one term ({term:?})"
                    )));
                }
                None => {
                    return Err(CategorizeError::artifact_corrupt(format!(
                        "vectorizer: term {term:?} has column {index}, vocabulary size is {}",
                        vocabulary.len()
                    )));
                }
            }
        }
        Ok(())
    }

    /// Assemble the analysis pipeline described by the vectorizer settings.
    fn build_analyzer(state: &TfIdfState) -> Result<PipelineAnalyzer> {
        let tokenizer = Arc::new(RegexTokenizer::with_pattern(&state.token_pattern)?);
        let mut analyzer = PipelineAnalyzer::new(tokenizer).with_name("tfidf");

        if state.lowercase {
            analyzer = analyzer.add_char_filter(Arc::new(LowercaseCharFilter::new()));
        }
        if let Some(mode) = state.strip_accents {
            analyzer = analyzer.add_char_filter(Arc::new(StripAccentsCharFilter::new(mode)));
        }
        if let Some(words) = state.stop_words.as_ref().filter(|w| !w.is_empty()) {
            analyzer = analyzer.add_filter(Arc::new(StopFilter::from_words(words.iter().cloned())));
        }
        let (min_n, max_n) = state.ngram_range;
        if (min_n, max_n) != (1, 1) {
            analyzer = analyzer.add_filter(Arc::new(ShingleFilter::new(min_n, max_n)?));
        }

        Ok(analyzer)
    }

    /// Transform a document into a TF-IDF feature vector.
    pub fn transform(&self, document: &str) -> Result<SparseVector> {
        let mut counts: AHashMap<usize, f64> = AHashMap::new();
        let mut n_terms = 0usize;
        for token in self.analyzer.analyze(document)? {
            n_terms += 1;
            if let Some(&idx) = self.vocabulary.get(&token.text) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut vector = SparseVector::from_pairs(self.vocabulary.len(), counts)?;

        if self.binary {
            vector.map_values(|_, _| 1.0);
        }
        if self.sublinear_tf {
            vector.map_values(|_, tf| 1.0 + tf.ln());
        }
        if !self.idf.is_empty() {
            vector.map_values(|idx, tf| tf * self.idf[idx]);
        }
        match self.norm {
            Some(Norm::L2) => vector.scale_down(vector.l2_norm()),
            Some(Norm::L1) => vector.scale_down(vector.l1_norm()),
            None => {}
        }

        debug!(
            "vectorized {} terms into {} of {} columns",
            n_terms,
            vector.nnz(),
            vector.dimension()
        );
        Ok(vector)
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

impl FeatureExtractor for TfIdfVectorizer {
    fn extract_features(&self, text: &str) -> Result<SparseVector> {
        self.transform(text)
    }

    fn dimension(&self) -> usize {
        self.vocabulary_size()
    }

    fn name(&self) -> &str {
        "tfidf"
    }
}
