//! Capability traits for the two halves of a text classification pipeline.

use crate::error::Result;

use super::sparse::SparseVector;

/// Maps raw text to a fixed-dimension feature vector.
///
/// Implementations must be deterministic: the same text always yields the
/// same vector. Terms outside the learned vocabulary are ignored.
pub trait FeatureExtractor: Send + Sync {
    /// Transform one document into its feature vector.
    fn extract_features(&self, text: &str) -> Result<SparseVector>;

    /// Number of columns in every produced vector.
    fn dimension(&self) -> usize;

    /// Get the name of this extractor for debugging and logging.
    fn name(&self) -> &str;
}

/// Maps a feature vector to one label from a fixed, learned label set.
pub trait Classifier: Send + Sync {
    /// Predict the label for a feature vector.
    ///
    /// # Returns
    /// The highest-scoring label under this classifier's decision rule.
    fn classify(&self, features: &SparseVector) -> Result<&str>;

    /// The learned label set, in class index order.
    fn labels(&self) -> &[String];

    /// Input dimensionality this classifier expects.
    fn n_features(&self) -> usize;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
