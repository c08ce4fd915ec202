//! Text category classification with TF-IDF features.
//!
//! A fitted pipeline has two halves behind capability traits:
//!
//! - `FeatureExtractor`: raw text to a sparse feature vector
//!   (`TfIdfVectorizer`)
//! - `Classifier`: feature vector to one learned label
//!   (`LinearClassifier`, `MultinomialNbClassifier`)
//!
//! Both are rebuilt from the serialized state types in [`types`]; nothing in
//! this module fits a model.
//!
//! # Example
//!
//! ```rust
//! use categorize::ml::category_classifier::{self, LinearModelState, TfIdfState};
//! use std::collections::HashMap;
//!
//! # fn main() -> categorize::error::Result<()> {
//! let vocabulary = HashMap::from([("election".to_string(), 0), ("match".to_string(), 1)]);
//! let extractor = category_classifier::new_tfidf(TfIdfState::new(vocabulary, vec![1.0, 1.0]))?;
//! let classifier = category_classifier::new_classifier(
//!     category_classifier::ClassifierState::Linear(LinearModelState {
//!         classes: vec!["politics".to_string(), "sports".to_string()],
//!         coef: vec![vec![-1.0, 1.0]],
//!         intercept: vec![0.0],
//!     }),
//! )?;
//!
//! let features = extractor.extract_features("the election results were announced")?;
//! assert_eq!(classifier.classify(&features)?, "politics");
//! # Ok(())
//! # }
//! ```

mod classifier;
mod core;
mod decision;
mod linear;
mod naive_bayes;
mod sparse;
mod tfidf;
pub mod types;

// Public exports
pub use classifier::{Classifier, FeatureExtractor};
pub use self::core::{new_classifier, new_tfidf};
pub use linear::LinearClassifier;
pub use naive_bayes::MultinomialNbClassifier;
pub use sparse::SparseVector;
pub use tfidf::TfIdfVectorizer;
pub use types::{ClassifierState, LinearModelState, NaiveBayesState, Norm, TfIdfState};
