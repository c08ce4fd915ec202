//! Helper functions for building pipeline halves from serialized state.

use crate::error::Result;

use super::classifier::{Classifier, FeatureExtractor};
use super::linear::LinearClassifier;
use super::naive_bayes::MultinomialNbClassifier;
use super::tfidf::TfIdfVectorizer;
use super::types::{ClassifierState, TfIdfState};

/// Create a TF-IDF feature extractor from fitted state.
pub fn new_tfidf(state: TfIdfState) -> Result<Box<dyn FeatureExtractor>> {
    Ok(Box::new(TfIdfVectorizer::from_state(state)?))
}

/// Create the classifier described by `state`.
pub fn new_classifier(state: ClassifierState) -> Result<Box<dyn Classifier>> {
    match state {
        ClassifierState::Linear(linear) => Ok(Box::new(LinearClassifier::from_state(linear)?)),
        ClassifierState::MultinomialNb(nb) => {
            Ok(Box::new(MultinomialNbClassifier::from_state(nb)?))
        }
    }
}
