//! Multinomial naive Bayes classifier.

use log::debug;

use crate::error::{CategorizeError, Result};

use super::classifier::Classifier;
use super::decision::{DecisionFunction, argmax, validate_classes};
use super::sparse::SparseVector;
use super::types::NaiveBayesState;

/// Multinomial naive Bayes: joint log likelihood
/// `x · feature_log_prob[c] + class_log_prior[c]`, highest wins.
#[derive(Debug, Clone)]
pub struct MultinomialNbClassifier {
    classes: Vec<String>,
    decision: DecisionFunction,
}

impl MultinomialNbClassifier {
    /// Build a classifier from fitted state, validating its shape.
    pub fn from_state(state: NaiveBayesState) -> Result<Self> {
        validate_classes("multinomial_nb", &state.classes)?;
        if state.feature_log_prob.len() != state.classes.len() {
            return Err(CategorizeError::artifact_corrupt(format!(
                "multinomial_nb: {} log-probability rows for {} classes",
                state.feature_log_prob.len(),
                state.classes.len()
            )));
        }
        let decision = DecisionFunction::new(
            "multinomial_nb",
            state.feature_log_prob,
            state.class_log_prior,
        )?;

        Ok(Self {
            classes: state.classes,
            decision,
        })
    }

    /// Joint log likelihood per class.
    pub fn joint_log_likelihood(&self, features: &SparseVector) -> Result<Vec<f64>> {
        self.decision.scores(features)
    }
}

impl Classifier for MultinomialNbClassifier {
    fn classify(&self, features: &SparseVector) -> Result<&str> {
        let jll = self.joint_log_likelihood(features)?;
        debug!("naive bayes joint log likelihood: {jll:?}");

        let index =
            argmax(&jll).ok_or_else(|| CategorizeError::prediction("no class likelihoods"))?;
        Ok(&self.classes[index])
    }

    fn labels(&self) -> &[String] {
        &self.classes
    }

    fn n_features(&self) -> usize {
        self.decision.n_features()
    }

    fn name(&self) -> &str {
        "multinomial_nb"
    }
}
