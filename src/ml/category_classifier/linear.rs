//! Linear classifier (logistic regression, linear SVM, ridge, SGD).

use log::debug;

use crate::error::{CategorizeError, Result};

use super::classifier::Classifier;
use super::decision::{DecisionFunction, argmax, validate_classes};
use super::sparse::SparseVector;
use super::types::LinearModelState;

/// Linear classifier over TF-IDF features.
///
/// With two classes and a single weight row the sign of the score decides:
/// positive selects `classes[1]`, anything else `classes[0]`. Otherwise the
/// class with the highest score wins.
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    classes: Vec<String>,
    decision: DecisionFunction,
}

impl LinearClassifier {
    /// Build a classifier from fitted state, validating its shape.
    pub fn from_state(state: LinearModelState) -> Result<Self> {
        validate_classes("linear", &state.classes)?;
        let decision = DecisionFunction::new("linear", state.coef, state.intercept)?;

        let k = state.classes.len();
        let binary = k == 2 && decision.n_rows() == 1;
        if !binary && decision.n_rows() != k {
            return Err(CategorizeError::artifact_corrupt(format!(
                "linear: {} weight rows for {k} classes",
                decision.n_rows()
            )));
        }

        Ok(Self {
            classes: state.classes,
            decision,
        })
    }

    /// Raw decision scores, one per weight row.
    pub fn decision_function(&self, features: &SparseVector) -> Result<Vec<f64>> {
        self.decision.scores(features)
    }
}

impl Classifier for LinearClassifier {
    fn classify(&self, features: &SparseVector) -> Result<&str> {
        let scores = self.decision_function(features)?;
        debug!("linear decision scores: {scores:?}");

        let index = if scores.len() == 1 {
            usize::from(scores[0] > 0.0)
        } else {
            argmax(&scores).ok_or_else(|| CategorizeError::prediction("no decision scores"))?
        };
        Ok(&self.classes[index])
    }

    fn labels(&self) -> &[String] {
        &self.classes
    }

    fn n_features(&self) -> usize {
        self.decision.n_features()
    }

    fn name(&self) -> &str {
        "linear"
    }
}
