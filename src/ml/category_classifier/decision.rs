//! Shared linear decision function: one score per row, `row · x + bias`.

use std::collections::HashSet;

use crate::error::{CategorizeError, Result};

use super::sparse::SparseVector;

/// Weight rows plus per-row bias, validated for a consistent shape.
#[derive(Debug, Clone)]
pub(crate) struct DecisionFunction {
    rows: Vec<Vec<f64>>,
    bias: Vec<f64>,
    n_features: usize,
}

impl DecisionFunction {
    /// Validate and wrap `rows`/`bias`. Shape problems are artifact corruption.
    pub(crate) fn new(kind: &str, rows: Vec<Vec<f64>>, bias: Vec<f64>) -> Result<Self> {
        let n_features = match rows.first() {
            Some(row) => row.len(),
            None => {
                return Err(CategorizeError::artifact_corrupt(format!(
                    "{kind}: weight matrix has no rows"
                )));
            }
        };
        if n_features == 0 {
            return Err(CategorizeError::artifact_corrupt(format!(
                "{kind}: weight rows have no columns"
            )));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_features) {
            return Err(CategorizeError::artifact_corrupt(format!(
                "{kind}: row {i} has {} columns, expected {n_features}",
                row.len()
            )));
        }
        if bias.len() != rows.len() {
            return Err(CategorizeError::artifact_corrupt(format!(
                "{kind}: {} bias terms for {} weight rows",
                bias.len(),
                rows.len()
            )));
        }
        let all_finite = rows.iter().flatten().chain(bias.iter()).all(|v| v.is_finite());
        if !all_finite {
            return Err(CategorizeError::artifact_corrupt(format!(
                "{kind}: weights must be finite"
            )));
        }

        Ok(Self {
            rows,
            bias,
            n_features,
        })
    }

    pub(crate) fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn n_features(&self) -> usize {
        self.n_features
    }

    /// Score every row against `features`.
    pub(crate) fn scores(&self, features: &SparseVector) -> Result<Vec<f64>> {
        if features.dimension() != self.n_features {
            return Err(CategorizeError::prediction(format!(
                "feature vector has {} columns, classifier expects {}",
                features.dimension(),
                self.n_features
            )));
        }

        let scores = self
            .rows
            .iter()
            .zip(&self.bias)
            .map(|(row, bias)| features.dot(row).map(|dot| dot + bias))
            .collect::<Result<Vec<f64>>>()?;

        if let Some(score) = scores.iter().find(|s| !s.is_finite()) {
            return Err(CategorizeError::prediction(format!(
                "decision score is not finite: {score}"
            )));
        }
        Ok(scores)
    }
}

/// Index of the highest score; ties go to the lowest index.
pub(crate) fn argmax(scores: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &score) in scores.iter().enumerate() {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((i, score)),
        }
    }
    best.map(|(i, _)| i)
}

/// Check a learned label set: at least two labels, no duplicates, each
/// printable on a single line.
pub(crate) fn validate_classes(kind: &str, classes: &[String]) -> Result<()> {
    if classes.len() < 2 {
        return Err(CategorizeError::artifact_corrupt(format!(
            "{kind}: need at least 2 classes, found {}",
            classes.len()
        )));
    }
    if let Some(bad) = classes.iter().find(|c| c.contains(['\n', '\r'])) {
        return Err(CategorizeError::artifact_corrupt(format!(
            "{kind}: class label {bad:?} contains a line break"
        )));
    }
    let mut seen = HashSet::new();
    if let Some(dup) = classes.iter().find(|c| !seen.insert(c.as_str())) {
        return Err(CategorizeError::artifact_corrupt(format!(
            "{kind}: duplicate class label {dup:?}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argmax_prefers_first_maximum() {
        assert_eq!(argmax(&[0.1, 0.7, 0.7, -1.0]), Some(1));
        assert_eq!(argmax(&[-3.0]), Some(0));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn test_scores() {
        let decision =
            DecisionFunction::new("test", vec![vec![1.0, 0.0], vec![0.0, 2.0]], vec![0.5, -0.5])
                .unwrap();
        let x = SparseVector::from_pairs(2, vec![(1, 1.0)]).unwrap();

        assert_eq!(decision.scores(&x).unwrap(), vec![0.5, 1.5]);
        assert_eq!(decision.n_rows(), 2);
        assert_eq!(decision.n_features(), 2);
    }

    #[test]
    fn test_dimension_mismatch_is_prediction_failure() {
        let decision = DecisionFunction::new("test", vec![vec![1.0, 0.0]], vec![0.0]).unwrap();
        let err = decision.scores(&SparseVector::new(3)).unwrap_err();
        assert!(matches!(err, CategorizeError::PredictionFailure(_)));
    }

    #[test]
    fn test_shape_validation() {
        assert!(DecisionFunction::new("t", vec![], vec![]).is_err());
        assert!(DecisionFunction::new("t", vec![vec![]], vec![0.0]).is_err());
        assert!(DecisionFunction::new("t", vec![vec![1.0], vec![1.0, 2.0]], vec![0.0, 0.0]).is_err());
        assert!(DecisionFunction::new("t", vec![vec![1.0]], vec![0.0, 1.0]).is_err());
        assert!(DecisionFunction::new("t", vec![vec![f64::NAN]], vec![0.0]).is_err());
    }

    #[test]
    fn test_validate_classes() {
        assert!(validate_classes("t", &["a".into(), "b".into()]).is_ok());
        assert!(validate_classes("t", &["a".into()]).is_err());
        assert!(validate_classes("t", &["a".into(), "a".into()]).is_err());
    }

    #[test]
    fn test_multiline_label_is_corrupt_artifact() {
        for label in ["sports\npolitics", "sports\r", "\n"] {
            let err = validate_classes("t", &["a".into(), label.into()]).unwrap_err();
            assert!(matches!(err, CategorizeError::ArtifactCorrupt(_)), "{label:?}");
        }
        assert!(validate_classes("t", &["a b".into(), "c\td".into()]).is_ok());
    }
}
