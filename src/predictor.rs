//! Single-text category prediction.
//!
//! [`Predictor`] owns one fitted feature extractor and one classifier, both
//! immutable after construction. Loading checks that the two halves agree on
//! the feature dimension, so a constructed predictor can only fail at
//! prediction time when handed a foreign vector.
//!
//! # Examples
//!
//! ```no_run
//! use categorize::predictor::Predictor;
//!
//! # fn main() -> categorize::error::Result<()> {
//! let predictor = Predictor::load_artifact()?;
//! println!("{}", predictor.predict("the election results were announced")?);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use log::{debug, info};

use crate::artifact::{ModelArtifact, default_artifact_path};
use crate::error::{CategorizeError, Result};
use crate::ml::category_classifier::{
    self, Classifier, FeatureExtractor, SparseVector,
};

/// A loaded (feature extractor, classifier) pipeline.
pub struct Predictor {
    extractor: Box<dyn FeatureExtractor>,
    classifier: Box<dyn Classifier>,
}

impl std::fmt::Debug for Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predictor")
            .field("extractor", &self.extractor.name())
            .field("classifier", &self.classifier.name())
            .field("dimension", &self.extractor.dimension())
            .field("labels", &self.classifier.labels())
            .finish()
    }
}

impl Predictor {
    /// Combine an extractor and a classifier.
    ///
    /// The extractor's dimension must equal the classifier's expected input
    /// size; a mismatch means the artifact pairs incompatible halves.
    pub fn new(
        extractor: Box<dyn FeatureExtractor>,
        classifier: Box<dyn Classifier>,
    ) -> Result<Self> {
        if extractor.dimension() != classifier.n_features() {
            return Err(CategorizeError::artifact_corrupt(format!(
                "{} produces {} features but {} expects {}",
                extractor.name(),
                extractor.dimension(),
                classifier.name(),
                classifier.n_features()
            )));
        }
        Ok(Self {
            extractor,
            classifier,
        })
    }

    /// Build a predictor from a decoded artifact.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        let extractor = category_classifier::new_tfidf(artifact.vectorizer)?;
        let classifier = category_classifier::new_classifier(artifact.model)?;
        Self::new(extractor, classifier)
    }

    /// Load the artifact from its fixed location next to the executable.
    pub fn load_artifact() -> Result<Self> {
        Self::load_artifact_from(default_artifact_path()?)
    }

    /// Load the artifact stored at `path`.
    pub fn load_artifact_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading model artifact from {}", path.display());

        let predictor = Self::from_artifact(ModelArtifact::load(path)?)?;
        debug!("{predictor:?}");
        Ok(predictor)
    }

    /// Transform text into the classifier's feature space.
    pub fn extract_features(&self, text: &str) -> Result<SparseVector> {
        let features = self.extractor.extract_features(text)?;
        if features.is_zero() {
            info!("Input has no vocabulary terms; the label rests on the model bias");
        }
        Ok(features)
    }

    /// Pick the highest-scoring label for a feature vector.
    pub fn classify(&self, features: &SparseVector) -> Result<&str> {
        self.classifier.classify(features)
    }

    /// Classify one text.
    pub fn predict(&self, text: &str) -> Result<&str> {
        let features = self.extract_features(text)?;
        self.classify(&features)
    }

    /// The learned label set.
    pub fn labels(&self) -> &[String] {
        self.classifier.labels()
    }
}
