//! Model artifact persistence.
//!
//! An artifact bundles the fitted vectorizer and classifier under two named
//! entries, `vectorizer` and `model`. It is stored as JSON by default, or as
//! bincode when the file name ends in `.bin` / `.bincode`.
//!
//! # Examples
//!
//! ```no_run
//! use categorize::artifact::ModelArtifact;
//!
//! let artifact = ModelArtifact::load("category_model.json").unwrap();
//! println!("{} vocabulary terms", artifact.vectorizer.vocabulary.len());
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bincode::Options;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{CategorizeError, Result};
use crate::ml::category_classifier::{ClassifierState, TfIdfState};

/// File name of the artifact looked up next to the executable.
pub const ARTIFACT_FILE_NAME: &str = "category_model.json";

/// Environment variable overriding the artifact location.
pub const ARTIFACT_PATH_ENV: &str = "CATEGORIZE_MODEL";

/// Encoding of an artifact file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    Json,
    Bincode,
}

impl ArtifactFormat {
    /// Pick the format from the file extension; anything unrecognized is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("bin") || ext.eq_ignore_ascii_case("bincode") => {
                ArtifactFormat::Bincode
            }
            _ => ArtifactFormat::Json,
        }
    }
}

/// A serialized (vectorizer, classifier) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Fitted feature extractor.
    pub vectorizer: TfIdfState,
    /// Fitted classifier.
    pub model: ClassifierState,
}

impl ModelArtifact {
    /// Bundle a vectorizer and a classifier.
    pub fn new(vectorizer: TfIdfState, model: ClassifierState) -> Self {
        Self { vectorizer, model }
    }

    /// Read and decode an artifact file.
    ///
    /// A file that does not exist yields [`CategorizeError::ArtifactMissing`];
    /// an unreadable path (a directory, say) or undecodable contents yield
    /// [`CategorizeError::ArtifactCorrupt`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CategorizeError::artifact_missing(path),
            // The path exists but cannot be read as an artifact file.
            _ => CategorizeError::artifact_corrupt(format!("{}: {e}", path.display())),
        })?;
        debug!("read {} bytes from {}", bytes.len(), path.display());

        Self::from_slice(&bytes, ArtifactFormat::from_path(path)).map_err(|e| match e {
            CategorizeError::ArtifactCorrupt(msg) => {
                CategorizeError::artifact_corrupt(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Decode an artifact from bytes.
    pub fn from_slice(bytes: &[u8], format: ArtifactFormat) -> Result<Self> {
        match format {
            ArtifactFormat::Json => serde_json::from_slice(bytes)
                .map_err(|e| CategorizeError::artifact_corrupt(format!("invalid JSON artifact: {e}"))),
            ArtifactFormat::Bincode => bincode_options()
                .with_limit(bytes.len() as u64)
                .deserialize(bytes)
                .map_err(|e| {
                    CategorizeError::artifact_corrupt(format!("invalid bincode artifact: {e}"))
                }),
        }
    }

    /// Encode this artifact.
    pub fn to_vec(&self, format: ArtifactFormat) -> Result<Vec<u8>> {
        match format {
            ArtifactFormat::Json => Ok(serde_json::to_vec(self)?),
            ArtifactFormat::Bincode => bincode_options().serialize(self).map_err(|e| {
                CategorizeError::other(format!("failed to encode bincode artifact: {e}"))
            }),
        }
    }

    /// Write this artifact, choosing the format from the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_vec(ArtifactFormat::from_path(path))?;
        fs::write(path, bytes)?;
        Ok(())
    }
}

fn bincode_options() -> impl Options {
    bincode::DefaultOptions::new().with_fixint_encoding()
}

/// The fixed artifact location: [`ARTIFACT_FILE_NAME`] in the directory
/// containing the running executable.
pub fn default_artifact_path() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().ok_or_else(|| {
        CategorizeError::other(format!(
            "cannot determine the directory of {}",
            exe.display()
        ))
    })?;
    Ok(dir.join(ARTIFACT_FILE_NAME))
}
