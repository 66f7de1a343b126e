use std::path::{Path, PathBuf};

use cargo_every_core::FeatureSet;

use crate::{Error, Result, parse_features};

/// A Cargo.toml file with both raw content and extracted features.
#[derive(Debug)]
pub struct CargoToml {
    path: PathBuf,
    content: String,
    features: FeatureSet,
}

impl CargoToml {
    /// Open a manifest and extract its features.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        tracing::debug!(path = %path.display(), "reading manifest");
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let features = parse_features(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content,
            features,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the extracted feature set.
    pub fn feature_set(&self) -> &FeatureSet {
        &self.features
    }
}
