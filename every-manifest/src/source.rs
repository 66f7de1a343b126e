//! The seam between manifest formats and the combination runner.

use std::path::Path;

use cargo_every_core::FeatureSet;

use crate::{CargoToml, Result};

/// Anything that can produce the ordered feature set to enumerate.
pub trait FeatureSource {
    /// Return the sorted, deduplicated features, without `default`.
    fn features(&self) -> Result<FeatureSet>;
}

impl FeatureSource for Path {
    fn features(&self) -> Result<FeatureSet> {
        CargoToml::open(self).map(|manifest| manifest.feature_set().clone())
    }
}

impl FeatureSource for CargoToml {
    fn features(&self) -> Result<FeatureSet> {
        Ok(self.feature_set().clone())
    }
}

impl FeatureSource for FeatureSet {
    fn features(&self) -> Result<FeatureSet> {
        Ok(self.clone())
    }
}
