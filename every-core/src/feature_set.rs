//! The ordered set of features declared by a manifest.

use std::{collections::BTreeSet, fmt};

use crate::PowerSet;

/// Name of cargo's implicit aggregate feature, never enumerated.
pub const DEFAULT_FEATURE: &str = "default";

/// Sorted, deduplicated feature names excluding [`DEFAULT_FEATURE`].
///
/// The ordering is lexicographic so that enumerating the same manifest twice
/// yields the same combinations in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSet {
    names: Vec<String>,
}

impl FeatureSet {
    /// Build a feature set from arbitrary names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: BTreeSet<String> = names
            .into_iter()
            .map(Into::into)
            .filter(|name| name != DEFAULT_FEATURE)
            .collect();

        Self {
            names: names.into_iter().collect(),
        }
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no features are declared.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate feature names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Feature names as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    /// Number of combinations, `2^len`, or `None` if it does not fit in a `u64`.
    pub fn combination_count(&self) -> Option<u64> {
        u32::try_from(self.names.len())
            .ok()
            .and_then(|n| 1u64.checked_shl(n))
    }

    /// Lazily enumerate every subset of this feature set.
    pub fn combinations(&self) -> PowerSet<'_> {
        PowerSet::new(&self.names)
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.names.join(", "))
    }
}

impl<S: Into<String>> FromIterator<S> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
