//! Power-set enumeration over a feature set.

use std::{fmt, iter::FusedIterator};

/// One subset of a feature set, in feature-set order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combination<'a> {
    features: Vec<&'a str>,
}

impl<'a> Combination<'a> {
    /// Selected feature names.
    pub fn features(&self) -> &[&'a str] {
        &self.features
    }

    /// Number of selected features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether this is the empty combination.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Value for cargo's `--features=` flag.
    pub fn to_flag_value(&self) -> String {
        self.features.join(",")
    }
}

impl fmt::Display for Combination<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.features.join(", "))
    }
}

/// Lazy iterator over every subset of a slice of names.
///
/// Subsets come out by increasing size, and within one size in lexicographic
/// order of their index positions:
///
/// ```text
/// [a, b, c] -> [], [a], [b], [c], [a, b], [a, c], [b, c], [a, b, c]
/// ```
///
/// Only the index vector of the current subset is held in memory. Calling
/// [`FeatureSet::combinations`](crate::FeatureSet::combinations) again starts
/// over from the empty subset; a clone resumes from the same position.
#[derive(Debug, Clone)]
pub struct PowerSet<'a> {
    names: &'a [String],
    indices: Vec<usize>,
    remaining: Option<u64>,
    done: bool,
}

impl<'a> PowerSet<'a> {
    pub(crate) fn new(names: &'a [String]) -> Self {
        let remaining = u32::try_from(names.len())
            .ok()
            .and_then(|n| 1u64.checked_shl(n));

        Self {
            names,
            indices: Vec::new(),
            remaining,
            done: false,
        }
    }

    fn current(&self) -> Combination<'a> {
        Combination {
            features: self
                .indices
                .iter()
                .map(|&i| self.names[i].as_str())
                .collect(),
        }
    }

    /// Step to the next k-combination, or to the first (k+1)-combination.
    fn advance(&mut self) {
        let n = self.names.len();
        let k = self.indices.len();

        // Rightmost slot that can still move right.
        match (0..k).rev().find(|&i| self.indices[i] < n - k + i) {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None if k == n => self.done = true,
            None => self.indices = (0..=k).collect(),
        }
    }
}

impl<'a> Iterator for PowerSet<'a> {
    type Item = Combination<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let combination = self.current();
        self.advance();
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        Some(combination)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining.map(usize::try_from) {
            Some(Ok(remaining)) => (remaining, Some(remaining)),
            _ => (usize::MAX, None),
        }
    }
}

impl FusedIterator for PowerSet<'_> {}
