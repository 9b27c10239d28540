use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Immutable per-auction item attributes
///
/// Keys follow the `attr_01`..`attr_NN` format. Values are non-negative.
/// Every bidder of one auction reads the same set; nothing mutates it
/// after construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSet {
    values: BTreeMap<String, f64>,
}

impl AttributeSet {
    /// Build a set from raw key/value pairs
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            values: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Build a set from values in key order (`attr_01` gets the first value)
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        Self::from_pairs(
            values
                .into_iter()
                .enumerate()
                .map(|(i, v)| (Self::key(i + 1), v)),
        )
    }

    /// Formatted key for the 1-based attribute index
    pub fn key(index: usize) -> String {
        format!("attr_{:02}", index)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Arithmetic mean of all values, `None` for an empty set
    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        let sum: f64 = self.values.values().sum();
        Some(sum / self.values.len() as f64)
    }
}
