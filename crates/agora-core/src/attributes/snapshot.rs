use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::AttributeKey;

/// A reactor's disclosed attribute values, captured at reaction time.
///
/// Snapshots are immutable once attached to a reaction. A later change to the
/// user's profile produces new snapshots on new reactions and leaves the old
/// ones untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSnapshot {
    values: BTreeMap<AttributeKey, Option<String>>,
}

impl AttributeSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter used when materializing rows.
    pub fn with(mut self, key: AttributeKey, value: impl Into<String>) -> Self {
        self.values.insert(key, Some(value.into()));
        self
    }

    /// The disclosed value for `key`. Undisclosed, null and blank values are `None`.
    pub fn get(&self, key: AttributeKey) -> Option<&str> {
        self.values
            .get(&key)?
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    /// Iterate over disclosed `(key, value)` pairs in registry order.
    pub fn disclosed(&self) -> impl Iterator<Item = (AttributeKey, &str)> + '_ {
        AttributeKey::ALL
            .iter()
            .filter_map(move |&key| self.get(key).map(|value| (key, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.disclosed().next().is_none()
    }
}
