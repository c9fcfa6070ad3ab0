use std::collections::BTreeSet;

use agora_core::{AttributeKey, OrdinalLevel};

/// The x-axis for one attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Axis {
    /// Fixed scale from the registry; positions are stable across queries.
    Ordinal(&'static [OrdinalLevel]),
    /// Distinct observed values, sorted. Positions are only meaningful within
    /// the query that built the axis.
    Nominal(Vec<String>),
}

impl Axis {
    /// Build the axis for `key`. Nominal axes are derived from `observed`.
    pub fn new<'a>(key: AttributeKey, observed: impl IntoIterator<Item = &'a str>) -> Self {
        match key.ordinal_levels() {
            Some(levels) => Self::Ordinal(levels),
            None => {
                let distinct: BTreeSet<&str> = observed.into_iter().collect();
                Self::Nominal(distinct.into_iter().map(str::to_string).collect())
            }
        }
    }

    /// Position of `value`, or `None` if it is not on the axis.
    pub fn index_of(&self, value: &str) -> Option<usize> {
        match self {
            Self::Ordinal(levels) => levels.iter().position(|l| l.value == value),
            Self::Nominal(values) => values.binary_search_by(|v| v.as_str().cmp(value)).ok(),
        }
    }

    /// Label of position `i` at index `i`.
    pub fn labels(&self) -> Vec<String> {
        match self {
            Self::Ordinal(levels) => levels.iter().map(|l| l.label.to_string()).collect(),
            Self::Nominal(values) => values.clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Ordinal(levels) => levels.len(),
            Self::Nominal(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
