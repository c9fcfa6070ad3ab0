//! Declarative registry of self-disclosed attributes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AgoraError;

/// A key from the fixed attribute registry.
///
/// Declaration order is registry order; `Ord` follows it, so maps keyed by
/// `AttributeKey` iterate in the same order the registry lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKey {
    Gender,
    AgeRange,
    Education,
    Occupation,
    PoliticalParty,
    PoliticalStance,
}

/// One position on an ordinal attribute's fixed scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrdinalLevel {
    pub value: &'static str,
    pub label: &'static str,
}

const fn level(value: &'static str, label: &'static str) -> OrdinalLevel {
    OrdinalLevel { value, label }
}

/// Measurement scale of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeScale {
    /// Unordered categories; any disclosed string is a valid value.
    Nominal,
    /// A fixed total order. Index in the slice is the axis position.
    Ordinal(&'static [OrdinalLevel]),
}

/// Registry entry for a single attribute.
#[derive(Debug, Clone, Copy)]
pub struct AttributeSpec {
    pub key: AttributeKey,
    pub label: &'static str,
    pub scale: AttributeScale,
}

const AGE_RANGE_LEVELS: &[OrdinalLevel] = &[
    level("under_20", "Under 20"),
    level("20s", "20s"),
    level("30s", "30s"),
    level("40s", "40s"),
    level("50s", "50s"),
    level("60s", "60s"),
    level("70_plus", "70 and over"),
];

const EDUCATION_LEVELS: &[OrdinalLevel] = &[
    level("junior_high", "Junior high school"),
    level("high_school", "High school"),
    level("vocational", "Vocational school"),
    level("associate", "Associate degree"),
    level("bachelor", "Bachelor's degree"),
    level("master", "Master's degree"),
    level("doctorate", "Doctorate"),
];

const POLITICAL_STANCE_LEVELS: &[OrdinalLevel] = &[
    level("left", "Left"),
    level("center_left", "Center-left"),
    level("center", "Center"),
    level("center_right", "Center-right"),
    level("right", "Right"),
];

/// The registry, indexed by `AttributeKey as usize`.
pub static REGISTRY: [AttributeSpec; 6] = [
    AttributeSpec {
        key: AttributeKey::Gender,
        label: "Gender",
        scale: AttributeScale::Nominal,
    },
    AttributeSpec {
        key: AttributeKey::AgeRange,
        label: "Age range",
        scale: AttributeScale::Ordinal(AGE_RANGE_LEVELS),
    },
    AttributeSpec {
        key: AttributeKey::Education,
        label: "Education",
        scale: AttributeScale::Ordinal(EDUCATION_LEVELS),
    },
    AttributeSpec {
        key: AttributeKey::Occupation,
        label: "Occupation",
        scale: AttributeScale::Nominal,
    },
    AttributeSpec {
        key: AttributeKey::PoliticalParty,
        label: "Political party",
        scale: AttributeScale::Nominal,
    },
    AttributeSpec {
        key: AttributeKey::PoliticalStance,
        label: "Political stance",
        scale: AttributeScale::Ordinal(POLITICAL_STANCE_LEVELS),
    },
];

impl AttributeKey {
    /// All keys in registry order.
    pub const ALL: [AttributeKey; 6] = [
        Self::Gender,
        Self::AgeRange,
        Self::Education,
        Self::Occupation,
        Self::PoliticalParty,
        Self::PoliticalStance,
    ];

    /// Wire name of the key, e.g. `"political_stance"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::AgeRange => "age_range",
            Self::Education => "education",
            Self::Occupation => "occupation",
            Self::PoliticalParty => "political_party",
            Self::PoliticalStance => "political_stance",
        }
    }

    pub fn spec(self) -> &'static AttributeSpec {
        &REGISTRY[self as usize]
    }

    /// Human label of the attribute itself.
    pub fn label(self) -> &'static str {
        self.spec().label
    }

    pub fn scale(self) -> AttributeScale {
        self.spec().scale
    }

    pub fn is_ordinal(self) -> bool {
        matches!(self.scale(), AttributeScale::Ordinal(_))
    }

    /// Fixed levels for ordinal attributes, `None` for nominal ones.
    pub fn ordinal_levels(self) -> Option<&'static [OrdinalLevel]> {
        match self.scale() {
            AttributeScale::Ordinal(levels) => Some(levels),
            AttributeScale::Nominal => None,
        }
    }

    /// Position of `value` on this attribute's fixed scale.
    /// Always `None` for nominal attributes and for values outside the table.
    pub fn ordinal_index(self, value: &str) -> Option<usize> {
        self.ordinal_levels()?
            .iter()
            .position(|level| level.value == value)
    }

    /// Human label for a value. Ordinal values use the table label; anything
    /// else is shown as disclosed.
    pub fn value_label(self, value: &str) -> String {
        self.ordinal_levels()
            .and_then(|levels| levels.iter().find(|level| level.value == value))
            .map(|level| level.label.to_string())
            .unwrap_or_else(|| value.to_string())
    }

    /// Every unordered pair of registry keys, in registry order.
    pub fn all_pairs() -> Vec<(AttributeKey, AttributeKey)> {
        let mut pairs = Vec::new();
        for (i, &row) in Self::ALL.iter().enumerate() {
            for &column in &Self::ALL[i + 1..] {
                pairs.push((row, column));
            }
        }
        pairs
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeKey {
    type Err = AgoraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| AgoraError::InvalidAttributeKey { key: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_indexed_by_discriminant() {
        for key in AttributeKey::ALL {
            assert_eq!(key.spec().key, key);
        }
    }

    #[test]
    fn political_stance_runs_left_to_right() {
        let key = AttributeKey::PoliticalStance;
        assert_eq!(key.ordinal_index("left"), Some(0));
        assert_eq!(key.ordinal_index("center"), Some(2));
        assert_eq!(key.ordinal_index("right"), Some(4));
        assert_eq!(key.ordinal_index("far_right"), None);
    }

    #[test]
    fn nominal_keys_have_no_ordinal_index() {
        assert_eq!(AttributeKey::Gender.ordinal_index("male"), None);
        assert!(!AttributeKey::Occupation.is_ordinal());
    }

    #[test]
    fn fifteen_unordered_pairs() {
        let pairs = AttributeKey::all_pairs();
        assert_eq!(pairs.len(), 15);
        assert!(pairs.iter().all(|(a, b)| a < b));
    }
}
