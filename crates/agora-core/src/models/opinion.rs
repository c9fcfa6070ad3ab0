use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::attributes::AttributeSnapshot;

/// Anything carrying a 0-100 score and the attribute snapshot it was given under.
///
/// Implemented by live reactions and by externally-sourced issue opinions so
/// the analytics components can treat both alike.
pub trait Scored {
    fn score(&self) -> u8;
    fn attributes(&self) -> &AttributeSnapshot;
}

/// A single user's reaction to a post. At most one live reaction exists per
/// `(user_id, post_id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    pub id: String,
    pub post_id: String,
    pub user_id: String,
    pub score: u8,
    pub attribute_snapshot: AttributeSnapshot,
    pub created_at: DateTime<Utc>,
}

/// An opinion record attached to an issue from an outside source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpinionRecord {
    pub score: u8,
    pub attribute_snapshot: AttributeSnapshot,
}

impl Scored for Reaction {
    fn score(&self) -> u8 {
        self.score
    }

    fn attributes(&self) -> &AttributeSnapshot {
        &self.attribute_snapshot
    }
}

impl Scored for OpinionRecord {
    fn score(&self) -> u8 {
        self.score
    }

    fn attributes(&self) -> &AttributeSnapshot {
        &self.attribute_snapshot
    }
}

impl From<Reaction> for OpinionRecord {
    fn from(reaction: Reaction) -> Self {
        Self {
            score: reaction.score,
            attribute_snapshot: reaction.attribute_snapshot,
        }
    }
}

impl<T: Scored + ?Sized> Scored for &T {
    fn score(&self) -> u8 {
        (**self).score()
    }

    fn attributes(&self) -> &AttributeSnapshot {
        (**self).attributes()
    }
}
