//! Per-voter vote status and vote directions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which way a vote points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteDirection {
    Positive,
    Negative,
}

impl VoteDirection {
    /// The other direction.
    pub fn opposite(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

/// Where a single voter stands on a single entity.
///
/// Every transition is available from every status: upvote leads to
/// `Positive`, downvote to `Negative`, unvote to `Unvoted`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoterStatus {
    #[default]
    Unvoted,
    Positive,
    Negative,
}

impl VoterStatus {
    pub fn has_voted(self) -> bool {
        !matches!(self, Self::Unvoted)
    }

    /// The direction of the held vote, if any.
    pub fn direction(self) -> Option<VoteDirection> {
        match self {
            Self::Unvoted => None,
            Self::Positive => Some(VoteDirection::Positive),
            Self::Negative => Some(VoteDirection::Negative),
        }
    }
}

impl From<VoteDirection> for VoterStatus {
    fn from(direction: VoteDirection) -> Self {
        match direction {
            VoteDirection::Positive => Self::Positive,
            VoteDirection::Negative => Self::Negative,
        }
    }
}

impl fmt::Display for VoterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Unvoted => "unvoted",
            Self::Positive => "positive",
            Self::Negative => "negative",
        };
        f.write_str(s)
    }
}
