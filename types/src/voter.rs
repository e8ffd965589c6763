//! Voter references and the resolver that produces them.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Canonical reference to a user or actor who can cast a vote.
///
/// Only the id is stored; the record it points at lives elsewhere (see
/// `VotingConfig::voter_ref` in `tally-utils` for the collection name).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VoterId(String);

impl VoterId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VoterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VoterId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for VoterId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Borrow<str> for VoterId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Anything that can stand in for a voter: a raw id, a string, or a richer
/// user record that carries one.
///
/// Vote operations resolve their input through this trait once, then work
/// on the canonical [`VoterId`] only.
pub trait Voter {
    fn voter_id(&self) -> VoterId;
}

impl Voter for VoterId {
    fn voter_id(&self) -> VoterId {
        self.clone()
    }
}

impl Voter for str {
    fn voter_id(&self) -> VoterId {
        VoterId::new(self)
    }
}

impl Voter for String {
    fn voter_id(&self) -> VoterId {
        VoterId::new(self.as_str())
    }
}

impl<T: Voter + ?Sized> Voter for &T {
    fn voter_id(&self) -> VoterId {
        (**self).voter_id()
    }
}
