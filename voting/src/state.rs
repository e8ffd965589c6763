//! Vote state embedded in a votable entity.
//!
//! Membership and history are independent. The membership sets
//! answer "who holds a vote right now" and are kept disjoint. The history
//! logs are an audit trail: every upvote and downvote appends an event, and
//! nothing ever removes one, including unvotes and switches of direction.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tally_types::{Timestamp, Voter, VoterId};

use crate::status::{VoteDirection, VoterStatus};

/// One entry of a vote audit log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteEvent {
    pub voter: VoterId,
    pub timestamp: Timestamp,
}

/// Positive and negative voters of one entity, plus their vote history.
///
/// Invariant: no voter is in both `positive` and `negative`. Deserializing a
/// record that breaks it fails instead of producing an inconsistent state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VoteStateRecord")]
pub struct VoteState {
    positive: BTreeSet<VoterId>,
    negative: BTreeSet<VoterId>,
    positive_history: Vec<VoteEvent>,
    negative_history: Vec<VoteEvent>,
}

impl VoteState {
    /// An empty state: no voters, no history.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Transitions ─────────────────────────────────────────────────────

    /// Record a positive vote stamped with the current time.
    ///
    /// Returns the voter's status before the call.
    pub fn upvote(&mut self, voter: impl Voter) -> VoterStatus {
        self.upvote_at(voter, Timestamp::now())
    }

    /// Record a positive vote at `now`.
    ///
    /// Any negative vote by the same voter is withdrawn first. The audit
    /// event is appended even when the voter already held a positive vote.
    pub fn upvote_at(&mut self, voter: impl Voter, now: Timestamp) -> VoterStatus {
        self.cast(voter.voter_id(), VoteDirection::Positive, now)
    }

    /// Record a negative vote stamped with the current time.
    pub fn downvote(&mut self, voter: impl Voter) -> VoterStatus {
        self.downvote_at(voter, Timestamp::now())
    }

    /// Record a negative vote at `now`. Mirror of [`VoteState::upvote_at`].
    pub fn downvote_at(&mut self, voter: impl Voter, now: Timestamp) -> VoterStatus {
        self.cast(voter.voter_id(), VoteDirection::Negative, now)
    }

    /// Withdraw whatever vote the voter holds. History is left untouched.
    pub fn unvote(&mut self, voter: impl Voter) -> VoterStatus {
        let voter = voter.voter_id();
        let previous = self.status_of(&voter);
        self.positive.remove(&voter);
        self.negative.remove(&voter);
        previous
    }

    fn cast(&mut self, voter: VoterId, direction: VoteDirection, now: Timestamp) -> VoterStatus {
        let previous = self.status_of(&voter);
        let (held, opposing, history) = match direction {
            VoteDirection::Positive => (
                &mut self.positive,
                &mut self.negative,
                &mut self.positive_history,
            ),
            VoteDirection::Negative => (
                &mut self.negative,
                &mut self.positive,
                &mut self.negative_history,
            ),
        };
        opposing.remove(&voter);
        history.push(VoteEvent {
            voter: voter.clone(),
            timestamp: now,
        });
        held.insert(voter);
        previous
    }

    // ── Queries ─────────────────────────────────────────────────────────

    /// Current status of a voter on this entity.
    pub fn status(&self, voter: impl Voter) -> VoterStatus {
        self.status_of(&voter.voter_id())
    }

    fn status_of(&self, voter: &VoterId) -> VoterStatus {
        if self.positive.contains(voter) {
            VoterStatus::Positive
        } else if self.negative.contains(voter) {
            VoterStatus::Negative
        } else {
            VoterStatus::Unvoted
        }
    }

    pub fn upvoted(&self, voter: impl Voter) -> bool {
        self.positive.contains(&voter.voter_id())
    }

    pub fn downvoted(&self, voter: impl Voter) -> bool {
        self.negative.contains(&voter.voter_id())
    }

    /// Whether the voter holds a vote in either direction.
    pub fn voted(&self, voter: impl Voter) -> bool {
        self.status(voter).has_voted()
    }

    pub fn upvote_count(&self) -> usize {
        self.positive.len()
    }

    pub fn downvote_count(&self) -> usize {
        self.negative.len()
    }

    /// Sum of current positive and negative votes.
    ///
    /// Since the sets are disjoint this is also the number of distinct voters
    /// currently holding a vote. History entries do not count.
    pub fn total_vote_count(&self) -> usize {
        self.upvote_count() + self.downvote_count()
    }

    /// Upvotes minus downvotes.
    pub fn score(&self) -> i64 {
        self.upvote_count() as i64 - self.downvote_count() as i64
    }

    /// Voters currently holding a positive vote, in id order.
    pub fn upvoters(&self) -> impl Iterator<Item = &VoterId> {
        self.positive.iter()
    }

    /// Voters currently holding a negative vote, in id order.
    pub fn downvoters(&self) -> impl Iterator<Item = &VoterId> {
        self.negative.iter()
    }

    /// The audit log for one direction, oldest first.
    pub fn history(&self, direction: VoteDirection) -> &[VoteEvent] {
        match direction {
            VoteDirection::Positive => &self.positive_history,
            VoteDirection::Negative => &self.negative_history,
        }
    }
}

/// Wire shape of [`VoteState`], checked before it becomes one.
#[derive(Deserialize)]
struct VoteStateRecord {
    positive: BTreeSet<VoterId>,
    negative: BTreeSet<VoterId>,
    positive_history: Vec<VoteEvent>,
    negative_history: Vec<VoteEvent>,
}

impl TryFrom<VoteStateRecord> for VoteState {
    type Error = String;

    fn try_from(record: VoteStateRecord) -> Result<Self, Self::Error> {
        if let Some(voter) = record.positive.intersection(&record.negative).next() {
            return Err(format!(
                "voter {} holds both a positive and a negative vote",
                voter
            ));
        }
        Ok(Self {
            positive: record.positive,
            negative: record.negative,
            positive_history: record.positive_history,
            negative_history: record.negative_history,
        })
    }
}
