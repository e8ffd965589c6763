//! Vote engine: applies a vote action to an entity, then persists it.
//!
//! This is the "mutate, then save" contract packaged as a single call.
//! Callers who want to batch several mutations before one write can use
//! [`VoteState`](crate::VoteState) and [`Votable::save`] directly instead.

use serde::{Deserialize, Serialize};
use tally_store::EntityStore;
use tally_types::{EntityId, Timestamp, Voter, VoterId};

use crate::error::VotingError;
use crate::status::VoterStatus;
use crate::votable::Votable;

/// What a voter wants to do to an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteAction {
    Upvote,
    Downvote,
    Unvote,
}

/// Outcome of one applied action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoteTransition {
    pub voter: VoterId,
    pub from: VoterStatus,
    pub to: VoterStatus,
}

impl VoteTransition {
    /// Whether the voter's membership actually changed.
    ///
    /// A repeated upvote is not a change, although it still adds an audit
    /// event.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Applies vote actions to entities and writes them to a store.
pub struct VoteEngine<S> {
    store: S,
}

impl<S: EntityStore> VoteEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply `action` for `voter` at the current time, then save `entity`.
    pub fn apply<E: Votable>(
        &self,
        entity: &mut E,
        voter: impl Voter,
        action: VoteAction,
    ) -> Result<VoteTransition, VotingError> {
        self.apply_at(entity, voter, action, Timestamp::now())
    }

    /// Apply `action` for `voter` at `now`, then save `entity`.
    ///
    /// The in-memory mutation happens before the write and is not rolled
    /// back if the write fails; the store error is returned unchanged.
    pub fn apply_at<E: Votable>(
        &self,
        entity: &mut E,
        voter: impl Voter,
        action: VoteAction,
        now: Timestamp,
    ) -> Result<VoteTransition, VotingError> {
        let voter = voter.voter_id();
        let votes = entity.votes_mut();
        let from = match action {
            VoteAction::Upvote => votes.upvote_at(&voter, now),
            VoteAction::Downvote => votes.downvote_at(&voter, now),
            VoteAction::Unvote => votes.unvote(&voter),
        };
        let to = votes.status(&voter);

        tracing::debug!(
            entity = %entity.entity_id(),
            voter = %voter,
            ?action,
            %from,
            %to,
            "vote applied"
        );

        if let Err(e) = entity.save(&self.store) {
            tracing::warn!(
                entity = %entity.entity_id(),
                voter = %voter,
                error = %e,
                "failed to persist entity after vote; in-memory state keeps the change"
            );
            return Err(e);
        }

        Ok(VoteTransition { voter, from, to })
    }

    /// Load an entity from the store.
    pub fn load<E: Votable>(&self, id: &EntityId) -> Result<E, VotingError> {
        E::load(&self.store, id)
    }
}
