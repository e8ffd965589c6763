//! Voting behavior for persisted entities.
//!
//! Any record that embeds a [`VoteState`] becomes votable. The state keeps
//! two disjoint membership sets (who currently holds a positive or a
//! negative vote) and two append-only audit logs of vote events.
//!
//! Mutation and persistence are separate steps: [`VoteState`] operations are
//! pure in-memory transitions, and the caller decides when to write the
//! owning entity through [`Votable::save`] or a [`VoteEngine`].

pub mod engine;
pub mod error;
pub mod state;
pub mod status;
pub mod votable;

pub use engine::{VoteAction, VoteEngine, VoteTransition};
pub use error::VotingError;
pub use state::{VoteEvent, VoteState};
pub use status::{VoteDirection, VoterStatus};
pub use votable::Votable;
