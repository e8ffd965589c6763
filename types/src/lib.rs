//! Fundamental types for tally.
//!
//! This crate defines the identity and time types shared across every other
//! crate in the workspace: voter and entity references, the [`Voter`]
//! resolver trait, and timestamps.

pub mod entity;
pub mod time;
pub mod voter;

pub use entity::EntityId;
pub use time::Timestamp;
pub use voter::{Voter, VoterId};
