//! The `Votable` trait: an entity that embeds vote state.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tally_store::EntityStore;
use tally_types::EntityId;

use crate::error::VotingError;
use crate::state::VoteState;

/// A persisted record that carries a [`VoteState`].
///
/// Implementors expose their identity and their embedded state; saving and
/// loading come for free through `bincode` and any [`EntityStore`].
///
/// ```ignore
/// #[derive(Serialize, Deserialize)]
/// struct Post {
///     id: EntityId,
///     title: String,
///     votes: VoteState,
/// }
///
/// impl Votable for Post {
///     fn entity_id(&self) -> &EntityId { &self.id }
///     fn votes(&self) -> &VoteState { &self.votes }
///     fn votes_mut(&mut self) -> &mut VoteState { &mut self.votes }
/// }
///
/// post.votes_mut().upvote(&user);
/// post.save(&store)?;
/// ```
pub trait Votable: Serialize + DeserializeOwned {
    fn entity_id(&self) -> &EntityId;

    fn votes(&self) -> &VoteState;

    fn votes_mut(&mut self) -> &mut VoteState;

    /// Write the whole entity to `store`, replacing any previous record.
    ///
    /// The store is called exactly once and its error is returned as is.
    fn save<S: EntityStore + ?Sized>(&self, store: &S) -> Result<(), VotingError> {
        let bytes =
            bincode::serialize(self).map_err(|e| VotingError::Serialization(e.to_string()))?;
        store.put_entity(self.entity_id(), &bytes)?;
        Ok(())
    }

    /// Read an entity back from `store`.
    fn load<S: EntityStore + ?Sized>(store: &S, id: &EntityId) -> Result<Self, VotingError> {
        let bytes = store.get_entity(id)?;
        bincode::deserialize(&bytes).map_err(|e| VotingError::Serialization(e.to_string()))
    }
}
