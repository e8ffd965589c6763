//! Entity storage trait.

use crate::StoreError;
use tally_types::EntityId;

/// Trait for persisting votable entities as opaque serialized records.
///
/// Writes are last-writer-wins: `put_entity` replaces whatever was stored
/// under the id. Callers needing compare-and-swap must build it on top.
pub trait EntityStore {
    /// Store (insert or overwrite) an entity record.
    fn put_entity(&self, id: &EntityId, data: &[u8]) -> Result<(), StoreError>;

    /// Get an entity record by id.
    fn get_entity(&self, id: &EntityId) -> Result<Vec<u8>, StoreError>;

    /// Whether a record exists under `id`.
    fn exists(&self, id: &EntityId) -> Result<bool, StoreError>;

    /// Delete an entity record. Deleting a missing id is not an error.
    fn delete_entity(&self, id: &EntityId) -> Result<(), StoreError>;

    /// Number of stored entities.
    fn entity_count(&self) -> Result<u64, StoreError>;
}
