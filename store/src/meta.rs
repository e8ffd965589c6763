//! Metadata storage trait.

use crate::StoreError;

/// Key/value metadata about the store itself (schema version, voter model).
pub trait MetaStore {
    fn put_meta(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Fetch a metadata value, `None` if it was never written.
    fn get_meta(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
}
