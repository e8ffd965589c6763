//! Nullable store: thread-safe in-memory storage for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use tally_store::{EntityStore, MetaStore, StoreError};
use tally_types::EntityId;

/// An in-memory entity + meta store for testing.
///
/// Writes can be made to fail on demand with [`NullEntityStore::fail_writes`],
/// and every write attempt is counted, successful or not.
pub struct NullEntityStore {
    entities: Mutex<HashMap<EntityId, Vec<u8>>>,
    meta: Mutex<HashMap<String, Vec<u8>>>,
    fail_writes: AtomicBool,
    write_attempts: AtomicU64,
}

impl NullEntityStore {
    pub fn new() -> Self {
        Self {
            entities: Mutex::new(HashMap::new()),
            meta: Mutex::new(HashMap::new()),
            fail_writes: AtomicBool::new(false),
            write_attempts: AtomicU64::new(0),
        }
    }

    /// Make every subsequent `put_entity` fail with a backend error.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of `put_entity` calls so far, including failed ones.
    pub fn write_attempts(&self) -> u64 {
        self.write_attempts.load(Ordering::SeqCst)
    }
}

impl Default for NullEntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore for NullEntityStore {
    fn put_entity(&self, id: &EntityId, data: &[u8]) -> Result<(), StoreError> {
        self.write_attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Backend(format!(
                "injected write failure for {}",
                id
            )));
        }
        self.entities
            .lock()
            .unwrap()
            .insert(id.clone(), data.to_vec());
        Ok(())
    }

    fn get_entity(&self, id: &EntityId) -> Result<Vec<u8>, StoreError> {
        self.entities
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn exists(&self, id: &EntityId) -> Result<bool, StoreError> {
        Ok(self.entities.lock().unwrap().contains_key(id))
    }

    fn delete_entity(&self, id: &EntityId) -> Result<(), StoreError> {
        self.entities.lock().unwrap().remove(id);
        Ok(())
    }

    fn entity_count(&self) -> Result<u64, StoreError> {
        Ok(self.entities.lock().unwrap().len() as u64)
    }
}

impl MetaStore for NullEntityStore {
    fn put_meta(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.meta
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn get_meta(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.meta.lock().unwrap().get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_get_delete() {
        let store = NullEntityStore::new();
        let id = EntityId::new("doc-1");

        store.put_entity(&id, b"abc").unwrap();
        assert!(store.exists(&id).unwrap());
        assert_eq!(store.get_entity(&id).unwrap(), b"abc".to_vec());
        assert_eq!(store.entity_count().unwrap(), 1);

        store.delete_entity(&id).unwrap();
        assert!(matches!(store.get_entity(&id), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn injected_failures_are_counted_and_leave_data_alone() {
        let store = NullEntityStore::new();
        let id = EntityId::new("doc-1");
        store.put_entity(&id, b"v1").unwrap();

        store.fail_writes(true);
        assert!(matches!(
            store.put_entity(&id, b"v2"),
            Err(StoreError::Backend(_))
        ));
        assert_eq!(store.write_attempts(), 2);
        assert_eq!(store.get_entity(&id).unwrap(), b"v1".to_vec());
    }

    #[test]
    fn meta_missing_key_is_none() {
        let store = NullEntityStore::new();
        assert_eq!(store.get_meta("voter_ref").unwrap(), None);
        store.put_meta("voter_ref", b"User").unwrap();
        assert_eq!(store.get_meta("voter_ref").unwrap(), Some(b"User".to_vec()));
    }
}
