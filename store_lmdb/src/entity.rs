//! LMDB implementation of EntityStore.

use std::sync::Arc;

use heed::types::Bytes;
use heed::{Database, Env};

use tally_store::{EntityStore, StoreError};
use tally_types::EntityId;

use crate::LmdbError;

/// Entity records keyed by the UTF-8 bytes of their id.
#[derive(Clone)]
pub struct LmdbEntityStore {
    pub(crate) env: Arc<Env>,
    pub(crate) entities_db: Database<Bytes, Bytes>,
}

impl EntityStore for LmdbEntityStore {
    fn put_entity(&self, id: &EntityId, data: &[u8]) -> Result<(), StoreError> {
        let mut wtxn = self.env.write_txn().map_err(LmdbError::from)?;
        self.entities_db
            .put(&mut wtxn, id.as_bytes(), data)
            .map_err(LmdbError::from)?;
        wtxn.commit().map_err(LmdbError::from)?;
        Ok(())
    }

    fn get_entity(&self, id: &EntityId) -> Result<Vec<u8>, StoreError> {
        let rtxn = self.env.read_txn().map_err(LmdbError::from)?;
        let val = self
            .entities_db
            .get(&rtxn, id.as_bytes())
            .map_err(LmdbError::from)?
            .ok_or_else(|| LmdbError::NotFound(format!("entity '{}'", id)))?;
        Ok(val.to_vec())
    }

    fn exists(&self, id: &EntityId) -> Result<bool, StoreError> {
        let rtxn = self.env.read_txn().map_err(LmdbError::from)?;
        let found = self
            .entities_db
            .get(&rtxn, id.as_bytes())
            .map_err(LmdbError::from)?
            .is_some();
        Ok(found)
    }

    fn delete_entity(&self, id: &EntityId) -> Result<(), StoreError> {
        let mut wtxn = self.env.write_txn().map_err(LmdbError::from)?;
        self.entities_db
            .delete(&mut wtxn, id.as_bytes())
            .map_err(LmdbError::from)?;
        wtxn.commit().map_err(LmdbError::from)?;
        Ok(())
    }

    fn entity_count(&self) -> Result<u64, StoreError> {
        let rtxn = self.env.read_txn().map_err(LmdbError::from)?;
        let count = self.entities_db.len(&rtxn).map_err(LmdbError::from)?;
        Ok(count)
    }
}
