//! LMDB implementation of MetaStore.

use std::sync::Arc;

use heed::types::Bytes;
use heed::{Database, Env};

use tally_store::{MetaStore, StoreError};

use crate::LmdbError;

pub(crate) const VOTER_REF_KEY: &str = "voter_ref";

#[derive(Clone)]
pub struct LmdbMetaStore {
    pub(crate) env: Arc<Env>,
    pub(crate) meta_db: Database<Bytes, Bytes>,
}

impl LmdbMetaStore {
    /// The voter model name this environment was created for.
    pub fn voter_ref(&self) -> Result<Option<String>, StoreError> {
        let value = self.get_meta(VOTER_REF_KEY)?;
        Ok(value.map(|b| String::from_utf8_lossy(&b).into_owned()))
    }
}

impl MetaStore for LmdbMetaStore {
    fn put_meta(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let mut wtxn = self.env.write_txn().map_err(LmdbError::from)?;
        self.meta_db
            .put(&mut wtxn, key.as_bytes(), value)
            .map_err(LmdbError::from)?;
        wtxn.commit().map_err(LmdbError::from)?;
        Ok(())
    }

    fn get_meta(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let rtxn = self.env.read_txn().map_err(LmdbError::from)?;
        let val = self
            .meta_db
            .get(&rtxn, key.as_bytes())
            .map_err(LmdbError::from)?;
        Ok(val.map(|b| b.to_vec()))
    }
}
