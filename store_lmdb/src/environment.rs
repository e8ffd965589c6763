//! LMDB environment setup.

use std::path::Path;
use std::sync::Arc;

use heed::types::Bytes;
use heed::{Database, Env, EnvOpenOptions};

use crate::entity::LmdbEntityStore;
use crate::meta::{LmdbMetaStore, VOTER_REF_KEY};
use crate::LmdbError;

pub(crate) const ENTITIES_DB: &str = "entities";
pub(crate) const META_DB: &str = "meta";
const MAX_DBS: u32 = 2;

/// Wraps the LMDB environment and all database handles.
pub struct LmdbEnvironment {
    env: Arc<Env>,
    entities_db: Database<Bytes, Bytes>,
    meta_db: Database<Bytes, Bytes>,
}

impl LmdbEnvironment {
    /// Open or create an LMDB environment at the given directory.
    ///
    /// `voter_ref` names the collection voter ids point at. A fresh
    /// environment records it; reopening with a different name fails, since
    /// every stored voter id would then resolve against the wrong records.
    pub fn open(path: &Path, map_size: usize, voter_ref: &str) -> Result<Self, LmdbError> {
        std::fs::create_dir_all(path)?;

        // SAFETY: the environment is opened once per directory by this
        // process and the map is never accessed outside heed's API.
        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(map_size)
                .max_dbs(MAX_DBS)
                .open(path)?
        };

        let mut wtxn = env.write_txn()?;
        let entities_db: Database<Bytes, Bytes> =
            env.create_database(&mut wtxn, Some(ENTITIES_DB))?;
        let meta_db: Database<Bytes, Bytes> = env.create_database(&mut wtxn, Some(META_DB))?;

        let stored = meta_db.get(&wtxn, VOTER_REF_KEY.as_bytes())?.map(|b| b.to_vec());
        match stored {
            Some(stored) if stored != voter_ref.as_bytes() => {
                return Err(LmdbError::VoterRefMismatch {
                    stored: String::from_utf8_lossy(&stored).into_owned(),
                    requested: voter_ref.to_string(),
                });
            }
            Some(_) => {}
            None => meta_db.put(&mut wtxn, VOTER_REF_KEY.as_bytes(), voter_ref.as_bytes())?,
        }
        wtxn.commit()?;

        tracing::info!(path = %path.display(), map_size, voter_ref, "opened LMDB environment");

        Ok(Self {
            env: Arc::new(env),
            entities_db,
            meta_db,
        })
    }

    pub fn env(&self) -> &Arc<Env> {
        &self.env
    }

    /// Entity store backed by this environment.
    pub fn entity_store(&self) -> LmdbEntityStore {
        LmdbEntityStore {
            env: Arc::clone(&self.env),
            entities_db: self.entities_db,
        }
    }

    /// Metadata store backed by this environment.
    pub fn meta_store(&self) -> LmdbMetaStore {
        LmdbMetaStore {
            env: Arc::clone(&self.env),
            meta_db: self.meta_db,
        }
    }
}
