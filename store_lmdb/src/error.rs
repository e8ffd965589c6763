use thiserror::Error;

#[derive(Debug, Error)]
pub enum LmdbError {
    #[error("LMDB error: {0}")]
    Heed(#[from] heed::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("key not found: {0}")]
    NotFound(String),

    #[error("environment was created for voter model '{stored}', not '{requested}'")]
    VoterRefMismatch { stored: String, requested: String },
}

impl From<LmdbError> for tally_store::StoreError {
    fn from(e: LmdbError) -> Self {
        match e {
            LmdbError::NotFound(key) => tally_store::StoreError::NotFound(key),
            other => tally_store::StoreError::Backend(other.to_string()),
        }
    }
}
