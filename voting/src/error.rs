use tally_store::StoreError;
use thiserror::Error;

/// Errors surfaced by voting operations.
///
/// Vote transitions themselves never fail; everything here comes from
/// persisting or loading the owning entity.
#[derive(Debug, Error)]
pub enum VotingError {
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error("serialization error: {0}")]
    Serialization(String),
}
