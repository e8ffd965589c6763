//! Abstract storage traits for tally.
//!
//! Every storage backend (LMDB, in-memory for testing) implements these
//! traits. The voting crate depends only on the traits.

pub mod entity;
pub mod error;
pub mod meta;

pub use entity::EntityStore;
pub use error::StoreError;
pub use meta::MetaStore;
