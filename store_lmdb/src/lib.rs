//! LMDB storage backend for tally.
//!
//! Implements the storage traits from `tally-store` using the `heed` LMDB
//! bindings. Entities and store metadata live in two named databases inside
//! a single environment.

pub mod entity;
pub mod environment;
pub mod error;
pub mod integrity;
pub mod meta;

pub use entity::LmdbEntityStore;
pub use environment::LmdbEnvironment;
pub use error::LmdbError;
pub use integrity::{check_integrity, IntegrityReport};
pub use meta::LmdbMetaStore;
