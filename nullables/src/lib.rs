//! Nullable infrastructure for deterministic testing.
//!
//! External dependencies (clock, storage) are abstracted behind traits or
//! small types. This crate provides test-friendly implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically, including forced failures
//! - Never touch the filesystem
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod store;

pub use clock::NullClock;
pub use store::NullEntityStore;
