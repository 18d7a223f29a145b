//! Storage layer
//!
//! Schema definition and typed errors for the SQLite book store.
//! The `Library` handle in `store` is built on top of these.

pub mod error;
pub mod schema;

pub use error::{StorageError, StorageResult};
pub use schema::init_schema;
