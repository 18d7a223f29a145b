//! Biblioteca Core Library
//!
//! This crate provides the storage layer for Biblioteca, a personal
//! book tracker that keeps its collection in a single local SQLite file.
//!
//! # Quick Start
//!
//! ```text
//! let library = Library::open("biblioteca.db")?;
//!
//! // Add a book
//! let id = library.add("Dune", "Frank Herbert", Some("Sci-Fi"), ReadStatus::Unread)?;
//!
//! // Query books
//! let books = library.list_all()?;
//! ```
//!
//! # Modules
//!
//! - `store`: The `Library` handle with all CRUD operations (main entry point)
//! - `models`: The `Book` record and its `ReadStatus`
//! - `storage`: SQLite schema and storage errors
//! - `config`: Application configuration

pub mod config;
pub mod models;
pub mod storage;
pub mod store;

pub use config::Config;
pub use models::{Book, InvalidStatus, ReadStatus};
pub use storage::{StorageError, StorageResult};
pub use store::Library;
