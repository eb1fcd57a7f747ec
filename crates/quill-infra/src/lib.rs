//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`, backed by
//! a single SQLite file through SeaORM.

pub mod database;

pub use database::{Database, DatabaseConfig};
pub use database::{SqliteCommentRepository, SqlitePostRepository, SqliteUserRepository};
