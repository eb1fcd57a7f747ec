//! # Quill Core
//!
//! The domain layer of the Quill blogging backend.
//! This crate contains the entity records, their shaped views, and the
//! repository ports, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;
