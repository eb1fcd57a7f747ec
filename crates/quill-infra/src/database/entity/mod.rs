//! SeaORM entity definitions for the three tables.

pub mod comment;
pub mod post;
pub mod user;
