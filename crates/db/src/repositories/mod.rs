//! Repository layer.
//!
//! Each repository is a zero-sized struct with async associated functions
//! that run against the caller's [`Session`](crate::Session) connection.

pub mod item_repo;

pub use item_repo::ItemRepo;
