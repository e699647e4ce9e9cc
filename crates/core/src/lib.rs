//! Domain building blocks shared by the storage and HTTP layers.
//!
//! Nothing in here performs I/O.

pub mod error;
pub mod greeting;
pub mod pagination;
pub mod types;
