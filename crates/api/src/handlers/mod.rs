//! Request handlers.
//!
//! Each handler takes a [`DbSession`](crate::extract::DbSession), performs
//! exactly one repository operation from `itemstore_db`, and maps errors
//! via [`AppError`](crate::error::AppError).

pub mod item;
