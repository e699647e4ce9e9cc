//! Per-request database sessions.
//!
//! A [`Session`] is a transaction on one pooled connection. Committing
//! consumes it; dropping it without committing rolls back and hands the
//! connection back to the pool, so every exit path releases it.

use std::ops::{Deref, DerefMut};

use sqlx::AnyConnection;
use sqlx::{Any, Transaction};

use crate::DbPool;

pub struct Session {
    tx: Transaction<'static, Any>,
}

impl Session {
    /// Acquire a connection from `pool` and open a transaction on it.
    pub async fn begin(pool: &DbPool) -> Result<Self, sqlx::Error> {
        let tx = pool.begin().await?;
        Ok(Self { tx })
    }

    /// Make the session's writes durable and release the connection.
    pub async fn commit(self) -> Result<(), sqlx::Error> {
        self.tx.commit().await
    }

    /// Discard the session's writes and release the connection.
    pub async fn rollback(self) -> Result<(), sqlx::Error> {
        self.tx.rollback().await
    }
}

impl Deref for Session {
    type Target = AnyConnection;

    fn deref(&self) -> &AnyConnection {
        &self.tx
    }
}

impl DerefMut for Session {
    fn deref_mut(&mut self) -> &mut AnyConnection {
        &mut self.tx
    }
}
