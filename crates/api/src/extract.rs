//! Request extractors.
//!
//! The input extractors wrap axum's own and reject with [`AppError`], so a
//! malformed body, query string or path segment produces a 422 with the
//! standard `{"detail": ...}` body instead of axum's plain-text rejection.

use std::ops::{Deref, DerefMut};

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use itemstore_db::Session;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;

/// JSON body that is deserialized and then checked with [`Validate`].
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Query string extractor rejecting with [`AppError`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct ValidQuery<T>(pub T);

/// Path parameter extractor rejecting with [`AppError`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct ValidPath<T>(pub T);

/// A database [`Session`] scoped to one request.
///
/// The transaction begins when the handler's arguments are extracted.
/// Handlers that write call [`DbSession::commit`]; on every other exit
/// path the session is dropped, which rolls back and returns the
/// connection to the pool.
pub struct DbSession(Session);

impl DbSession {
    pub async fn commit(self) -> Result<(), sqlx::Error> {
        self.0.commit().await
    }
}

impl FromRequestParts<AppState> for DbSession {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::begin(&state.pool).await?;
        Ok(Self(session))
    }
}

impl Deref for DbSession {
    type Target = Session;

    fn deref(&self) -> &Session {
        &self.0
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut Session {
        &mut self.0
    }
}
