//! JSON REST API for walls.
//!
//! Exposes an axum [`Router`] backed by a [`Walls`] directory over any
//! [`wall_core::store::WallStore`]. Auth, TLS, and transport concerns are the
//! caller's responsibility; actor identifiers are taken from request bodies.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", wall_api::api_router(walls.clone()))
//! ```

pub mod error;
pub mod messages;
pub mod walls;

use axum::{
  Router,
  routing::{delete, get, post},
};
use wall_core::{Error, Walls, store::WallStore};

pub use error::ApiError;

/// Build a fully-materialised API router for `walls`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(walls: Walls<S>) -> Router<()>
where
  S: WallStore + 'static,
  S::Error: Into<Error>,
{
  Router::new()
    // Walls
    .route("/walls", post(walls::create::<S>))
    .route("/walls/{id}", get(walls::get_one::<S>).delete(walls::drop_one::<S>))
    // Roster
    .route("/walls/{id}/participants", post(walls::join::<S>))
    .route("/walls/{id}/participants/{subject}", delete(walls::leave::<S>))
    // Messages
    .route("/walls/{id}/messages", post(messages::create::<S>))
    .route("/walls/{id}/messages/{index}/replies", post(messages::reply::<S>))
    .route("/walls/{id}/messages/{index}/read", post(messages::read::<S>))
    .with_state(walls)
}

/// Unwrap a body field the JSON schema marks as required.
pub(crate) fn required<T>(value: Option<T>, field: &str) -> Result<T, ApiError> {
  value.ok_or_else(|| Error::required(field).into())
}

#[cfg(test)]
mod tests;
