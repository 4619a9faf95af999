//! Error type for `wall-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] wall_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// Attempted to save a wall whose row has been deleted.
  #[error("wall not found: {0}")]
  WallNotFound(uuid::Uuid),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Lets [`wall_core::Walls`] surface domain failures raised inside the store
/// (document validation, vanished rows) as their typed core variants.
impl From<Error> for wall_core::Error {
  fn from(err: Error) -> Self {
    match err {
      Error::Core(inner) => inner,
      Error::WallNotFound(id) => wall_core::Error::WallNotFound(id),
      other => wall_core::Error::store(other),
    }
  }
}
