//! Error types for `wall-core`.

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// Why a field failed the document check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
  /// The field is absent or empty.
  Required,
  /// The value is not one of the enumerated variants.
  Enum,
}

impl fmt::Display for ValidationKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Required => f.write_str("required"),
      Self::Enum => f.write_str("enum"),
    }
  }
}

#[derive(Debug, Error)]
pub enum Error {
  /// `field` is a document path such as `title` or `messages.0.body`.
  #[error("validation failed for `{field}`: {kind}")]
  Validation { field: String, kind: ValidationKind },

  #[error("wall does not exist: {0}")]
  WallNotFound(Uuid),

  #[error("{subject} is not allowed to {action}")]
  Unauthorized { subject: Uuid, action: &'static str },

  #[error("the last admin can not be removed")]
  LastAdmin,

  #[error("message index {index} is out of range (wall has {len} messages)")]
  IndexOutOfRange { index: usize, len: usize },

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub fn required(field: impl Into<String>) -> Self {
    Self::Validation { field: field.into(), kind: ValidationKind::Required }
  }

  pub fn invalid_enum(field: impl Into<String>) -> Self {
    Self::Validation { field: field.into(), kind: ValidationKind::Enum }
  }

  /// Wrap a backend error coming out of a [`WallStore`](crate::store::WallStore).
  pub fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
