//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Wall(#[from] wall_core::Error),

  /// The request body was not valid JSON for the endpoint.
  #[error("{}", .0.body_text())]
  Body(#[from] JsonRejection),
}

impl ApiError {
  fn status(&self) -> StatusCode {
    use wall_core::Error as E;
    match self {
      ApiError::Body(rejection) => rejection.status(),
      ApiError::Wall(e) => match e {
        E::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        E::WallNotFound(_) | E::IndexOutOfRange { .. } => StatusCode::NOT_FOUND,
        E::Unauthorized { .. } => StatusCode::FORBIDDEN,
        E::LastAdmin => StatusCode::CONFLICT,
        E::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
      },
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      tracing::error!(error = %self, "request failed");
    }
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}
