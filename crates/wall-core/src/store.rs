//! The `WallStore` trait — the document store walls are persisted in.
//!
//! The trait is implemented by storage backends (e.g. `wall-store-sqlite`).
//! [`Walls`](crate::directory::Walls) depends on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::wall::{NewWall, Wall};

/// Identifier-keyed CRUD over whole wall documents.
///
/// Writes replace the full document; there are no field-level updates and no
/// revision check, so concurrent saves of the same wall are last-writer-wins.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait WallStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Retrieve a wall by UUID. Returns `None` if not found.
  fn find_by_id(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Wall>, Self::Error>> + Send + '_;

  /// Validate and persist a new wall. `wall_id`, `created_at` and
  /// `updated_at` are assigned by the store.
  fn create(
    &self,
    input: NewWall,
  ) -> impl Future<Output = Result<Wall, Self::Error>> + Send + '_;

  /// Validate and overwrite an existing wall, returning it with a fresh
  /// `updated_at`. Fails if the wall no longer exists.
  fn save<'a>(
    &'a self,
    wall: &'a Wall,
  ) -> impl Future<Output = Result<Wall, Self::Error>> + Send + 'a;

  /// Delete a wall. Deleting an id that does not exist is not an error.
  fn remove(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
