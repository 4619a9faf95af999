//! SQLite backend for the wall store.
//!
//! Each wall is one row holding its roster and messages as a JSON document.
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
