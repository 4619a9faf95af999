//! Core types and trait definitions for the wall message board.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Storage backends implement [`store::WallStore`]; application code talks to
//! the [`directory::Walls`] facade.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod directory;
pub mod error;
pub mod message;
pub mod participant;
pub mod store;
pub mod wall;

pub use directory::Walls;
pub use error::{Error, Result, ValidationKind};
