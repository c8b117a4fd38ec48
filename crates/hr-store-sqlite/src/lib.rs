//! SQLite backend for the HR records service.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. The analytical SQL of the query
//! catalog lives in [`catalog`]; dialect functions SQLite lacks are
//! registered on every connection by [`functions`].

mod encode;
mod schema;
mod seed;
mod store;

pub mod catalog;
pub mod error;
pub mod functions;

pub use error::{Error, Result};
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
