//! Core types and trait definitions for the HR records service.
//!
//! This crate is deliberately free of HTTP and database dependencies. It
//! owns the entity shapes, the catalog of analytical queries, the projection
//! of raw query rows into typed report records, and the [`store::HrStore`]
//! abstraction every backend implements.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod catalog;
pub mod entity;
pub mod error;
pub mod lines;
pub mod records;
pub mod report;
pub mod store;

pub use error::{Error, Result};
