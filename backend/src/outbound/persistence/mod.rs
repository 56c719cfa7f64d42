//! PostgreSQL persistence adapter.
//!
//! Implements the [`crate::domain::ports::ItemRepository`] port with Diesel
//! over an async bb8 connection pool. The items table re-enforces the
//! normalizer's invariants with CHECK constraints so even a direct write
//! cannot violate them.

mod diesel_item_repository;
mod models;
pub mod pool;
pub mod schema;

pub use diesel_item_repository::DieselItemRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
