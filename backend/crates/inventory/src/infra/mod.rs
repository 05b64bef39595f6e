//! Infrastructure Layer
//!
//! Database implementations.

#[cfg(any(test, feature = "testing"))]
pub mod memory;
pub mod postgres;

pub use postgres::PgInventoryRepository;
