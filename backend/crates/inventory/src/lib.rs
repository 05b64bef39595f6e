//! Inventory Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, patches, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers and routing
//!
//! ## Entity graph
//! - Department names, employee emails and asset serial numbers are unique
//! - Deleting a department deletes its employees
//! - Deleting an employee leaves their assets unassigned

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use domain::repository::InventoryRepository;
pub use error::{InventoryError, InventoryResult};
pub use infra::postgres::PgInventoryRepository;
pub use presentation::{inventory_router, inventory_router_generic};
