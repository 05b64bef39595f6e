//! Presentation Layer - HTTP handlers and routing

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::InventoryAppState;
pub use router::{inventory_router, inventory_router_generic};
