//! Domain Layer - Entities and invariants of the inventory graph
//!
//! This layer contains:
//! - Domain entities (Department, Employee, Asset) and read models
//! - Value objects (typed ids, validated text fields)
//! - Partial-update patches and their change sets
//! - Repository traits (interfaces)

pub mod entities;
pub mod patch;
pub mod repository;
pub mod value_objects;
