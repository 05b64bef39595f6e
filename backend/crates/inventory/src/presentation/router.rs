//! Inventory Router

use axum::{
    Router,
    routing::get,
};
use std::sync::Arc;

use crate::domain::repository::InventoryRepository;
use crate::infra::postgres::PgInventoryRepository;
use crate::presentation::handlers::{self, InventoryAppState};

/// Create the inventory router with the PostgreSQL repository
pub fn inventory_router(repo: PgInventoryRepository) -> Router {
    inventory_router_generic(repo)
}

/// Create an inventory router for any repository implementation
///
/// Paths are relative; the application nests them under `/api`.
pub fn inventory_router_generic<R>(repo: R) -> Router
where
    R: InventoryRepository,
{
    let state = InventoryAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/departments",
            get(handlers::list_departments::<R>).post(handlers::create_department::<R>),
        )
        .route(
            "/departments/{id}",
            get(handlers::get_department::<R>)
                .put(handlers::update_department::<R>)
                .delete(handlers::delete_department::<R>),
        )
        .route(
            "/departments/{id}/employees",
            get(handlers::list_department_employees::<R>),
        )
        .route(
            "/employees",
            get(handlers::list_employees::<R>).post(handlers::create_employee::<R>),
        )
        .route(
            "/employees/{id}",
            get(handlers::get_employee::<R>)
                .put(handlers::update_employee::<R>)
                .delete(handlers::delete_employee::<R>),
        )
        .route(
            "/assets",
            get(handlers::list_assets::<R>).post(handlers::create_asset::<R>),
        )
        .route(
            "/assets/{id}",
            get(handlers::get_asset::<R>)
                .put(handlers::update_asset::<R>)
                .patch(handlers::assign_asset::<R>)
                .delete(handlers::delete_asset::<R>),
        )
        .with_state(state)
}
