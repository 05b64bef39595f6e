//! HTTP Handlers

use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use kernel::error::app_error::AppError;
use std::sync::Arc;

use crate::application::asset::{
    AssetQueryUseCase, AssignAssetUseCase, CreateAssetInput, CreateAssetUseCase,
    DeleteAssetUseCase, UpdateAssetInput, UpdateAssetUseCase,
};
use crate::application::department::{
    CreateDepartmentInput, CreateDepartmentUseCase, DeleteDepartmentUseCase,
    DepartmentQueryUseCase, UpdateDepartmentInput, UpdateDepartmentUseCase,
};
use crate::application::employee::{
    CreateEmployeeInput, CreateEmployeeUseCase, DeleteEmployeeUseCase, EmployeeQueryUseCase,
    UpdateEmployeeInput, UpdateEmployeeUseCase,
};
use crate::domain::repository::InventoryRepository;
use crate::domain::value_objects::{AssetId, DepartmentId, EmployeeId};
use crate::error::InventoryResult;
use crate::presentation::dto::{
    AssetDetailsResponse, AssetResponse, AssignAssetRequest, CreateAssetRequest,
    CreateDepartmentRequest, CreateEmployeeRequest, DepartmentResponse, EmployeeResponse,
    UpdateAssetRequest, UpdateDepartmentRequest, UpdateEmployeeRequest,
};

/// Shared state for inventory handlers
pub struct InventoryAppState<R>
where
    R: InventoryRepository,
{
    pub repo: Arc<R>,
}

impl<R> Clone for InventoryAppState<R>
where
    R: InventoryRepository,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

/// JSON body whose rejection renders as the error envelope
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Path parameter whose rejection renders as the error envelope
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);

fn created<T: serde::Serialize>(location: String, body: T) -> impl IntoResponse {
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(body))
}

// ============================================================================
// Departments
// ============================================================================

/// GET /api/departments
pub async fn list_departments<R>(
    State(state): State<InventoryAppState<R>>,
) -> InventoryResult<Json<Vec<DepartmentResponse>>>
where
    R: InventoryRepository,
{
    let departments = DepartmentQueryUseCase::new(state.repo.clone()).list().await?;
    Ok(Json(departments.into_iter().map(Into::into).collect()))
}

/// GET /api/departments/{id}
pub async fn get_department<R>(
    State(state): State<InventoryAppState<R>>,
    PathParam(id): PathParam<DepartmentId>,
) -> InventoryResult<Json<DepartmentResponse>>
where
    R: InventoryRepository,
{
    let department = DepartmentQueryUseCase::new(state.repo.clone()).get(id).await?;
    Ok(Json(department.into()))
}

/// GET /api/departments/{id}/employees
pub async fn list_department_employees<R>(
    State(state): State<InventoryAppState<R>>,
    PathParam(id): PathParam<DepartmentId>,
) -> InventoryResult<Json<Vec<EmployeeResponse>>>
where
    R: InventoryRepository,
{
    let employees = DepartmentQueryUseCase::new(state.repo.clone())
        .employees(id)
        .await?;
    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

/// POST /api/departments
pub async fn create_department<R>(
    State(state): State<InventoryAppState<R>>,
    JsonBody(req): JsonBody<CreateDepartmentRequest>,
) -> InventoryResult<impl IntoResponse>
where
    R: InventoryRepository,
{
    let input = CreateDepartmentInput {
        dept_name: req.dept_name.unwrap_or_default(),
        location: req.location,
    };

    let department = CreateDepartmentUseCase::new(state.repo.clone())
        .execute(input)
        .await?;

    Ok(created(
        format!("/api/departments/{}", department.department_id),
        DepartmentResponse::from(department),
    ))
}

/// PUT /api/departments/{id}
pub async fn update_department<R>(
    State(state): State<InventoryAppState<R>>,
    PathParam(id): PathParam<DepartmentId>,
    JsonBody(req): JsonBody<UpdateDepartmentRequest>,
) -> InventoryResult<Json<DepartmentResponse>>
where
    R: InventoryRepository,
{
    let input = UpdateDepartmentInput {
        dept_name: req.dept_name,
        location: req.location,
    };

    let department = UpdateDepartmentUseCase::new(state.repo.clone())
        .execute(id, input)
        .await?;
    Ok(Json(department.into()))
}

/// DELETE /api/departments/{id}
pub async fn delete_department<R>(
    State(state): State<InventoryAppState<R>>,
    PathParam(id): PathParam<DepartmentId>,
) -> InventoryResult<StatusCode>
where
    R: InventoryRepository,
{
    DeleteDepartmentUseCase::new(state.repo.clone())
        .execute(id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Employees
// ============================================================================

/// GET /api/employees
pub async fn list_employees<R>(
    State(state): State<InventoryAppState<R>>,
) -> InventoryResult<Json<Vec<EmployeeResponse>>>
where
    R: InventoryRepository,
{
    let employees = EmployeeQueryUseCase::new(state.repo.clone()).list().await?;
    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

/// GET /api/employees/{id}
pub async fn get_employee<R>(
    State(state): State<InventoryAppState<R>>,
    PathParam(id): PathParam<EmployeeId>,
) -> InventoryResult<Json<EmployeeResponse>>
where
    R: InventoryRepository,
{
    let employee = EmployeeQueryUseCase::new(state.repo.clone()).get(id).await?;
    Ok(Json(employee.into()))
}

/// POST /api/employees
pub async fn create_employee<R>(
    State(state): State<InventoryAppState<R>>,
    JsonBody(req): JsonBody<CreateEmployeeRequest>,
) -> InventoryResult<impl IntoResponse>
where
    R: InventoryRepository,
{
    let input = CreateEmployeeInput {
        full_name: req.full_name.unwrap_or_default(),
        email: req.email.unwrap_or_default(),
        department_id: req.department_id,
    };

    let employee = CreateEmployeeUseCase::new(state.repo.clone())
        .execute(input)
        .await?;

    Ok(created(
        format!("/api/employees/{}", employee.employee_id),
        EmployeeResponse::from(employee),
    ))
}

/// PUT /api/employees/{id}
pub async fn update_employee<R>(
    State(state): State<InventoryAppState<R>>,
    PathParam(id): PathParam<EmployeeId>,
    JsonBody(req): JsonBody<UpdateEmployeeRequest>,
) -> InventoryResult<Json<EmployeeResponse>>
where
    R: InventoryRepository,
{
    let input = UpdateEmployeeInput {
        full_name: req.full_name,
        email: req.email,
        department_id: req.department_id,
    };

    let employee = UpdateEmployeeUseCase::new(state.repo.clone())
        .execute(id, input)
        .await?;
    Ok(Json(employee.into()))
}

/// DELETE /api/employees/{id}
pub async fn delete_employee<R>(
    State(state): State<InventoryAppState<R>>,
    PathParam(id): PathParam<EmployeeId>,
) -> InventoryResult<StatusCode>
where
    R: InventoryRepository,
{
    DeleteEmployeeUseCase::new(state.repo.clone())
        .execute(id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Assets
// ============================================================================

/// GET /api/assets
pub async fn list_assets<R>(
    State(state): State<InventoryAppState<R>>,
) -> InventoryResult<Json<Vec<AssetDetailsResponse>>>
where
    R: InventoryRepository,
{
    let assets = AssetQueryUseCase::new(state.repo.clone()).list().await?;
    Ok(Json(assets.into_iter().map(Into::into).collect()))
}

/// GET /api/assets/{id}
pub async fn get_asset<R>(
    State(state): State<InventoryAppState<R>>,
    PathParam(id): PathParam<AssetId>,
) -> InventoryResult<Json<AssetDetailsResponse>>
where
    R: InventoryRepository,
{
    let asset = AssetQueryUseCase::new(state.repo.clone()).get(id).await?;
    Ok(Json(asset.into()))
}

/// POST /api/assets
pub async fn create_asset<R>(
    State(state): State<InventoryAppState<R>>,
    JsonBody(req): JsonBody<CreateAssetRequest>,
) -> InventoryResult<impl IntoResponse>
where
    R: InventoryRepository,
{
    let input = CreateAssetInput {
        asset_name: req.asset_name.unwrap_or_default(),
        serial_number: req.serial_number.unwrap_or_default(),
        asset_type: req.asset_type.unwrap_or_default(),
        purchase_date: req.purchase_date,
        employee_id: req.employee_id,
    };

    let asset = CreateAssetUseCase::new(state.repo.clone())
        .execute(input)
        .await?;

    Ok(created(
        format!("/api/assets/{}", asset.asset_id),
        AssetResponse::from(asset),
    ))
}

/// PUT /api/assets/{id}
pub async fn update_asset<R>(
    State(state): State<InventoryAppState<R>>,
    PathParam(id): PathParam<AssetId>,
    JsonBody(req): JsonBody<UpdateAssetRequest>,
) -> InventoryResult<Json<AssetResponse>>
where
    R: InventoryRepository,
{
    let input = UpdateAssetInput {
        asset_name: req.asset_name,
        serial_number: req.serial_number,
        asset_type: req.asset_type,
        purchase_date: req.purchase_date,
    };

    let asset = UpdateAssetUseCase::new(state.repo.clone())
        .execute(id, input)
        .await?;
    Ok(Json(asset.into()))
}

/// PATCH /api/assets/{id}
pub async fn assign_asset<R>(
    State(state): State<InventoryAppState<R>>,
    PathParam(id): PathParam<AssetId>,
    JsonBody(req): JsonBody<AssignAssetRequest>,
) -> InventoryResult<StatusCode>
where
    R: InventoryRepository,
{
    AssignAssetUseCase::new(state.repo.clone())
        .execute(id, req.employee_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/assets/{id}
pub async fn delete_asset<R>(
    State(state): State<InventoryAppState<R>>,
    PathParam(id): PathParam<AssetId>,
) -> InventoryResult<StatusCode>
where
    R: InventoryRepository,
{
    DeleteAssetUseCase::new(state.repo.clone())
        .execute(id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
