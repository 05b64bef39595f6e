//! Department Use Cases

use std::sync::Arc;

use crate::application::non_blank;
use crate::domain::entities::{Department, DepartmentRemoval, DepartmentWithEmployees, Employee};
use crate::domain::patch::DepartmentPatch;
use crate::domain::repository::DepartmentRepository;
use crate::domain::value_objects::{DepartmentId, DeptName, Location};
use crate::error::{InventoryError, InventoryResult};

/// Create department input
pub struct CreateDepartmentInput {
    pub dept_name: String,
    pub location: Option<String>,
}

/// Update department input
///
/// Absent or blank `dept_name` is ignored. `location` absent is ignored,
/// blank clears it.
#[derive(Default)]
pub struct UpdateDepartmentInput {
    pub dept_name: Option<String>,
    pub location: Option<String>,
}

/// Read side of departments
pub struct DepartmentQueryUseCase<R>
where
    R: DepartmentRepository,
{
    repo: Arc<R>,
}

impl<R> DepartmentQueryUseCase<R>
where
    R: DepartmentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> InventoryResult<Vec<DepartmentWithEmployees>> {
        self.repo.list_with_employees().await
    }

    pub async fn get(&self, id: DepartmentId) -> InventoryResult<DepartmentWithEmployees> {
        self.repo
            .find_department(id)
            .await?
            .ok_or(InventoryError::DepartmentNotFound)
    }

    pub async fn employees(&self, id: DepartmentId) -> InventoryResult<Vec<Employee>> {
        self.repo
            .employees_of(id)
            .await?
            .ok_or(InventoryError::DepartmentNotFound)
    }
}

/// Create department use case
pub struct CreateDepartmentUseCase<R>
where
    R: DepartmentRepository,
{
    repo: Arc<R>,
}

impl<R> CreateDepartmentUseCase<R>
where
    R: DepartmentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateDepartmentInput) -> InventoryResult<Department> {
        let dept_name = DeptName::new(&input.dept_name)?;
        let location = Location::optional(input.location.as_deref())?;

        let department = Department::new(dept_name, location);
        self.repo.create_department(&department).await?;

        tracing::info!(
            department_id = %department.department_id,
            dept_name = %department.dept_name,
            "Department created"
        );

        Ok(department)
    }
}

/// Update department use case
pub struct UpdateDepartmentUseCase<R>
where
    R: DepartmentRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateDepartmentUseCase<R>
where
    R: DepartmentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        id: DepartmentId,
        input: UpdateDepartmentInput,
    ) -> InventoryResult<DepartmentWithEmployees> {
        let patch = DepartmentPatch {
            dept_name: non_blank(input.dept_name.as_deref(), |v| DeptName::new(v))?,
            location: input
                .location
                .as_deref()
                .map(|raw| Location::optional(Some(raw)))
                .transpose()?,
        };

        let updated = self.repo.update_department(id, &patch).await?;

        tracing::info!(department_id = %updated.department.department_id, "Department updated");

        Ok(updated)
    }
}

/// Delete department use case
///
/// Employees of the department go with it; their assets stay, unassigned.
pub struct DeleteDepartmentUseCase<R>
where
    R: DepartmentRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteDepartmentUseCase<R>
where
    R: DepartmentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: DepartmentId) -> InventoryResult<DepartmentRemoval> {
        let removal = self.repo.delete_department(id).await?;

        tracing::info!(
            department_id = %id,
            employees_removed = removal.employees_removed,
            assets_unassigned = removal.assets_unassigned,
            "Department deleted"
        );

        Ok(removal)
    }
}
