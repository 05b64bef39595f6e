//! Employee Use Cases

use std::sync::Arc;

use crate::application::non_blank;
use crate::domain::entities::Employee;
use crate::domain::patch::EmployeePatch;
use crate::domain::repository::EmployeeRepository;
use crate::domain::value_objects::{DepartmentId, Email, EmployeeId, FieldError, FullName};
use crate::error::{InventoryError, InventoryResult};

/// Create employee input
pub struct CreateEmployeeInput {
    pub full_name: String,
    pub email: String,
    pub department_id: Option<DepartmentId>,
}

/// Update employee input; absent or blank fields are ignored
#[derive(Default)]
pub struct UpdateEmployeeInput {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub department_id: Option<DepartmentId>,
}

/// Read side of employees
pub struct EmployeeQueryUseCase<R>
where
    R: EmployeeRepository,
{
    repo: Arc<R>,
}

impl<R> EmployeeQueryUseCase<R>
where
    R: EmployeeRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> InventoryResult<Vec<Employee>> {
        self.repo.list_employees().await
    }

    pub async fn get(&self, id: EmployeeId) -> InventoryResult<Employee> {
        self.repo
            .find_employee(id)
            .await?
            .ok_or(InventoryError::EmployeeNotFound)
    }
}

/// Create employee use case
pub struct CreateEmployeeUseCase<R>
where
    R: EmployeeRepository,
{
    repo: Arc<R>,
}

impl<R> CreateEmployeeUseCase<R>
where
    R: EmployeeRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateEmployeeInput) -> InventoryResult<Employee> {
        let full_name = FullName::new(&input.full_name)?;
        let email = Email::new(&input.email)?;
        let department_id = input.department_id.ok_or(FieldError::Required {
            field: "Department",
        })?;

        let employee = Employee::new(full_name, email, department_id);
        self.repo.create_employee(&employee).await?;

        tracing::info!(
            employee_id = %employee.employee_id,
            department_id = %employee.department_id,
            "Employee created"
        );

        Ok(employee)
    }
}

/// Update employee use case
pub struct UpdateEmployeeUseCase<R>
where
    R: EmployeeRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateEmployeeUseCase<R>
where
    R: EmployeeRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        id: EmployeeId,
        input: UpdateEmployeeInput,
    ) -> InventoryResult<Employee> {
        let patch = EmployeePatch {
            full_name: non_blank(input.full_name.as_deref(), |v| FullName::new(v))?,
            email: non_blank(input.email.as_deref(), |v| Email::new(v))?,
            department_id: input.department_id,
        };

        let employee = self.repo.update_employee(id, &patch).await?;

        tracing::info!(employee_id = %employee.employee_id, "Employee updated");

        Ok(employee)
    }
}

/// Delete employee use case; the employee's assets become unassigned
pub struct DeleteEmployeeUseCase<R>
where
    R: EmployeeRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteEmployeeUseCase<R>
where
    R: EmployeeRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: EmployeeId) -> InventoryResult<()> {
        let assets_unassigned = self.repo.delete_employee(id).await?;

        tracing::info!(employee_id = %id, assets_unassigned, "Employee deleted");

        Ok(())
    }
}
