//! Repository Traits
//!
//! Every mutating method is one unit of work: its checks and its write
//! happen atomically, and the store's unique constraints have the last word.
//! Implementations are in the infrastructure layer.

use crate::domain::entities::{
    Asset, AssetWithOwner, Department, DepartmentRemoval, DepartmentWithEmployees, Employee,
};
use crate::domain::patch::{AssetPatch, DepartmentPatch, EmployeePatch};
use crate::domain::value_objects::{AssetId, DepartmentId, EmployeeId};
use crate::error::InventoryResult;

/// Department repository trait
#[trait_variant::make(DepartmentRepository: Send)]
pub trait LocalDepartmentRepository {
    /// All departments with their employees
    async fn list_with_employees(&self) -> InventoryResult<Vec<DepartmentWithEmployees>>;

    /// Find a department with its employees
    async fn find_department(
        &self,
        id: DepartmentId,
    ) -> InventoryResult<Option<DepartmentWithEmployees>>;

    /// Employees of a department; `None` if the department does not exist
    async fn employees_of(&self, id: DepartmentId) -> InventoryResult<Option<Vec<Employee>>>;

    /// Insert; a taken name yields `DepartmentNameTaken`
    async fn create_department(&self, department: &Department) -> InventoryResult<()>;

    /// Apply the fields of `patch` that differ from the stored row
    ///
    /// Returns the department as committed, with the employees it had at
    /// that point.
    async fn update_department(
        &self,
        id: DepartmentId,
        patch: &DepartmentPatch,
    ) -> InventoryResult<DepartmentWithEmployees>;

    /// Delete the department and its employees, unassigning their assets
    async fn delete_department(&self, id: DepartmentId) -> InventoryResult<DepartmentRemoval>;
}

/// Employee repository trait
#[trait_variant::make(EmployeeRepository: Send)]
pub trait LocalEmployeeRepository {
    async fn list_employees(&self) -> InventoryResult<Vec<Employee>>;

    async fn find_employee(&self, id: EmployeeId) -> InventoryResult<Option<Employee>>;

    /// Insert; the department must exist and the email must be free
    async fn create_employee(&self, employee: &Employee) -> InventoryResult<()>;

    async fn update_employee(
        &self,
        id: EmployeeId,
        patch: &EmployeePatch,
    ) -> InventoryResult<Employee>;

    /// Delete the employee; returns how many assets lost their owner
    async fn delete_employee(&self, id: EmployeeId) -> InventoryResult<u64>;
}

/// Asset repository trait
#[trait_variant::make(AssetRepository: Send)]
pub trait LocalAssetRepository {
    /// All assets with owner and the owner's department
    async fn list_with_owner(&self) -> InventoryResult<Vec<AssetWithOwner>>;

    async fn find_asset(&self, id: AssetId) -> InventoryResult<Option<AssetWithOwner>>;

    /// Insert; the owner, if any, must exist and the serial must be free
    async fn create_asset(&self, asset: &Asset) -> InventoryResult<()>;

    async fn update_asset(&self, id: AssetId, patch: &AssetPatch) -> InventoryResult<Asset>;

    /// Set or clear the owner; an unknown employee leaves the asset unchanged
    async fn assign_asset(
        &self,
        id: AssetId,
        employee_id: Option<EmployeeId>,
    ) -> InventoryResult<Asset>;

    async fn delete_asset(&self, id: AssetId) -> InventoryResult<()>;
}

/// Everything the HTTP layer needs from one store
pub trait InventoryRepository:
    DepartmentRepository + EmployeeRepository + AssetRepository + Send + Sync + 'static
{
}

impl<T> InventoryRepository for T where
    T: DepartmentRepository + EmployeeRepository + AssetRepository + Send + Sync + 'static
{
}
