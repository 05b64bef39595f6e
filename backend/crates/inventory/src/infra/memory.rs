//! In-memory Repository Implementation
//!
//! Same contract as the PostgreSQL store, for tests without a database.
//! One lock guards the whole graph, so each check and its write are atomic
//! and a cascade is never observed half done.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entities::{
    Asset, AssetOwner, AssetWithOwner, Department, DepartmentRemoval, DepartmentWithEmployees,
    Employee,
};
use crate::domain::patch::{AssetPatch, DepartmentPatch, EmployeePatch};
use crate::domain::repository::{AssetRepository, DepartmentRepository, EmployeeRepository};
use crate::domain::value_objects::{AssetId, DepartmentId, EmployeeId};
use crate::error::{InventoryError, InventoryResult};

/// Rows in insertion order
#[derive(Default)]
struct Graph {
    departments: Vec<Department>,
    employees: Vec<Employee>,
    assets: Vec<Asset>,
}

impl Graph {
    fn department(&self, id: DepartmentId) -> Option<&Department> {
        self.departments.iter().find(|d| d.department_id == id)
    }

    fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.employee_id == id)
    }

    fn employees_in(&self, id: DepartmentId) -> Vec<Employee> {
        self.employees
            .iter()
            .filter(|e| e.department_id == id)
            .cloned()
            .collect()
    }

    fn with_employees(&self, department: &Department) -> DepartmentWithEmployees {
        DepartmentWithEmployees {
            department: department.clone(),
            employees: self.employees_in(department.department_id),
        }
    }

    fn with_owner(&self, asset: &Asset) -> AssetWithOwner {
        let owner = asset
            .employee_id
            .and_then(|id| self.employee(id))
            .map(|employee| AssetOwner {
                employee: employee.clone(),
                department: self.department(employee.department_id).cloned(),
            });

        AssetWithOwner {
            asset: asset.clone(),
            owner,
        }
    }

    /// Clear the owner of every asset held by `employee_ids`
    fn unassign(&mut self, employee_ids: &[EmployeeId]) -> u64 {
        let mut count = 0;
        for asset in &mut self.assets {
            if asset
                .employee_id
                .is_some_and(|owner| employee_ids.contains(&owner))
            {
                asset.employee_id = None;
                count += 1;
            }
        }
        count
    }
}

/// In-memory inventory store
#[derive(Clone, Default)]
pub struct InMemoryInventoryRepository {
    graph: Arc<RwLock<Graph>>,
}

impl InMemoryInventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row counts (departments, employees, assets), for assertions
    pub async fn counts(&self) -> (usize, usize, usize) {
        let graph = self.graph.read().await;
        (
            graph.departments.len(),
            graph.employees.len(),
            graph.assets.len(),
        )
    }
}

impl DepartmentRepository for InMemoryInventoryRepository {
    async fn list_with_employees(&self) -> InventoryResult<Vec<DepartmentWithEmployees>> {
        let graph = self.graph.read().await;
        Ok(graph
            .departments
            .iter()
            .map(|d| graph.with_employees(d))
            .collect())
    }

    async fn find_department(
        &self,
        id: DepartmentId,
    ) -> InventoryResult<Option<DepartmentWithEmployees>> {
        let graph = self.graph.read().await;
        Ok(graph.department(id).map(|d| graph.with_employees(d)))
    }

    async fn employees_of(&self, id: DepartmentId) -> InventoryResult<Option<Vec<Employee>>> {
        let graph = self.graph.read().await;
        Ok(graph.department(id).map(|_| graph.employees_in(id)))
    }

    async fn create_department(&self, department: &Department) -> InventoryResult<()> {
        let mut graph = self.graph.write().await;
        if graph
            .departments
            .iter()
            .any(|d| d.dept_name == department.dept_name)
        {
            return Err(InventoryError::DepartmentNameTaken);
        }
        graph.departments.push(department.clone());
        Ok(())
    }

    async fn update_department(
        &self,
        id: DepartmentId,
        patch: &DepartmentPatch,
    ) -> InventoryResult<DepartmentWithEmployees> {
        let mut graph = self.graph.write().await;

        let current = graph
            .department(id)
            .cloned()
            .ok_or(InventoryError::DepartmentNotFound)?;

        let changes = patch.resolve(&current);
        if changes.is_empty() {
            return Ok(graph.with_employees(&current));
        }

        if let Some(dept_name) = &changes.dept_name {
            if graph
                .departments
                .iter()
                .any(|d| d.department_id != id && &d.dept_name == dept_name)
            {
                return Err(InventoryError::DepartmentNameTaken);
            }
        }

        let stored = graph
            .departments
            .iter_mut()
            .find(|d| d.department_id == id)
            .ok_or(InventoryError::DepartmentNotFound)?;
        changes.apply_to(stored);
        let updated = stored.clone();
        Ok(graph.with_employees(&updated))
    }

    async fn delete_department(&self, id: DepartmentId) -> InventoryResult<DepartmentRemoval> {
        let mut graph = self.graph.write().await;

        if graph.department(id).is_none() {
            return Err(InventoryError::DepartmentNotFound);
        }

        let members: Vec<EmployeeId> = graph
            .employees
            .iter()
            .filter(|e| e.department_id == id)
            .map(|e| e.employee_id)
            .collect();

        let assets_unassigned = graph.unassign(&members);
        graph.employees.retain(|e| e.department_id != id);
        graph.departments.retain(|d| d.department_id != id);

        Ok(DepartmentRemoval {
            employees_removed: members.len() as u64,
            assets_unassigned,
        })
    }
}

impl EmployeeRepository for InMemoryInventoryRepository {
    async fn list_employees(&self) -> InventoryResult<Vec<Employee>> {
        Ok(self.graph.read().await.employees.clone())
    }

    async fn find_employee(&self, id: EmployeeId) -> InventoryResult<Option<Employee>> {
        Ok(self.graph.read().await.employee(id).cloned())
    }

    async fn create_employee(&self, employee: &Employee) -> InventoryResult<()> {
        let mut graph = self.graph.write().await;

        if graph.department(employee.department_id).is_none() {
            return Err(InventoryError::UnknownDepartment);
        }
        if graph.employees.iter().any(|e| e.email == employee.email) {
            return Err(InventoryError::EmailTaken);
        }

        graph.employees.push(employee.clone());
        Ok(())
    }

    async fn update_employee(
        &self,
        id: EmployeeId,
        patch: &EmployeePatch,
    ) -> InventoryResult<Employee> {
        let mut graph = self.graph.write().await;

        let current = graph
            .employee(id)
            .cloned()
            .ok_or(InventoryError::EmployeeNotFound)?;

        let changes = patch.resolve(&current);
        if changes.is_empty() {
            return Ok(current);
        }

        if let Some(email) = &changes.email {
            if graph
                .employees
                .iter()
                .any(|e| e.employee_id != id && &e.email == email)
            {
                return Err(InventoryError::EmailTaken);
            }
        }

        if let Some(department_id) = changes.department_id {
            if graph.department(department_id).is_none() {
                return Err(InventoryError::UnknownDepartment);
            }
        }

        let stored = graph
            .employees
            .iter_mut()
            .find(|e| e.employee_id == id)
            .ok_or(InventoryError::EmployeeNotFound)?;
        changes.apply_to(stored);
        Ok(stored.clone())
    }

    async fn delete_employee(&self, id: EmployeeId) -> InventoryResult<u64> {
        let mut graph = self.graph.write().await;

        if graph.employee(id).is_none() {
            return Err(InventoryError::EmployeeNotFound);
        }

        let assets_unassigned = graph.unassign(&[id]);
        graph.employees.retain(|e| e.employee_id != id);
        Ok(assets_unassigned)
    }
}

impl AssetRepository for InMemoryInventoryRepository {
    async fn list_with_owner(&self) -> InventoryResult<Vec<AssetWithOwner>> {
        let graph = self.graph.read().await;
        Ok(graph.assets.iter().map(|a| graph.with_owner(a)).collect())
    }

    async fn find_asset(&self, id: AssetId) -> InventoryResult<Option<AssetWithOwner>> {
        let graph = self.graph.read().await;
        Ok(graph
            .assets
            .iter()
            .find(|a| a.asset_id == id)
            .map(|a| graph.with_owner(a)))
    }

    async fn create_asset(&self, asset: &Asset) -> InventoryResult<()> {
        let mut graph = self.graph.write().await;

        if let Some(employee_id) = asset.employee_id {
            if graph.employee(employee_id).is_none() {
                return Err(InventoryError::UnknownEmployee);
            }
        }
        if graph
            .assets
            .iter()
            .any(|a| a.serial_number == asset.serial_number)
        {
            return Err(InventoryError::SerialNumberTaken);
        }

        graph.assets.push(asset.clone());
        Ok(())
    }

    async fn update_asset(&self, id: AssetId, patch: &AssetPatch) -> InventoryResult<Asset> {
        let mut graph = self.graph.write().await;

        let current = graph
            .assets
            .iter()
            .find(|a| a.asset_id == id)
            .cloned()
            .ok_or(InventoryError::AssetNotFound)?;

        let changes = patch.resolve(&current);
        if changes.is_empty() {
            return Ok(current);
        }

        if let Some(serial_number) = &changes.serial_number {
            if graph
                .assets
                .iter()
                .any(|a| a.asset_id != id && &a.serial_number == serial_number)
            {
                return Err(InventoryError::SerialNumberTaken);
            }
        }

        let stored = graph
            .assets
            .iter_mut()
            .find(|a| a.asset_id == id)
            .ok_or(InventoryError::AssetNotFound)?;
        changes.apply_to(stored);
        Ok(stored.clone())
    }

    async fn assign_asset(
        &self,
        id: AssetId,
        employee_id: Option<EmployeeId>,
    ) -> InventoryResult<Asset> {
        let mut graph = self.graph.write().await;

        if !graph.assets.iter().any(|a| a.asset_id == id) {
            return Err(InventoryError::AssetNotFound);
        }
        if let Some(employee_id) = employee_id {
            if graph.employee(employee_id).is_none() {
                return Err(InventoryError::UnknownEmployee);
            }
        }

        let stored = graph
            .assets
            .iter_mut()
            .find(|a| a.asset_id == id)
            .ok_or(InventoryError::AssetNotFound)?;
        stored.employee_id = employee_id;
        Ok(stored.clone())
    }

    async fn delete_asset(&self, id: AssetId) -> InventoryResult<()> {
        let mut graph = self.graph.write().await;
        let before = graph.assets.len();
        graph.assets.retain(|a| a.asset_id != id);

        if graph.assets.len() == before {
            return Err(InventoryError::AssetNotFound);
        }
        Ok(())
    }
}
