//! Domain Entities
//!
//! Departments own employees; employees optionally hold assets.

use chrono::NaiveDate;

use crate::domain::value_objects::{
    AssetId, AssetName, AssetType, DepartmentId, DeptName, Email, EmployeeId, FullName, Location,
    SerialNumber,
};

/// Department entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub department_id: DepartmentId,
    pub dept_name: DeptName,
    pub location: Option<Location>,
}

impl Department {
    pub fn new(dept_name: DeptName, location: Option<Location>) -> Self {
        Self {
            department_id: DepartmentId::new(),
            dept_name,
            location,
        }
    }
}

/// Employee entity, always attached to an existing department
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub employee_id: EmployeeId,
    pub full_name: FullName,
    pub email: Email,
    pub department_id: DepartmentId,
}

impl Employee {
    pub fn new(full_name: FullName, email: Email, department_id: DepartmentId) -> Self {
        Self {
            employee_id: EmployeeId::new(),
            full_name,
            email,
            department_id,
        }
    }
}

/// Asset entity; survives the removal of its owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub asset_id: AssetId,
    pub asset_name: AssetName,
    pub serial_number: SerialNumber,
    pub asset_type: AssetType,
    pub purchase_date: NaiveDate,
    pub employee_id: Option<EmployeeId>,
}

impl Asset {
    pub fn new(
        asset_name: AssetName,
        serial_number: SerialNumber,
        asset_type: AssetType,
        purchase_date: NaiveDate,
        employee_id: Option<EmployeeId>,
    ) -> Self {
        Self {
            asset_id: AssetId::new(),
            asset_name,
            serial_number,
            asset_type,
            purchase_date,
            employee_id,
        }
    }
}

// ============================================================================
// Read models
// ============================================================================

/// Department with its employees embedded
#[derive(Debug, Clone)]
pub struct DepartmentWithEmployees {
    pub department: Department,
    pub employees: Vec<Employee>,
}

/// Current holder of an asset
#[derive(Debug, Clone)]
pub struct AssetOwner {
    pub employee: Employee,
    pub department: Option<Department>,
}

/// Asset with its owner and the owner's department
#[derive(Debug, Clone)]
pub struct AssetWithOwner {
    pub asset: Asset,
    pub owner: Option<AssetOwner>,
}

/// What a department delete took with it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepartmentRemoval {
    pub employees_removed: u64,
    pub assets_unassigned: u64,
}
