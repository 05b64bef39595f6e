//! Partial Updates
//!
//! A patch carries what the client asked for. Resolving it against the
//! current entity yields a change set holding only the fields that really
//! differ; an empty change set means no write and no re-validation.

use chrono::NaiveDate;

use crate::domain::entities::{Asset, Department, Employee};
use crate::domain::value_objects::{
    AssetName, AssetType, DepartmentId, DeptName, Email, FullName, Location, SerialNumber,
};

fn changed<T: PartialEq + Clone>(requested: &Option<T>, current: &T) -> Option<T> {
    requested.as_ref().filter(|value| *value != current).cloned()
}

// ============================================================================
// Department
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct DepartmentPatch {
    pub dept_name: Option<DeptName>,
    /// `Some(None)` clears the location
    pub location: Option<Option<Location>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentChanges {
    pub dept_name: Option<DeptName>,
    pub location: Option<Option<Location>>,
}

impl DepartmentPatch {
    pub fn resolve(&self, current: &Department) -> DepartmentChanges {
        DepartmentChanges {
            dept_name: changed(&self.dept_name, &current.dept_name),
            location: changed(&self.location, &current.location),
        }
    }
}

impl DepartmentChanges {
    pub fn is_empty(&self) -> bool {
        self.dept_name.is_none() && self.location.is_none()
    }

    pub fn apply_to(self, department: &mut Department) {
        if let Some(dept_name) = self.dept_name {
            department.dept_name = dept_name;
        }
        if let Some(location) = self.location {
            department.location = location;
        }
    }
}

// ============================================================================
// Employee
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct EmployeePatch {
    pub full_name: Option<FullName>,
    pub email: Option<Email>,
    pub department_id: Option<DepartmentId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeChanges {
    pub full_name: Option<FullName>,
    pub email: Option<Email>,
    pub department_id: Option<DepartmentId>,
}

impl EmployeePatch {
    pub fn resolve(&self, current: &Employee) -> EmployeeChanges {
        EmployeeChanges {
            full_name: changed(&self.full_name, &current.full_name),
            email: changed(&self.email, &current.email),
            department_id: changed(&self.department_id, &current.department_id),
        }
    }
}

impl EmployeeChanges {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.email.is_none() && self.department_id.is_none()
    }

    pub fn apply_to(self, employee: &mut Employee) {
        if let Some(full_name) = self.full_name {
            employee.full_name = full_name;
        }
        if let Some(email) = self.email {
            employee.email = email;
        }
        if let Some(department_id) = self.department_id {
            employee.department_id = department_id;
        }
    }
}

// ============================================================================
// Asset
// ============================================================================

/// Descriptive fields only; ownership changes go through assignment
#[derive(Debug, Clone, Default)]
pub struct AssetPatch {
    pub asset_name: Option<AssetName>,
    pub serial_number: Option<SerialNumber>,
    pub asset_type: Option<AssetType>,
    pub purchase_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetChanges {
    pub asset_name: Option<AssetName>,
    pub serial_number: Option<SerialNumber>,
    pub asset_type: Option<AssetType>,
    pub purchase_date: Option<NaiveDate>,
}

impl AssetPatch {
    pub fn resolve(&self, current: &Asset) -> AssetChanges {
        AssetChanges {
            asset_name: changed(&self.asset_name, &current.asset_name),
            serial_number: changed(&self.serial_number, &current.serial_number),
            asset_type: changed(&self.asset_type, &current.asset_type),
            purchase_date: changed(&self.purchase_date, &current.purchase_date),
        }
    }
}

impl AssetChanges {
    pub fn is_empty(&self) -> bool {
        self.asset_name.is_none()
            && self.serial_number.is_none()
            && self.asset_type.is_none()
            && self.purchase_date.is_none()
    }

    pub fn apply_to(self, asset: &mut Asset) {
        if let Some(asset_name) = self.asset_name {
            asset.asset_name = asset_name;
        }
        if let Some(serial_number) = self.serial_number {
            asset.serial_number = serial_number;
        }
        if let Some(asset_type) = self.asset_type {
            asset.asset_type = asset_type;
        }
        if let Some(purchase_date) = self.purchase_date {
            asset.purchase_date = purchase_date;
        }
    }
}
