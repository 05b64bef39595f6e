//! API DTOs (Data Transfer Objects)
//!
//! Request fields are optional so that a missing value reaches validation
//! and is reported by field name instead of as a parse failure.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    Asset, AssetOwner, AssetWithOwner, Department, DepartmentWithEmployees, Employee,
};
use crate::domain::value_objects::{AssetId, DepartmentId, EmployeeId};

// ============================================================================
// Department
// ============================================================================

/// Create department request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartmentRequest {
    pub dept_name: Option<String>,
    pub location: Option<String>,
}

/// Update department request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDepartmentRequest {
    pub dept_name: Option<String>,
    /// Blank clears the location
    pub location: Option<String>,
}

/// Department with its members
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentResponse {
    pub id: DepartmentId,
    pub dept_name: String,
    pub location: Option<String>,
    pub employees: Vec<DepartmentMemberResponse>,
}

/// Employee as listed inside a department
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentMemberResponse {
    pub id: EmployeeId,
    pub full_name: String,
    pub email: String,
}

impl From<DepartmentWithEmployees> for DepartmentResponse {
    fn from(value: DepartmentWithEmployees) -> Self {
        let DepartmentWithEmployees {
            department,
            employees,
        } = value;

        Self {
            id: department.department_id,
            dept_name: department.dept_name.as_str().to_owned(),
            location: department.location.map(|l| l.as_str().to_owned()),
            employees: employees
                .into_iter()
                .map(|e| DepartmentMemberResponse {
                    id: e.employee_id,
                    full_name: e.full_name.as_str().to_owned(),
                    email: e.email.as_str().to_owned(),
                })
                .collect(),
        }
    }
}

impl From<Department> for DepartmentResponse {
    fn from(department: Department) -> Self {
        DepartmentWithEmployees {
            department,
            employees: Vec::new(),
        }
        .into()
    }
}

// ============================================================================
// Employee
// ============================================================================

/// Create employee request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub department_id: Option<DepartmentId>,
}

/// Update employee request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub department_id: Option<DepartmentId>,
}

/// Employee response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: EmployeeId,
    pub full_name: String,
    pub email: String,
    pub department_id: DepartmentId,
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        Self {
            id: e.employee_id,
            full_name: e.full_name.as_str().to_owned(),
            email: e.email.as_str().to_owned(),
            department_id: e.department_id,
        }
    }
}

// ============================================================================
// Asset
// ============================================================================

/// Create asset request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetRequest {
    pub asset_name: Option<String>,
    pub serial_number: Option<String>,
    pub asset_type: Option<String>,
    /// `YYYY-MM-DD`
    pub purchase_date: Option<NaiveDate>,
    pub employee_id: Option<EmployeeId>,
}

/// Update asset request; ownership is changed through assignment only
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssetRequest {
    pub asset_name: Option<String>,
    pub serial_number: Option<String>,
    pub asset_type: Option<String>,
    pub purchase_date: Option<NaiveDate>,
}

/// Assign request; `null` or absent `employeeId` unassigns
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignAssetRequest {
    pub employee_id: Option<EmployeeId>,
}

/// Asset as stored
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetResponse {
    pub id: AssetId,
    pub asset_name: String,
    pub serial_number: String,
    pub asset_type: String,
    pub purchase_date: NaiveDate,
    pub employee_id: Option<EmployeeId>,
}

impl From<Asset> for AssetResponse {
    fn from(a: Asset) -> Self {
        Self {
            id: a.asset_id,
            asset_name: a.asset_name.as_str().to_owned(),
            serial_number: a.serial_number.as_str().to_owned(),
            asset_type: a.asset_type.as_str().to_owned(),
            purchase_date: a.purchase_date,
            employee_id: a.employee_id,
        }
    }
}

/// Asset with its owner and the owner's department
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDetailsResponse {
    pub id: AssetId,
    pub asset_name: String,
    pub serial_number: String,
    pub asset_type: String,
    pub purchase_date: NaiveDate,
    pub employee: Option<AssetOwnerResponse>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetOwnerResponse {
    pub id: EmployeeId,
    pub full_name: String,
    pub email: String,
    pub department_id: DepartmentId,
    pub department: Option<DepartmentSummaryResponse>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSummaryResponse {
    pub id: DepartmentId,
    pub dept_name: String,
    pub location: Option<String>,
}

impl From<AssetOwner> for AssetOwnerResponse {
    fn from(owner: AssetOwner) -> Self {
        let AssetOwner {
            employee,
            department,
        } = owner;

        Self {
            id: employee.employee_id,
            full_name: employee.full_name.as_str().to_owned(),
            email: employee.email.as_str().to_owned(),
            department_id: employee.department_id,
            department: department.map(|d| DepartmentSummaryResponse {
                id: d.department_id,
                dept_name: d.dept_name.as_str().to_owned(),
                location: d.location.map(|l| l.as_str().to_owned()),
            }),
        }
    }
}

impl From<AssetWithOwner> for AssetDetailsResponse {
    fn from(value: AssetWithOwner) -> Self {
        let AssetWithOwner { asset, owner } = value;

        Self {
            id: asset.asset_id,
            asset_name: asset.asset_name.as_str().to_owned(),
            serial_number: asset.serial_number.as_str().to_owned(),
            asset_type: asset.asset_type.as_str().to_owned(),
            purchase_date: asset.purchase_date,
            employee: owner.map(AssetOwnerResponse::from),
        }
    }
}
