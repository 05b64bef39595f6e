//! PostgreSQL Repository Implementation
//!
//! Each mutation runs in one transaction: lock the target row, check the
//! references and the uniqueness of changed fields, then write. Two
//! concurrent writers can both pass the check; the unique constraint then
//! rejects the second one and the violation is translated to the same
//! conflict the check would have produced.

use std::collections::HashMap;

use chrono::NaiveDate;
use sqlx::error::ErrorKind as DbErrorKind;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::domain::entities::{
    Asset, AssetOwner, AssetWithOwner, Department, DepartmentRemoval, DepartmentWithEmployees,
    Employee,
};
use crate::domain::patch::{AssetPatch, DepartmentPatch, EmployeePatch};
use crate::domain::repository::{AssetRepository, DepartmentRepository, EmployeeRepository};
use crate::domain::value_objects::{
    AssetId, AssetName, AssetType, DepartmentId, DeptName, Email, EmployeeId, FullName, Location,
    SerialNumber,
};
use crate::error::{InventoryError, InventoryResult};

const UQ_DEPARTMENT_NAME: &str = "uq_departments_dept_name";
const UQ_EMPLOYEE_EMAIL: &str = "uq_employees_email";
const UQ_ASSET_SERIAL: &str = "uq_assets_serial_number";
const FK_EMPLOYEE_DEPARTMENT: &str = "fk_employees_department";
const FK_ASSET_EMPLOYEE: &str = "fk_assets_employee";

/// PostgreSQL-backed inventory repository
#[derive(Clone)]
pub struct PgInventoryRepository {
    pool: PgPool,
}

impl PgInventoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Translate constraint violations into domain outcomes
fn translate(err: sqlx::Error) -> InventoryError {
    if let sqlx::Error::Database(db_err) = &err {
        let mapped = match (db_err.kind(), db_err.constraint()) {
            (DbErrorKind::UniqueViolation, Some(UQ_DEPARTMENT_NAME)) => {
                Some(InventoryError::DepartmentNameTaken)
            }
            (DbErrorKind::UniqueViolation, Some(UQ_EMPLOYEE_EMAIL)) => {
                Some(InventoryError::EmailTaken)
            }
            (DbErrorKind::UniqueViolation, Some(UQ_ASSET_SERIAL)) => {
                Some(InventoryError::SerialNumberTaken)
            }
            (DbErrorKind::ForeignKeyViolation, Some(FK_EMPLOYEE_DEPARTMENT)) => {
                Some(InventoryError::UnknownDepartment)
            }
            (DbErrorKind::ForeignKeyViolation, Some(FK_ASSET_EMPLOYEE)) => {
                Some(InventoryError::UnknownEmployee)
            }
            _ => None,
        };

        if let Some(mapped) = mapped {
            tracing::debug!(
                constraint = db_err.constraint().unwrap_or_default(),
                "Constraint violation translated"
            );
            return mapped;
        }
    }

    InventoryError::Database(err)
}

// ============================================================================
// Row helpers shared by the repositories
// ============================================================================

async fn department_for_update(
    conn: &mut PgConnection,
    id: DepartmentId,
) -> InventoryResult<Option<Department>> {
    let row = sqlx::query_as::<_, DepartmentRow>(
        r#"
        SELECT department_id, dept_name, location
        FROM departments
        WHERE department_id = $1
        FOR UPDATE
        "#,
    )
    .bind(id.as_uuid())
    .fetch_optional(conn)
    .await?;

    Ok(row.map(DepartmentRow::into_department))
}

async fn employee_for_update(
    conn: &mut PgConnection,
    id: EmployeeId,
) -> InventoryResult<Option<Employee>> {
    let row = sqlx::query_as::<_, EmployeeRow>(
        r#"
        SELECT employee_id, full_name, email, department_id
        FROM employees
        WHERE employee_id = $1
        FOR UPDATE
        "#,
    )
    .bind(id.as_uuid())
    .fetch_optional(conn)
    .await?;

    Ok(row.map(EmployeeRow::into_employee))
}

async fn asset_for_update(conn: &mut PgConnection, id: AssetId) -> InventoryResult<Option<Asset>> {
    let row = sqlx::query_as::<_, AssetRow>(
        r#"
        SELECT asset_id, asset_name, serial_number, asset_type, purchase_date, employee_id
        FROM assets
        WHERE asset_id = $1
        FOR UPDATE
        "#,
    )
    .bind(id.as_uuid())
    .fetch_optional(conn)
    .await?;

    Ok(row.map(AssetRow::into_asset))
}

/// Lock a referenced department against deletion until commit
async fn department_exists(conn: &mut PgConnection, id: DepartmentId) -> InventoryResult<bool> {
    let found = sqlx::query_scalar::<_, i32>(
        "SELECT 1 FROM departments WHERE department_id = $1 FOR SHARE",
    )
    .bind(id.as_uuid())
    .fetch_optional(conn)
    .await?;

    Ok(found.is_some())
}

/// Lock a referenced employee against deletion until commit
async fn employee_exists(conn: &mut PgConnection, id: EmployeeId) -> InventoryResult<bool> {
    let found =
        sqlx::query_scalar::<_, i32>("SELECT 1 FROM employees WHERE employee_id = $1 FOR SHARE")
            .bind(id.as_uuid())
            .fetch_optional(conn)
            .await?;

    Ok(found.is_some())
}

async fn dept_name_taken(
    conn: &mut PgConnection,
    dept_name: &DeptName,
    except: Option<DepartmentId>,
) -> InventoryResult<bool> {
    let taken: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM departments
            WHERE dept_name = $1 AND ($2::uuid IS NULL OR department_id <> $2)
        )
        "#,
    )
    .bind(dept_name.as_str())
    .bind(except.map(|id| id.into_uuid()))
    .fetch_one(conn)
    .await?;

    Ok(taken)
}

async fn email_taken(
    conn: &mut PgConnection,
    email: &Email,
    except: Option<EmployeeId>,
) -> InventoryResult<bool> {
    let taken: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM employees
            WHERE email = $1 AND ($2::uuid IS NULL OR employee_id <> $2)
        )
        "#,
    )
    .bind(email.as_str())
    .bind(except.map(|id| id.into_uuid()))
    .fetch_one(conn)
    .await?;

    Ok(taken)
}

async fn serial_taken(
    conn: &mut PgConnection,
    serial_number: &SerialNumber,
    except: Option<AssetId>,
) -> InventoryResult<bool> {
    let taken: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM assets
            WHERE serial_number = $1 AND ($2::uuid IS NULL OR asset_id <> $2)
        )
        "#,
    )
    .bind(serial_number.as_str())
    .bind(except.map(|id| id.into_uuid()))
    .fetch_one(conn)
    .await?;

    Ok(taken)
}

async fn employees_in(
    conn: &mut PgConnection,
    department_id: DepartmentId,
) -> InventoryResult<Vec<Employee>> {
    let rows = sqlx::query_as::<_, EmployeeRow>(
        r#"
        SELECT employee_id, full_name, email, department_id
        FROM employees
        WHERE department_id = $1
        ORDER BY created_at, employee_id
        "#,
    )
    .bind(department_id.as_uuid())
    .fetch_all(conn)
    .await?;

    Ok(rows.into_iter().map(EmployeeRow::into_employee).collect())
}

// ============================================================================
// Department Repository Implementation
// ============================================================================

impl DepartmentRepository for PgInventoryRepository {
    async fn list_with_employees(&self) -> InventoryResult<Vec<DepartmentWithEmployees>> {
        // One snapshot for both queries
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let departments = sqlx::query_as::<_, DepartmentRow>(
            r#"
            SELECT department_id, dept_name, location
            FROM departments
            ORDER BY created_at, department_id
            "#,
        )
        .fetch_all(&mut *tx)
        .await?;

        let employees = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT employee_id, full_name, email, department_id
            FROM employees
            ORDER BY created_at, employee_id
            "#,
        )
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        let mut by_department: HashMap<Uuid, Vec<Employee>> = HashMap::new();
        for row in employees {
            by_department
                .entry(row.department_id)
                .or_default()
                .push(row.into_employee());
        }

        Ok(departments
            .into_iter()
            .map(|row| {
                let employees = by_department.remove(&row.department_id).unwrap_or_default();
                DepartmentWithEmployees {
                    department: row.into_department(),
                    employees,
                }
            })
            .collect())
    }

    async fn find_department(
        &self,
        id: DepartmentId,
    ) -> InventoryResult<Option<DepartmentWithEmployees>> {
        let mut conn = self.pool.acquire().await?;

        let row = sqlx::query_as::<_, DepartmentRow>(
            "SELECT department_id, dept_name, location FROM departments WHERE department_id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&mut *conn)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let employees = employees_in(&mut conn, id).await?;
        Ok(Some(DepartmentWithEmployees {
            department: row.into_department(),
            employees,
        }))
    }

    async fn employees_of(&self, id: DepartmentId) -> InventoryResult<Option<Vec<Employee>>> {
        let mut conn = self.pool.acquire().await?;

        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM departments WHERE department_id = $1)",
        )
        .bind(id.as_uuid())
        .fetch_one(&mut *conn)
        .await?;

        if !exists {
            return Ok(None);
        }

        employees_in(&mut conn, id).await.map(Some)
    }

    async fn create_department(&self, department: &Department) -> InventoryResult<()> {
        let mut tx = self.pool.begin().await?;

        if dept_name_taken(&mut tx, &department.dept_name, None).await? {
            return Err(InventoryError::DepartmentNameTaken);
        }

        sqlx::query(
            r#"
            INSERT INTO departments (department_id, dept_name, location)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(department.department_id.as_uuid())
        .bind(department.dept_name.as_str())
        .bind(department.location.as_ref().map(Location::as_str))
        .execute(&mut *tx)
        .await
        .map_err(translate)?;

        tx.commit().await.map_err(translate)?;
        Ok(())
    }

    async fn update_department(
        &self,
        id: DepartmentId,
        patch: &DepartmentPatch,
    ) -> InventoryResult<DepartmentWithEmployees> {
        let mut tx = self.pool.begin().await?;

        let current = department_for_update(&mut tx, id)
            .await?
            .ok_or(InventoryError::DepartmentNotFound)?;

        let changes = patch.resolve(&current);
        if changes.is_empty() {
            let employees = employees_in(&mut tx, id).await?;
            tx.commit().await?;
            return Ok(DepartmentWithEmployees {
                department: current,
                employees,
            });
        }

        if let Some(dept_name) = &changes.dept_name {
            if dept_name_taken(&mut tx, dept_name, Some(id)).await? {
                return Err(InventoryError::DepartmentNameTaken);
            }
        }

        let mut updated = current;
        changes.apply_to(&mut updated);

        sqlx::query(
            r#"
            UPDATE departments
            SET dept_name = $2, location = $3, updated_at = NOW()
            WHERE department_id = $1
            "#,
        )
        .bind(id.as_uuid())
        .bind(updated.dept_name.as_str())
        .bind(updated.location.as_ref().map(Location::as_str))
        .execute(&mut *tx)
        .await
        .map_err(translate)?;

        let employees = employees_in(&mut tx, id).await?;
        tx.commit().await.map_err(translate)?;
        Ok(DepartmentWithEmployees {
            department: updated,
            employees,
        })
    }

    async fn delete_department(&self, id: DepartmentId) -> InventoryResult<DepartmentRemoval> {
        let mut tx = self.pool.begin().await?;

        // Blocks new employees from referencing the department until commit
        if department_for_update(&mut tx, id).await?.is_none() {
            return Err(InventoryError::DepartmentNotFound);
        }

        let assets_unassigned = sqlx::query(
            r#"
            UPDATE assets
            SET employee_id = NULL, updated_at = NOW()
            WHERE employee_id IN (SELECT employee_id FROM employees WHERE department_id = $1)
            "#,
        )
        .bind(id.as_uuid())
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let employees_removed = sqlx::query("DELETE FROM employees WHERE department_id = $1")
            .bind(id.as_uuid())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM departments WHERE department_id = $1")
            .bind(id.as_uuid())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(DepartmentRemoval {
            employees_removed,
            assets_unassigned,
        })
    }
}

// ============================================================================
// Employee Repository Implementation
// ============================================================================

impl EmployeeRepository for PgInventoryRepository {
    async fn list_employees(&self) -> InventoryResult<Vec<Employee>> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT employee_id, full_name, email, department_id
            FROM employees
            ORDER BY created_at, employee_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(EmployeeRow::into_employee).collect())
    }

    async fn find_employee(&self, id: EmployeeId) -> InventoryResult<Option<Employee>> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT employee_id, full_name, email, department_id
            FROM employees
            WHERE employee_id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(EmployeeRow::into_employee))
    }

    async fn create_employee(&self, employee: &Employee) -> InventoryResult<()> {
        let mut tx = self.pool.begin().await?;

        if !department_exists(&mut tx, employee.department_id).await? {
            return Err(InventoryError::UnknownDepartment);
        }

        if email_taken(&mut tx, &employee.email, None).await? {
            return Err(InventoryError::EmailTaken);
        }

        sqlx::query(
            r#"
            INSERT INTO employees (employee_id, full_name, email, department_id)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(employee.employee_id.as_uuid())
        .bind(employee.full_name.as_str())
        .bind(employee.email.as_str())
        .bind(employee.department_id.as_uuid())
        .execute(&mut *tx)
        .await
        .map_err(translate)?;

        tx.commit().await.map_err(translate)?;
        Ok(())
    }

    async fn update_employee(
        &self,
        id: EmployeeId,
        patch: &EmployeePatch,
    ) -> InventoryResult<Employee> {
        let mut tx = self.pool.begin().await?;

        let current = employee_for_update(&mut tx, id)
            .await?
            .ok_or(InventoryError::EmployeeNotFound)?;

        let changes = patch.resolve(&current);
        if changes.is_empty() {
            return Ok(current);
        }

        if let Some(email) = &changes.email {
            if email_taken(&mut tx, email, Some(id)).await? {
                return Err(InventoryError::EmailTaken);
            }
        }

        if let Some(department_id) = changes.department_id {
            if !department_exists(&mut tx, department_id).await? {
                return Err(InventoryError::UnknownDepartment);
            }
        }

        let mut updated = current;
        changes.apply_to(&mut updated);

        sqlx::query(
            r#"
            UPDATE employees
            SET full_name = $2, email = $3, department_id = $4, updated_at = NOW()
            WHERE employee_id = $1
            "#,
        )
        .bind(id.as_uuid())
        .bind(updated.full_name.as_str())
        .bind(updated.email.as_str())
        .bind(updated.department_id.as_uuid())
        .execute(&mut *tx)
        .await
        .map_err(translate)?;

        tx.commit().await.map_err(translate)?;
        Ok(updated)
    }

    async fn delete_employee(&self, id: EmployeeId) -> InventoryResult<u64> {
        let mut tx = self.pool.begin().await?;

        if employee_for_update(&mut tx, id).await?.is_none() {
            return Err(InventoryError::EmployeeNotFound);
        }

        let assets_unassigned = sqlx::query(
            "UPDATE assets SET employee_id = NULL, updated_at = NOW() WHERE employee_id = $1",
        )
        .bind(id.as_uuid())
        .execute(&mut *tx)
        .await?
        .rows_affected();

        sqlx::query("DELETE FROM employees WHERE employee_id = $1")
            .bind(id.as_uuid())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(assets_unassigned)
    }
}

// ============================================================================
// Asset Repository Implementation
// ============================================================================

const ASSET_WITH_OWNER_SELECT: &str = r#"
    SELECT
        a.asset_id,
        a.asset_name,
        a.serial_number,
        a.asset_type,
        a.purchase_date,
        a.employee_id,
        e.full_name     AS owner_full_name,
        e.email         AS owner_email,
        e.department_id AS owner_department_id,
        d.dept_name     AS owner_dept_name,
        d.location      AS owner_location
    FROM assets a
    LEFT JOIN employees e ON e.employee_id = a.employee_id
    LEFT JOIN departments d ON d.department_id = e.department_id
"#;

impl AssetRepository for PgInventoryRepository {
    async fn list_with_owner(&self) -> InventoryResult<Vec<AssetWithOwner>> {
        let query = format!("{ASSET_WITH_OWNER_SELECT} ORDER BY a.created_at, a.asset_id");
        let rows = sqlx::query_as::<_, AssetWithOwnerRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(AssetWithOwnerRow::into_read_model).collect())
    }

    async fn find_asset(&self, id: AssetId) -> InventoryResult<Option<AssetWithOwner>> {
        let query = format!("{ASSET_WITH_OWNER_SELECT} WHERE a.asset_id = $1");
        let row = sqlx::query_as::<_, AssetWithOwnerRow>(&query)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(AssetWithOwnerRow::into_read_model))
    }

    async fn create_asset(&self, asset: &Asset) -> InventoryResult<()> {
        let mut tx = self.pool.begin().await?;

        if let Some(employee_id) = asset.employee_id {
            if !employee_exists(&mut tx, employee_id).await? {
                return Err(InventoryError::UnknownEmployee);
            }
        }

        if serial_taken(&mut tx, &asset.serial_number, None).await? {
            return Err(InventoryError::SerialNumberTaken);
        }

        sqlx::query(
            r#"
            INSERT INTO assets (
                asset_id,
                asset_name,
                serial_number,
                asset_type,
                purchase_date,
                employee_id
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(asset.asset_id.as_uuid())
        .bind(asset.asset_name.as_str())
        .bind(asset.serial_number.as_str())
        .bind(asset.asset_type.as_str())
        .bind(asset.purchase_date)
        .bind(asset.employee_id.map(|id| id.into_uuid()))
        .execute(&mut *tx)
        .await
        .map_err(translate)?;

        tx.commit().await.map_err(translate)?;
        Ok(())
    }

    async fn update_asset(&self, id: AssetId, patch: &AssetPatch) -> InventoryResult<Asset> {
        let mut tx = self.pool.begin().await?;

        let current = asset_for_update(&mut tx, id)
            .await?
            .ok_or(InventoryError::AssetNotFound)?;

        let changes = patch.resolve(&current);
        if changes.is_empty() {
            return Ok(current);
        }

        if let Some(serial_number) = &changes.serial_number {
            if serial_taken(&mut tx, serial_number, Some(id)).await? {
                return Err(InventoryError::SerialNumberTaken);
            }
        }

        let mut updated = current;
        changes.apply_to(&mut updated);

        sqlx::query(
            r#"
            UPDATE assets
            SET asset_name = $2,
                serial_number = $3,
                asset_type = $4,
                purchase_date = $5,
                updated_at = NOW()
            WHERE asset_id = $1
            "#,
        )
        .bind(id.as_uuid())
        .bind(updated.asset_name.as_str())
        .bind(updated.serial_number.as_str())
        .bind(updated.asset_type.as_str())
        .bind(updated.purchase_date)
        .execute(&mut *tx)
        .await
        .map_err(translate)?;

        tx.commit().await.map_err(translate)?;
        Ok(updated)
    }

    async fn assign_asset(
        &self,
        id: AssetId,
        employee_id: Option<EmployeeId>,
    ) -> InventoryResult<Asset> {
        let mut tx = self.pool.begin().await?;

        let mut asset = asset_for_update(&mut tx, id)
            .await?
            .ok_or(InventoryError::AssetNotFound)?;

        if let Some(employee_id) = employee_id {
            if !employee_exists(&mut tx, employee_id).await? {
                return Err(InventoryError::UnknownEmployee);
            }
        }

        if asset.employee_id == employee_id {
            return Ok(asset);
        }

        sqlx::query("UPDATE assets SET employee_id = $2, updated_at = NOW() WHERE asset_id = $1")
            .bind(id.as_uuid())
            .bind(employee_id.map(|id| id.into_uuid()))
            .execute(&mut *tx)
            .await
            .map_err(translate)?;

        tx.commit().await.map_err(translate)?;

        asset.employee_id = employee_id;
        Ok(asset)
    }

    async fn delete_asset(&self, id: AssetId) -> InventoryResult<()> {
        let deleted = sqlx::query("DELETE FROM assets WHERE asset_id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        if deleted == 0 {
            return Err(InventoryError::AssetNotFound);
        }
        Ok(())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct DepartmentRow {
    department_id: Uuid,
    dept_name: String,
    location: Option<String>,
}

impl DepartmentRow {
    fn into_department(self) -> Department {
        Department {
            department_id: DepartmentId::from_uuid(self.department_id),
            dept_name: DeptName::from_db(self.dept_name),
            location: self.location.map(Location::from_db),
        }
    }
}

#[derive(sqlx::FromRow)]
struct EmployeeRow {
    employee_id: Uuid,
    full_name: String,
    email: String,
    department_id: Uuid,
}

impl EmployeeRow {
    fn into_employee(self) -> Employee {
        Employee {
            employee_id: EmployeeId::from_uuid(self.employee_id),
            full_name: FullName::from_db(self.full_name),
            email: Email::from_db(self.email),
            department_id: DepartmentId::from_uuid(self.department_id),
        }
    }
}

#[derive(sqlx::FromRow)]
struct AssetRow {
    asset_id: Uuid,
    asset_name: String,
    serial_number: String,
    asset_type: String,
    purchase_date: NaiveDate,
    employee_id: Option<Uuid>,
}

impl AssetRow {
    fn into_asset(self) -> Asset {
        Asset {
            asset_id: AssetId::from_uuid(self.asset_id),
            asset_name: AssetName::from_db(self.asset_name),
            serial_number: SerialNumber::from_db(self.serial_number),
            asset_type: AssetType::from_db(self.asset_type),
            purchase_date: self.purchase_date,
            employee_id: self.employee_id.map(EmployeeId::from_uuid),
        }
    }
}

#[derive(sqlx::FromRow)]
struct AssetWithOwnerRow {
    #[sqlx(flatten)]
    asset: AssetRow,
    owner_full_name: Option<String>,
    owner_email: Option<String>,
    owner_department_id: Option<Uuid>,
    owner_dept_name: Option<String>,
    owner_location: Option<String>,
}

impl AssetWithOwnerRow {
    fn into_read_model(self) -> AssetWithOwner {
        let asset = self.asset.into_asset();

        let owner = match (
            asset.employee_id,
            self.owner_full_name,
            self.owner_email,
            self.owner_department_id,
        ) {
            (Some(employee_id), Some(full_name), Some(email), Some(department_id)) => {
                let department = self.owner_dept_name.map(|dept_name| Department {
                    department_id: DepartmentId::from_uuid(department_id),
                    dept_name: DeptName::from_db(dept_name),
                    location: self.owner_location.map(Location::from_db),
                });
                Some(AssetOwner {
                    employee: Employee {
                        employee_id,
                        full_name: FullName::from_db(full_name),
                        email: Email::from_db(email),
                        department_id: DepartmentId::from_uuid(department_id),
                    },
                    department,
                })
            }
            _ => None,
        };

        AssetWithOwner { asset, owner }
    }
}
