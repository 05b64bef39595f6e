//! Startup Bootstrap
//!
//! First-start provisioning: the administrator account and, optionally, a
//! small sample inventory. Both are skipped once their tables hold data.

use std::sync::Arc;

use auth::AuthConfig;
use auth::application::{RegisterUserInput, RegisterUserUseCase};
use auth::domain::repository::UserRepository;
use chrono::NaiveDate;
use inventory::InventoryRepository;
use inventory::application::asset::{CreateAssetInput, CreateAssetUseCase};
use inventory::application::department::{CreateDepartmentInput, CreateDepartmentUseCase};
use inventory::application::employee::{CreateEmployeeInput, CreateEmployeeUseCase};
use inventory::domain::repository::DepartmentRepository;

use crate::config::AdminCredentials;

/// Create the administrator if the credential store is empty
///
/// Returns whether a user was created.
pub async fn ensure_admin<U>(
    users: Arc<U>,
    config: Arc<AuthConfig>,
    admin: &AdminCredentials,
) -> anyhow::Result<bool>
where
    U: UserRepository,
{
    if users.count().await? > 0 {
        return Ok(false);
    }

    RegisterUserUseCase::new(users, config)
        .execute(RegisterUserInput {
            user_name: admin.user_name.clone(),
            password: admin.password.clone(),
        })
        .await?;

    tracing::info!(user_name = %admin.user_name, "Administrator account created");
    Ok(true)
}

struct SampleDepartment {
    name: &'static str,
    location: &'static str,
}

struct SampleEmployee {
    full_name: &'static str,
    email: &'static str,
    department: usize,
}

struct SampleAsset {
    name: &'static str,
    serial: &'static str,
    kind: &'static str,
    purchased: (i32, u32, u32),
    owner: Option<usize>,
}

const DEPARTMENTS: &[SampleDepartment] = &[
    SampleDepartment {
        name: "Information Technology",
        location: "Istanbul",
    },
    SampleDepartment {
        name: "Finance",
        location: "Ankara",
    },
    SampleDepartment {
        name: "Human Resources",
        location: "Izmir",
    },
    SampleDepartment {
        name: "Operations",
        location: "Bursa",
    },
];

const EMPLOYEES: &[SampleEmployee] = &[
    SampleEmployee {
        full_name: "Ahmet Yilmaz",
        email: "ahmet.yilmaz@example.com",
        department: 0,
    },
    SampleEmployee {
        full_name: "Elif Kaya",
        email: "elif.kaya@example.com",
        department: 1,
    },
    SampleEmployee {
        full_name: "Mehmet Arslan",
        email: "mehmet.arslan@example.com",
        department: 0,
    },
    SampleEmployee {
        full_name: "Ayse Demir",
        email: "ayse.demir@example.com",
        department: 2,
    },
    SampleEmployee {
        full_name: "Emre Aydin",
        email: "emre.aydin@example.com",
        department: 3,
    },
    SampleEmployee {
        full_name: "Zeynep Celik",
        email: "zeynep.celik@example.com",
        department: 1,
    },
];

const ASSETS: &[SampleAsset] = &[
    SampleAsset {
        name: "Dell Latitude 5520",
        serial: "SN-IT-0001",
        kind: "Laptop",
        purchased: (2023, 2, 15),
        owner: Some(0),
    },
    SampleAsset {
        name: "HP ProDesk 400",
        serial: "SN-FIN-0001",
        kind: "Desktop",
        purchased: (2022, 11, 5),
        owner: Some(1),
    },
    SampleAsset {
        name: "MacBook Pro 14",
        serial: "SN-IT-0003",
        kind: "Laptop",
        purchased: (2024, 1, 20),
        owner: Some(2),
    },
    SampleAsset {
        name: "Lenovo ThinkPad E14",
        serial: "SN-HR-0001",
        kind: "Laptop",
        purchased: (2023, 7, 3),
        owner: Some(3),
    },
    SampleAsset {
        name: "Samsung Galaxy S22",
        serial: "SN-OPS-0001",
        kind: "Phone",
        purchased: (2022, 9, 18),
        owner: Some(4),
    },
    SampleAsset {
        name: "Canon MF237",
        serial: "SN-OPS-0002",
        kind: "Printer",
        purchased: (2021, 3, 22),
        owner: None,
    },
    SampleAsset {
        name: "iPhone 13",
        serial: "SN-FIN-0002",
        kind: "Phone",
        purchased: (2022, 12, 1),
        owner: Some(5),
    },
];

/// Insert the sample inventory if no department exists yet
///
/// Returns whether anything was inserted.
pub async fn seed_sample_data<R>(repo: Arc<R>) -> anyhow::Result<bool>
where
    R: InventoryRepository,
{
    if !repo.list_with_employees().await?.is_empty() {
        return Ok(false);
    }

    let mut department_ids = Vec::with_capacity(DEPARTMENTS.len());
    let create_department = CreateDepartmentUseCase::new(repo.clone());
    for sample in DEPARTMENTS {
        let department = create_department
            .execute(CreateDepartmentInput {
                dept_name: sample.name.to_string(),
                location: Some(sample.location.to_string()),
            })
            .await?;
        department_ids.push(department.department_id);
    }

    let mut employee_ids = Vec::with_capacity(EMPLOYEES.len());
    let create_employee = CreateEmployeeUseCase::new(repo.clone());
    for sample in EMPLOYEES {
        let employee = create_employee
            .execute(CreateEmployeeInput {
                full_name: sample.full_name.to_string(),
                email: sample.email.to_string(),
                department_id: department_ids.get(sample.department).copied(),
            })
            .await?;
        employee_ids.push(employee.employee_id);
    }

    let create_asset = CreateAssetUseCase::new(repo.clone());
    for sample in ASSETS {
        let (year, month, day) = sample.purchased;
        create_asset
            .execute(CreateAssetInput {
                asset_name: sample.name.to_string(),
                serial_number: sample.serial.to_string(),
                asset_type: sample.kind.to_string(),
                purchase_date: NaiveDate::from_ymd_opt(year, month, day),
                employee_id: sample
                    .owner
                    .and_then(|index| employee_ids.get(index).copied()),
            })
            .await?;
    }

    tracing::info!(
        departments = DEPARTMENTS.len(),
        employees = EMPLOYEES.len(),
        assets = ASSETS.len(),
        "Sample inventory seeded"
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::infra::memory::InMemoryUserRepository;
    use inventory::infra::memory::InMemoryInventoryRepository;

    fn admin() -> AdminCredentials {
        AdminCredentials {
            user_name: "admin".into(),
            password: "admin123".into(),
        }
    }

    #[tokio::test]
    async fn test_admin_created_once() {
        let users = Arc::new(InMemoryUserRepository::new());
        let config = Arc::new(AuthConfig::default());

        assert!(ensure_admin(users.clone(), config.clone(), &admin()).await.unwrap());
        assert!(!ensure_admin(users.clone(), config, &admin()).await.unwrap());
        assert_eq!(users.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_sample_data_seeded_once() {
        let repo = Arc::new(InMemoryInventoryRepository::new());

        assert!(seed_sample_data(repo.clone()).await.unwrap());
        assert_eq!(repo.counts().await, (4, 6, 7));

        assert!(!seed_sample_data(repo.clone()).await.unwrap());
        assert_eq!(repo.counts().await, (4, 6, 7));
    }
}
