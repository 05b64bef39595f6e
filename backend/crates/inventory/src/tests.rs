//! Scenario tests for the inventory crate, backed by the in-memory store

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::asset::{
    AssetQueryUseCase, AssignAssetUseCase, CreateAssetInput, CreateAssetUseCase,
    UpdateAssetInput, UpdateAssetUseCase,
};
use crate::application::department::{
    CreateDepartmentInput, CreateDepartmentUseCase, DeleteDepartmentUseCase,
    DepartmentQueryUseCase, UpdateDepartmentInput, UpdateDepartmentUseCase,
};
use crate::application::employee::{
    CreateEmployeeInput, CreateEmployeeUseCase, DeleteEmployeeUseCase, EmployeeQueryUseCase,
    UpdateEmployeeInput, UpdateEmployeeUseCase,
};
use crate::domain::entities::{Asset, Department, Employee};
use crate::domain::value_objects::{DepartmentId, EmployeeId, FieldError};
use crate::error::InventoryError;
use crate::infra::memory::InMemoryInventoryRepository;

type Repo = InMemoryInventoryRepository;

fn store() -> Arc<Repo> {
    Arc::new(InMemoryInventoryRepository::new())
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn department(repo: &Arc<Repo>, name: &str) -> Department {
    CreateDepartmentUseCase::new(repo.clone())
        .execute(CreateDepartmentInput {
            dept_name: name.into(),
            location: None,
        })
        .await
        .unwrap()
}

async fn employee(repo: &Arc<Repo>, name: &str, email: &str, dept: DepartmentId) -> Employee {
    CreateEmployeeUseCase::new(repo.clone())
        .execute(CreateEmployeeInput {
            full_name: name.into(),
            email: email.into(),
            department_id: Some(dept),
        })
        .await
        .unwrap()
}

async fn asset(repo: &Arc<Repo>, serial: &str, owner: Option<EmployeeId>) -> Asset {
    CreateAssetUseCase::new(repo.clone())
        .execute(CreateAssetInput {
            asset_name: format!("Laptop {serial}"),
            serial_number: serial.into(),
            asset_type: "Laptop".into(),
            purchase_date: Some(date(2024, 1, 15)),
            employee_id: owner,
        })
        .await
        .unwrap()
}

mod department_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_list_with_employees() {
        let repo = store();
        let ops = department(&repo, "Ops").await;
        employee(&repo, "Jane Doe", "jane@x.com", ops.department_id).await;

        let listed = DepartmentQueryUseCase::new(repo.clone()).list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].department.dept_name.as_str(), "Ops");
        assert_eq!(listed[0].employees.len(), 1);
        assert_eq!(listed[0].employees[0].email.as_str(), "jane@x.com");
    }

    #[tokio::test]
    async fn test_duplicate_name_conflicts() {
        let repo = store();
        department(&repo, "Ops").await;

        let err = CreateDepartmentUseCase::new(repo.clone())
            .execute(CreateDepartmentInput {
                dept_name: "  Ops ".into(),
                location: Some("Berlin".into()),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::DepartmentNameTaken));
        assert_eq!(repo.counts().await, (1, 0, 0));
    }

    #[tokio::test]
    async fn test_blank_name_rejected() {
        let repo = store();
        let err = CreateDepartmentUseCase::new(repo.clone())
            .execute(CreateDepartmentInput {
                dept_name: "   ".into(),
                location: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            InventoryError::Validation(FieldError::Required { .. })
        ));
        assert_eq!(err.to_string(), "Department name is required");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_admit_one() {
        let repo = store();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    CreateDepartmentUseCase::new(repo)
                        .execute(CreateDepartmentInput {
                            dept_name: "Ops".into(),
                            location: None,
                        })
                        .await
                })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => created += 1,
                Err(InventoryError::DepartmentNameTaken) => {}
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert_eq!(created, 1);
        assert_eq!(repo.counts().await.0, 1);
    }

    #[tokio::test]
    async fn test_update_same_name_is_noop() {
        let repo = store();
        let ops = department(&repo, "Ops").await;

        let updated = UpdateDepartmentUseCase::new(repo.clone())
            .execute(
                ops.department_id,
                UpdateDepartmentInput {
                    dept_name: Some("Ops".into()),
                    location: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.department, ops);
    }

    #[tokio::test]
    async fn test_update_returns_members_from_same_write() {
        let repo = store();
        let ops = department(&repo, "Ops").await;
        employee(&repo, "Jane Doe", "jane@x.com", ops.department_id).await;

        let updated = UpdateDepartmentUseCase::new(repo.clone())
            .execute(
                ops.department_id,
                UpdateDepartmentInput {
                    dept_name: Some("Operations".into()),
                    location: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.department.dept_name.as_str(), "Operations");
        assert_eq!(updated.employees.len(), 1);
        assert_eq!(updated.employees[0].email.as_str(), "jane@x.com");
    }

    #[tokio::test]
    async fn test_update_to_taken_name_conflicts() {
        let repo = store();
        department(&repo, "Ops").await;
        let hr = department(&repo, "HR").await;

        let err = UpdateDepartmentUseCase::new(repo.clone())
            .execute(
                hr.department_id,
                UpdateDepartmentInput {
                    dept_name: Some("Ops".into()),
                    location: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::DepartmentNameTaken));

        let hr = DepartmentQueryUseCase::new(repo.clone())
            .get(hr.department_id)
            .await
            .unwrap();
        assert_eq!(hr.department.dept_name.as_str(), "HR");
    }

    #[tokio::test]
    async fn test_blank_location_clears() {
        let repo = store();
        let ops = CreateDepartmentUseCase::new(repo.clone())
            .execute(CreateDepartmentInput {
                dept_name: "Ops".into(),
                location: Some("Berlin".into()),
            })
            .await
            .unwrap();
        assert!(ops.location.is_some());

        let updated = UpdateDepartmentUseCase::new(repo.clone())
            .execute(
                ops.department_id,
                UpdateDepartmentInput {
                    dept_name: None,
                    location: Some("".into()),
                },
            )
            .await
            .unwrap();
        assert!(updated.department.location.is_none());
    }

    #[tokio::test]
    async fn test_delete_cascades_to_employees_and_unassigns_assets() {
        let repo = store();
        let ops = department(&repo, "Ops").await;
        let hr = department(&repo, "HR").await;
        let jane = employee(&repo, "Jane Doe", "jane@x.com", ops.department_id).await;
        let john = employee(&repo, "John Roe", "john@x.com", hr.department_id).await;
        let laptop = asset(&repo, "S-001", Some(jane.employee_id)).await;
        let phone = asset(&repo, "S-002", Some(john.employee_id)).await;

        let removal = DeleteDepartmentUseCase::new(repo.clone())
            .execute(ops.department_id)
            .await
            .unwrap();
        assert_eq!(removal.employees_removed, 1);
        assert_eq!(removal.assets_unassigned, 1);
        assert_eq!(repo.counts().await, (1, 1, 2));

        let assets = AssetQueryUseCase::new(repo.clone());
        assert!(assets.get(laptop.asset_id).await.unwrap().owner.is_none());
        assert!(assets.get(phone.asset_id).await.unwrap().owner.is_some());

        let err = EmployeeQueryUseCase::new(repo.clone())
            .get(jane.employee_id)
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::EmployeeNotFound));
    }

    #[tokio::test]
    async fn test_missing_department_is_not_found() {
        let repo = store();
        let query = DepartmentQueryUseCase::new(repo.clone());

        assert!(matches!(
            query.get(DepartmentId::new()).await.unwrap_err(),
            InventoryError::DepartmentNotFound
        ));
        assert!(matches!(
            query.employees(DepartmentId::new()).await.unwrap_err(),
            InventoryError::DepartmentNotFound
        ));
        assert!(matches!(
            DeleteDepartmentUseCase::new(repo.clone())
                .execute(DepartmentId::new())
                .await
                .unwrap_err(),
            InventoryError::DepartmentNotFound
        ));
    }
}

mod employee_tests {
    use super::*;

    #[tokio::test]
    async fn test_email_is_case_insensitive_unique() {
        let repo = store();
        let ops = department(&repo, "Ops").await;
        employee(&repo, "Jane Doe", "jane@x.com", ops.department_id).await;

        let err = CreateEmployeeUseCase::new(repo.clone())
            .execute(CreateEmployeeInput {
                full_name: "Jane Again".into(),
                email: "JANE@X.COM".into(),
                department_id: Some(ops.department_id),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::EmailTaken));
    }

    #[tokio::test]
    async fn test_unknown_department_is_bad_request() {
        let repo = store();
        let err = CreateEmployeeUseCase::new(repo.clone())
            .execute(CreateEmployeeInput {
                full_name: "Jane Doe".into(),
                email: "jane@x.com".into(),
                department_id: Some(DepartmentId::new()),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, InventoryError::UnknownDepartment));
        assert_eq!(err.kind().status_code(), 400);
    }

    #[tokio::test]
    async fn test_missing_department_is_required() {
        let repo = store();
        let err = CreateEmployeeUseCase::new(repo.clone())
            .execute(CreateEmployeeInput {
                full_name: "Jane Doe".into(),
                email: "jane@x.com".into(),
                department_id: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Department is required");
    }

    #[tokio::test]
    async fn test_update_keeps_own_email() {
        let repo = store();
        let ops = department(&repo, "Ops").await;
        let jane = employee(&repo, "Jane Doe", "jane@x.com", ops.department_id).await;

        let updated = UpdateEmployeeUseCase::new(repo.clone())
            .execute(
                jane.employee_id,
                UpdateEmployeeInput {
                    full_name: Some("Jane Smith".into()),
                    email: Some("Jane@X.com".into()),
                    department_id: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.full_name.as_str(), "Jane Smith");
        assert_eq!(updated.email.as_str(), "jane@x.com");
    }

    #[tokio::test]
    async fn test_move_to_unknown_department_rejected() {
        let repo = store();
        let ops = department(&repo, "Ops").await;
        let jane = employee(&repo, "Jane Doe", "jane@x.com", ops.department_id).await;

        let err = UpdateEmployeeUseCase::new(repo.clone())
            .execute(
                jane.employee_id,
                UpdateEmployeeInput {
                    department_id: Some(DepartmentId::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::UnknownDepartment));

        let jane = EmployeeQueryUseCase::new(repo.clone())
            .get(jane.employee_id)
            .await
            .unwrap();
        assert_eq!(jane.department_id, ops.department_id);
    }

    #[tokio::test]
    async fn test_delete_unassigns_assets() {
        let repo = store();
        let ops = department(&repo, "Ops").await;
        let jane = employee(&repo, "Jane Doe", "jane@x.com", ops.department_id).await;
        let laptop = asset(&repo, "S-001", Some(jane.employee_id)).await;

        DeleteEmployeeUseCase::new(repo.clone())
            .execute(jane.employee_id)
            .await
            .unwrap();

        let laptop = AssetQueryUseCase::new(repo.clone())
            .get(laptop.asset_id)
            .await
            .unwrap();
        assert!(laptop.owner.is_none());
        assert!(laptop.asset.employee_id.is_none());
        assert_eq!(repo.counts().await, (1, 0, 1));
    }
}

mod asset_tests {
    use super::*;

    #[tokio::test]
    async fn test_serial_conflict() {
        let repo = store();
        asset(&repo, "S-001", None).await;

        let err = CreateAssetUseCase::new(repo.clone())
            .execute(CreateAssetInput {
                asset_name: "Other".into(),
                serial_number: "S-001".into(),
                asset_type: "Monitor".into(),
                purchase_date: Some(date(2023, 6, 1)),
                employee_id: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::SerialNumberTaken));
        assert_eq!(err.kind().status_code(), 409);
    }

    #[tokio::test]
    async fn test_purchase_date_required() {
        let repo = store();
        let err = CreateAssetUseCase::new(repo.clone())
            .execute(CreateAssetInput {
                asset_name: "Laptop".into(),
                serial_number: "S-001".into(),
                asset_type: "Laptop".into(),
                purchase_date: None,
                employee_id: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Purchase date is required");
    }

    #[tokio::test]
    async fn test_owner_details_include_department() {
        let repo = store();
        let ops = department(&repo, "Ops").await;
        let jane = employee(&repo, "Jane Doe", "jane@x.com", ops.department_id).await;
        let laptop = asset(&repo, "S-001", Some(jane.employee_id)).await;

        let details = AssetQueryUseCase::new(repo.clone())
            .get(laptop.asset_id)
            .await
            .unwrap();
        let owner = details.owner.unwrap();
        assert_eq!(owner.employee.employee_id, jane.employee_id);
        assert_eq!(owner.department.unwrap().dept_name.as_str(), "Ops");
    }

    #[tokio::test]
    async fn test_assign_and_unassign() {
        let repo = store();
        let ops = department(&repo, "Ops").await;
        let jane = employee(&repo, "Jane Doe", "jane@x.com", ops.department_id).await;
        let laptop = asset(&repo, "S-001", None).await;
        let assign = AssignAssetUseCase::new(repo.clone());

        let assigned = assign
            .execute(laptop.asset_id, Some(jane.employee_id))
            .await
            .unwrap();
        assert_eq!(assigned.employee_id, Some(jane.employee_id));

        let cleared = assign.execute(laptop.asset_id, None).await.unwrap();
        assert_eq!(cleared.employee_id, None);
    }

    #[tokio::test]
    async fn test_assign_unknown_employee_keeps_owner() {
        let repo = store();
        let ops = department(&repo, "Ops").await;
        let jane = employee(&repo, "Jane Doe", "jane@x.com", ops.department_id).await;
        let laptop = asset(&repo, "S-001", Some(jane.employee_id)).await;

        let err = AssignAssetUseCase::new(repo.clone())
            .execute(laptop.asset_id, Some(EmployeeId::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::UnknownEmployee));

        let current = AssetQueryUseCase::new(repo.clone())
            .get(laptop.asset_id)
            .await
            .unwrap();
        assert_eq!(current.asset.employee_id, Some(jane.employee_id));
    }

    #[tokio::test]
    async fn test_update_keeps_owner_and_checks_serial() {
        let repo = store();
        let ops = department(&repo, "Ops").await;
        let jane = employee(&repo, "Jane Doe", "jane@x.com", ops.department_id).await;
        let laptop = asset(&repo, "S-001", Some(jane.employee_id)).await;
        asset(&repo, "S-002", None).await;
        let update = UpdateAssetUseCase::new(repo.clone());

        let err = update
            .execute(
                laptop.asset_id,
                UpdateAssetInput {
                    serial_number: Some("S-002".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::SerialNumberTaken));

        let renamed = update
            .execute(
                laptop.asset_id,
                UpdateAssetInput {
                    asset_name: Some("ThinkPad".into()),
                    serial_number: Some("S-001".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(renamed.asset_name.as_str(), "ThinkPad");
        assert_eq!(renamed.employee_id, Some(jane.employee_id));
    }
}

mod http_tests {
    use super::*;
    use crate::presentation::inventory_router_generic;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app(repo: &Arc<Repo>) -> Router {
        inventory_router_generic(repo.as_ref().clone())
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_assignment_flow() {
        let repo = store();

        let (status, dept) = send(
            app(&repo),
            "POST",
            "/departments",
            Some(json!({ "deptName": "Ops" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let dept_id = dept["id"].as_str().unwrap().to_owned();

        let (status, jane) = send(
            app(&repo),
            "POST",
            "/employees",
            Some(json!({ "fullName": "Jane Doe", "email": "jane@x.com", "departmentId": dept_id })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let jane_id = jane["id"].as_str().unwrap().to_owned();

        let (status, laptop) = send(
            app(&repo),
            "POST",
            "/assets",
            Some(json!({
                "assetName": "Laptop-1",
                "serialNumber": "S-001",
                "assetType": "Laptop",
                "purchaseDate": "2024-01-15"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(laptop["purchaseDate"], "2024-01-15");
        let asset_uri = format!("/assets/{}", laptop["id"].as_str().unwrap());

        let (status, _) = send(
            app(&repo),
            "PATCH",
            &asset_uri,
            Some(json!({ "employeeId": jane_id })),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, details) = send(app(&repo), "GET", &asset_uri, None).await;
        assert_eq!(details["employee"]["fullName"], "Jane Doe");
        assert_eq!(details["employee"]["department"]["deptName"], "Ops");

        let (status, _) = send(app(&repo), "DELETE", &format!("/employees/{jane_id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, details) = send(app(&repo), "GET", &asset_uri, None).await;
        assert!(details["employee"].is_null());
    }

    #[tokio::test]
    async fn test_conflict_envelope() {
        let repo = store();
        department(&repo, "Ops").await;

        let (status, body) = send(
            app(&repo),
            "POST",
            "/departments",
            Some(json!({ "deptName": "Ops" })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["status"], 409);
        assert_eq!(body["message"], "Department name must be unique");
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        let repo = store();
        let (status, body) = send(app(&repo), "POST", "/employees", Some(json!({}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Full name is required");
    }

    #[tokio::test]
    async fn test_malformed_json_uses_envelope() {
        let repo = store();
        let response = app(&repo)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/departments")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_unknown_ids() {
        let repo = store();
        let missing = DepartmentId::new();

        let (status, body) = send(app(&repo), "GET", &format!("/departments/{missing}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Department not found");

        let laptop = asset(&repo, "S-001", None).await;
        let (status, body) = send(
            app(&repo),
            "PATCH",
            &format!("/assets/{}", laptop.asset_id),
            Some(json!({ "employeeId": EmployeeId::new() })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Employee does not exist");

        let (status, _) = send(app(&repo), "GET", "/assets/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_department_returns_no_content() {
        let repo = store();
        let ops = department(&repo, "Ops").await;
        employee(&repo, "Jane Doe", "jane@x.com", ops.department_id).await;

        let uri = format!("/departments/{}", ops.department_id);
        let (status, _) = send(app(&repo), "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(app(&repo), "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(repo.counts().await, (0, 0, 0));
    }
}
