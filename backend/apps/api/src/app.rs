//! Router Assembly
//!
//! Everything under `/api` except `/api/ping` requires an authenticated
//! identity. Layers, outermost first:
//! CORS, request id, trace span, request id echo, trace id stamping,
//! panic catcher, credential gate.

use std::sync::Arc;

use auth::AuthConfig;
use auth::domain::repository::UserRepository;
use auth::middleware::{AuthMiddlewareState, authenticate, require_authenticated};
use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue, Method, header};
use axum::routing::get;
use axum::{Json, Router, middleware};
use inventory::{InventoryRepository, inventory_router_generic};
use kernel::error::app_error::AppError;
use kernel::trace::{REQUEST_ID_HEADER, attach_trace_id, panic_response};
use serde::Serialize;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer, ExposeHeaders};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::Span;

#[derive(Serialize)]
struct PingResponse {
    message: &'static str,
}

/// GET /api/ping
async fn ping() -> Json<PingResponse> {
    Json(PingResponse { message: "pong" })
}

async fn not_found() -> AppError {
    AppError::not_found("Resource not found")
}

fn request_span(req: &Request) -> Span {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    tracing::info_span!(
        "request",
        method = %req.method(),
        uri = %req.uri(),
        request_id = %request_id,
        user = tracing::field::Empty,
    )
}

/// CORS policy for the browser frontend
pub fn cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .expose_headers(ExposeHeaders::list([HeaderName::from_static(
            REQUEST_ID_HEADER,
        )]))
        .allow_credentials(true)
}

/// Build the application router for any store implementation
pub fn build_router<U, I>(
    users: Arc<U>,
    inventory: I,
    auth_config: Arc<AuthConfig>,
    cors: CorsLayer,
) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    I: InventoryRepository,
{
    let protected = inventory_router_generic(inventory).route_layer(
        middleware::from_fn_with_state(auth_config.clone(), require_authenticated),
    );

    let api = Router::new().route("/ping", get(ping)).merge(protected);

    let gate = AuthMiddlewareState {
        repo: users,
        config: auth_config,
    };

    Router::new()
        .nest("/api", api)
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(gate, authenticate::<U>))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(attach_trace_id))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::ensure_admin;
    use crate::config::AdminCredentials;
    use auth::infra::memory::InMemoryUserRepository;
    use axum::body::Body;
    use axum::http::StatusCode;
    use axum::response::Response;
    use inventory::infra::memory::InMemoryInventoryRepository;
    use platform::crypto::to_base64;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn app() -> Router {
        let users = Arc::new(InMemoryUserRepository::new());
        let config = Arc::new(AuthConfig {
            realm: Some("inventory".into()),
            ..Default::default()
        });
        let admin = AdminCredentials {
            user_name: "admin".into(),
            password: "admin123".into(),
        };
        ensure_admin(users.clone(), config.clone(), &admin)
            .await
            .unwrap();

        build_router(
            users,
            InMemoryInventoryRepository::new(),
            config,
            cors_layer(Vec::new()),
        )
    }

    fn admin_auth() -> String {
        format!("Basic {}", to_base64(b"admin:admin123"))
    }

    fn request(method: &str, uri: &str, auth: Option<&str>, body: Option<Value>) -> Request {
        let mut builder = axum::http::Request::builder().method(method).uri(uri);
        if let Some(auth) = auth {
            builder = builder.header(header::AUTHORIZATION, auth);
        }
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn json_of(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        }
    }

    #[tokio::test]
    async fn test_ping_is_public() {
        let app = app().await;

        let response = app
            .clone()
            .oneshot(request("GET", "/api/ping", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_of(response).await, json!({ "message": "pong" }));

        let response = app
            .oneshot(request("GET", "/api/ping", Some("Basic !!!"), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_protected_route_challenges() {
        let app = app().await;
        let wrong = format!("Basic {}", to_base64(b"admin:nope"));

        for auth in [None, Some("Basic !!!"), Some(wrong.as_str())] {
            let response = app
                .clone()
                .oneshot(request("GET", "/api/departments", auth, None))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(
                response.headers()[header::WWW_AUTHENTICATE],
                "Basic realm=\"inventory\""
            );
            let request_id = response.headers()[REQUEST_ID_HEADER]
                .to_str()
                .unwrap()
                .to_owned();

            let body = json_of(response).await;
            assert_eq!(body["status"], 401);
            assert_eq!(body["message"], "Authentication required");
            assert_eq!(body["traceId"], request_id);
        }
    }

    #[tokio::test]
    async fn test_trace_id_echoes_client_request_id() {
        let app = app().await;

        let mut req = request("GET", "/api/assets/not-a-uuid", Some(&admin_auth()), None);
        req.headers_mut()
            .insert(REQUEST_ID_HEADER, HeaderValue::from_static("req-7"));

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_of(response).await["traceId"], "req-7");
    }

    #[tokio::test]
    async fn test_unknown_route_uses_envelope() {
        let response = app()
            .await
            .oneshot(request("GET", "/nowhere", None, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_of(response).await["status"], 404);
    }

    #[tokio::test]
    async fn test_assignment_survives_owner_removal() {
        let app = app().await;
        let auth = admin_auth();
        let auth = Some(auth.as_str());

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/departments",
                auth,
                Some(json!({ "deptName": "Ops", "location": "Berlin" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let location = response.headers()[header::LOCATION]
            .to_str()
            .unwrap()
            .to_owned();
        let dept = json_of(response).await;
        assert_eq!(location, format!("/api/departments/{}", dept["id"].as_str().unwrap()));

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/employees",
                auth,
                Some(json!({
                    "fullName": "Jane Doe",
                    "email": "jane@x.com",
                    "departmentId": dept["id"]
                })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let jane = json_of(response).await;

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/assets",
                auth,
                Some(json!({
                    "assetName": "Laptop-1",
                    "serialNumber": "S-001",
                    "assetType": "Laptop",
                    "purchaseDate": "2024-01-15"
                })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let laptop = json_of(response).await;
        let asset_uri = format!("/api/assets/{}", laptop["id"].as_str().unwrap());

        let response = app
            .clone()
            .oneshot(request(
                "PATCH",
                &asset_uri,
                auth,
                Some(json!({ "employeeId": jane["id"] })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .clone()
            .oneshot(request(
                "DELETE",
                &format!("/api/employees/{}", jane["id"].as_str().unwrap()),
                auth,
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .clone()
            .oneshot(request("GET", &asset_uri, auth, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let details = json_of(response).await;
        assert_eq!(details["serialNumber"], "S-001");
        assert!(details["employee"].is_null());

        let response = app
            .oneshot(request("GET", "/api/departments", auth, None))
            .await
            .unwrap();
        let departments = json_of(response).await;
        assert_eq!(departments[0]["deptName"], "Ops");
        assert_eq!(departments[0]["employees"], json!([]));
    }
}
