//! Request boundary - trace identifiers and the catch-all for unexpected failures
//!
//! `attach_trace_id` は全ルートの外側に置くミドルウェアです。
//! ハンドラやミドルウェアが返したエラーレスポンス（[`ErrorEnvelope`] を
//! 拡張に持つもの）に、リクエスト ID を `traceId` として書き込みます。

use std::any::Any;

use axum::body::Body;
use axum::extract::Request;
use axum::http::header::CONTENT_LENGTH;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::app_error::AppError;
use crate::error::envelope::ErrorEnvelope;

/// Header carrying the per-request identifier
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Stamp the request id into every error envelope produced downstream
pub async fn attach_trace_id(req: Request, next: Next) -> Response {
    let trace_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_default();

    let response = next.run(req).await;
    stamp_trace_id(response, &trace_id)
}

fn stamp_trace_id(mut response: Response, trace_id: &str) -> Response {
    let Some(envelope) = response.extensions_mut().remove::<ErrorEnvelope>() else {
        return response;
    };

    let envelope = envelope.with_trace_id(trace_id);
    let body = match serde_json::to_vec(&envelope) {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize error envelope");
            return response;
        }
    };

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(body))
}

/// Render a handler panic as a generic 500 envelope
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(panic = %detail, "Request handler panicked");
    AppError::internal("Request handler panicked").into_response()
}
