//! Error Envelope - JSON body of every non-2xx response
//!
//! ```json
//! { "status": 409, "message": "Department name must be unique", "traceId": "…" }
//! ```

use serde::{Deserialize, Serialize};

/// エラーレスポンスの JSON ボディ
///
/// `trace_id` はハンドラ内では分からないため空で生成され、
/// リクエスト境界のミドルウェア（`kernel::trace`）が後から埋めます。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    /// HTTP ステータスコード
    pub status: u16,
    /// ユーザー向けメッセージ（5xx の場合は汎用メッセージのみ）
    pub message: String,
    /// リクエスト追跡 ID
    pub trace_id: String,
}

impl ErrorEnvelope {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            trace_id: String::new(),
        }
    }

    /// 追跡 ID を設定
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = trace_id.into();
        self
    }
}
