//! /health 핸들러

use axum::Json;
use serde_json::{json, Value};

/// 헬스 체크
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
