//! Gate 미들웨어
//!
//! 요청 ID 부여와 인증 게이트를 정의합니다.
//!
//! 인증 게이트는 모든 인바운드 요청에 대해 다음 순서로 판정합니다:
//!
//! 1. 면제 경로(정확 일치)면 토큰 검사 없이 통과
//! 2. 전송 슬롯 우선순위대로 토큰 추출 (body → query → 헤더 → Authorization)
//! 3. 토큰이 없으면 401 "No token provided."
//! 4. 토큰이 있으면 한 번만 검증; 실패하면 401 "Failed to authenticate",
//!    성공하면 claims를 요청 extensions에 붙이고 다음 핸들러 실행

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use mg_core::auth::TokenSlots;

use crate::state::AppState;

/// 인증 게이트가 버퍼링하는 body 최대 크기
const BODY_LIMIT: usize = 2 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct RequestId(#[allow(dead_code)] pub String);

tokio::task_local! {
    static REQUEST_ID: String;
}

pub fn current_request_id() -> Option<String> {
    REQUEST_ID.try_with(|id| id.clone()).ok()
}

pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = Uuid::new_v4().to_string();
    req.extensions_mut().insert(RequestId(id.clone()));
    let mut resp = REQUEST_ID.scope(id.clone(), async move { next.run(req).await }).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        resp.headers_mut().insert("x-request-id", value);
    }
    resp
}

/// 거부 종류
///
/// 두 종류 모두 401로 끝나지만, 응답 메시지로 구분 가능해야 합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectKind {
    /// 어느 슬롯에서도 토큰을 찾지 못함
    NoTokenProvided,

    /// 토큰은 있으나 검증 실패 (서명 불일치, 형식 오류, 만료)
    AuthenticationFailed,
}

impl RejectKind {
    pub fn message(self) -> &'static str {
        match self {
            RejectKind::NoTokenProvided => "No token provided.",
            RejectKind::AuthenticationFailed => "Failed to authenticate",
        }
    }
}

/// 거부 응답 JSON
#[derive(Debug, Serialize)]
struct RejectBody {
    code: u16,
    success: bool,
    message: &'static str,
}

fn reject(kind: RejectKind) -> Response {
    let body = RejectBody {
        code: 401,
        success: false,
        message: kind.message(),
    };
    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}

/// 인증 게이트
pub async fn authenticate(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    // 1. 면제 경로는 토큰 검사 없이 통과
    if state.exempt_paths.contains(req.uri().path()) {
        return next.run(req).await;
    }

    // body 슬롯 확인을 위해 버퍼링 후 요청을 복원
    let (mut parts, body) = req.into_parts();
    let bytes = match axum::body::to_bytes(body, BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(_) => {
            return crate::error::GateError::BadRequest {
                message: "Failed to read request body".to_string(),
            }
            .into_response();
        }
    };

    // 2. 전송 슬롯 우선순위대로 추출
    let body_token = body_json_token(&bytes);
    let query_token = parts.uri.query().and_then(query_token);
    let slots = TokenSlots {
        body: body_token.as_deref(),
        query: query_token.as_deref(),
        header: header_str(&parts.headers, "x-access-token"),
        authorization: header_str(&parts.headers, "authorization"),
    };

    // 3. 토큰 부재
    let Some(token) = slots.resolve() else {
        return reject(RejectKind::NoTokenProvided);
    };

    // 4. 검증은 요청당 정확히 한 번
    match state.validator.validate(&token) {
        Ok(claims) => {
            parts.extensions.insert(claims);
            let req = Request::from_parts(parts, Body::from(bytes));
            next.run(req).await
        }
        Err(err) => {
            tracing::debug!("Token verification failed: {}", err);
            reject(RejectKind::AuthenticationFailed)
        }
    }
}

/// body가 JSON 객체이면 `token` 필드 추출
fn body_json_token(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }
    let value: serde_json::Value = serde_json::from_slice(bytes).ok()?;
    value
        .get("token")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

/// query string에서 `token` 파라미터 추출 (percent 인코딩 해제 포함)
fn query_token(query: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "token")
        .map(|(_, value)| value.into_owned())
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
