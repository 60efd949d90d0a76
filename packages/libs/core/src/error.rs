//! 공통 에러 타입
//!
//! Mungan 전체에서 사용되는 에러 타입을 정의합니다.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Mungan 공통 에러
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────────────────────
    // Auth Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("token expired")]
    TokenExpired,

    #[error("invalid token: {reason}")]
    InvalidToken { reason: String },

    // ─────────────────────────────────────────────────────────────────────────────
    // Project Errors
    // ─────────────────────────────────────────────────────────────────────────────
    /// 필수 인자 누락. 메시지는 호출자와의 계약이므로 그대로 노출됩니다.
    #[error("{message}")]
    MissingArgument { message: String },

    /// 대상 없음 (존재하지 않거나 타입이 다름). 메시지는 호출자와의 계약입니다.
    #[error("{message}")]
    NotFound { message: String },

    // ─────────────────────────────────────────────────────────────────────────────
    // IO/Serialization Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// HTTP 상태 코드로 변환
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            Error::MissingArgument { .. } => 400,

            // 401 Unauthorized
            Error::TokenExpired | Error::InvalidToken { .. } => 401,

            // 404 Not Found
            Error::NotFound { .. } => 404,

            // 500 Internal Server Error
            _ => 500,
        }
    }

    /// 에러 코드 (클라이언트용)
    pub fn code(&self) -> &'static str {
        match self {
            Error::TokenExpired => "TOKEN_EXPIRED",
            Error::InvalidToken { .. } => "INVALID_TOKEN",
            Error::MissingArgument { .. } => "MISSING_ARGUMENT",
            Error::NotFound { .. } => "NOT_FOUND",
            Error::Io(_) => "IO_ERROR",
            Error::Json(_) => "JSON_ERROR",
        }
    }
}
