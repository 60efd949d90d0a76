//! 토큰 Claims
//!
//! 검증에 성공한 토큰의 페이로드 구조입니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access Token Claims (PASETO v4.local 페이로드)
///
/// Gate가 검증하고 복호화하는 토큰의 내용입니다. 요청 컨텍스트에 붙어
/// 요청 수명 동안만 유지됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Subject (호출자 ID)
    pub sub: String,

    /// Role 목록
    #[serde(default)]
    pub roles: Vec<String>,

    /// 발급 시각
    pub iat: DateTime<Utc>,

    /// 만료 시각
    pub exp: DateTime<Utc>,
}

impl AccessTokenClaims {
    /// 만료 여부 확인
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.exp
    }

    /// 특정 role 보유 확인
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// 남은 TTL (초)
    pub fn remaining_ttl(&self) -> i64 {
        let diff = self.exp - Utc::now();
        diff.num_seconds().max(0)
    }
}
