//! 토큰 추출 및 검증
//!
//! Gate에서 요청마다 토큰을 추출하고 검증하는 로직입니다.

use crate::error::{Error, Result};

use super::claims::AccessTokenClaims;
use base64::{engine::general_purpose, Engine as _};
use rusty_paseto::prelude::*;

/// 토큰 전송 슬롯
///
/// 호출자는 토큰을 네 가지 슬롯 중 하나로 전달할 수 있습니다.
/// 우선순위는 고정이며, 비어 있지 않은 첫 슬롯이 선택됩니다:
///
/// 1. body 필드 `token`
/// 2. query 파라미터 `token`
/// 3. `X-Access-Token` 헤더
/// 4. `Authorization` 헤더 (`Bearer ` 접두사는 제거)
#[derive(Debug, Default)]
pub struct TokenSlots<'a> {
    pub body: Option<&'a str>,
    pub query: Option<&'a str>,
    pub header: Option<&'a str>,
    pub authorization: Option<&'a str>,
}

impl TokenSlots<'_> {
    /// 우선순위에 따라 토큰 선택
    pub fn resolve(&self) -> Option<String> {
        for slot in [self.body, self.query, self.header] {
            if let Some(value) = slot {
                let value = value.trim();
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }

        if let Some(value) = self.authorization {
            // 접두사를 먼저 떼어내야 "Bearer " 단독 헤더가 빈 슬롯으로 처리됨
            let value = value.trim_start();
            let value = value.strip_prefix("Bearer ").unwrap_or(value).trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }

        None
    }
}

/// 토큰 검증기
///
/// 설정으로 주입된 대칭키 재료로 토큰을 검증하고 claims를 추출합니다.
/// 요청당 검증은 정확히 한 번이며, 재시도나 결과 캐싱은 없습니다.
pub struct TokenValidator {
    /// PASETO 복호화 키 재료 (현재 + 이전 키들)
    symmetric_keys: Vec<String>,
}

impl TokenValidator {
    /// 새 검증기 생성
    pub fn new(symmetric_keys: Vec<String>) -> Self {
        Self { symmetric_keys }
    }

    /// 토큰 검증 및 Claims 추출
    ///
    /// 서명 불일치, 형식 오류, 만료는 모두 검증 실패로 수렴합니다.
    pub fn validate(&self, token: &str) -> Result<AccessTokenClaims> {
        let token = token.trim();

        if self.symmetric_keys.is_empty() {
            return Err(Error::InvalidToken {
                reason: "no verification keys configured".to_string(),
            });
        }

        for raw in &self.symmetric_keys {
            let Some(material) = parse_key_material(raw) else {
                continue;
            };

            let key = PasetoSymmetricKey::<V4, Local>::from(Key::from(material));
            let parsed = PasetoParser::<V4, Local>::default().parse(token, &key);
            match parsed {
                Ok(value) => {
                    let claims: AccessTokenClaims = serde_json::from_value(value)?;
                    if claims.is_expired() {
                        return Err(Error::TokenExpired);
                    }
                    return Ok(claims);
                }
                Err(_) => continue,
            }
        }

        Err(Error::InvalidToken {
            reason: "token verification failed".to_string(),
        })
    }
}

/// 키 재료 파싱 (hex 64자, base64/base64url, 또는 raw 32바이트)
fn parse_key_material(raw: &str) -> Option<[u8; 32]> {
    let raw = raw.trim();

    if raw.len() == 64 && raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        let mut out = [0u8; 32];
        for (i, pair) in raw.as_bytes().chunks(2).enumerate() {
            let hi = (pair[0] as char).to_digit(16)?;
            let lo = (pair[1] as char).to_digit(16)?;
            out[i] = ((hi << 4) | lo) as u8;
        }
        return Some(out);
    }

    for engine in [&general_purpose::URL_SAFE_NO_PAD, &general_purpose::STANDARD] {
        if let Ok(bytes) = engine.decode(raw) {
            if let Ok(material) = <[u8; 32]>::try_from(bytes.as_slice()) {
                return Some(material);
            }
        }
    }

    <[u8; 32]>::try_from(raw.as_bytes()).ok()
}
