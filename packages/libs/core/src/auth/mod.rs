//! 인증 관련 타입 및 로직
//!
//! # 개요
//!
//! Mungan의 인증은 요청 단위로 동작합니다. 요청마다 토큰을 한 번 추출하고,
//! 한 번 검증하며, 성공하면 디코딩된 claims를 요청 컨텍스트에 붙입니다.
//!
//! - **추출**: 전송 슬롯 우선순위 (body → query → 커스텀 헤더 → Authorization)
//! - **검증**: PASETO v4.local 대칭키, 설정으로 주입된 키 재료 사용

mod claims;
mod token;

pub use claims::AccessTokenClaims;
pub use token::{TokenSlots, TokenValidator};
