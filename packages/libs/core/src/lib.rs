//! mg-core: Mungan 공통 핵심 라이브러리
//!
//! 이 크레이트는 Gate 서비스가 사용하는 핵심 타입과 로직을 제공합니다.
//!
//! # 모듈 구조
//!
//! - `auth`: 인증 토큰 추출 및 검증 로직
//! - `project`: 신뢰 루트 아래의 프로젝트 자산 접근
//! - `error`: 공통 에러 타입

pub mod auth;
pub mod error;
pub mod project;

pub use error::{Error, Result};
