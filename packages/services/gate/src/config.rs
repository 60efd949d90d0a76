//! Gate 설정

use std::env;
use std::path::PathBuf;

/// Gate 설정
#[derive(Debug, Clone)]
pub struct Config {
    /// 서버 포트
    pub port: u16,

    /// 프로젝트 신뢰 루트
    pub project_root: PathBuf,

    /// 인증 없이 통과하는 경로 (정확히 일치해야 함)
    pub exempt_paths: Vec<String>,

    /// PASETO keys (hex / base64 / raw 32바이트)
    pub paseto_keys: Vec<String>,
}

impl Config {
    /// 환경변수에서 설정 로드
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            port: env::var("MG_GATE_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()?,

            project_root: env::var("MG_PROJECT_ROOT")
                .unwrap_or_else(|_| "./projects".to_string())
                .into(),

            exempt_paths: env::var("MG_EXEMPT_PATHS")
                .ok()
                .map(|v| split_csv(&v))
                .unwrap_or_else(|| vec!["/download/exported-files/".to_string()]),

            paseto_keys: env::var("MG_PASETO_KEYS")
                .ok()
                .map(|v| split_csv(&v))
                .unwrap_or_default(),
        })
    }
}

fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_csv() {
        assert_eq!(
            split_csv("/a, /b ,,/c"),
            vec!["/a".to_string(), "/b".to_string(), "/c".to_string()]
        );
        assert!(split_csv("").is_empty());
    }
}
