//! Gate 앱 상태

use std::collections::HashSet;

use mg_core::auth::TokenValidator;
use mg_core::project::ProjectStore;

use crate::config::Config;

/// 앱 상태
///
/// 모든 핸들러와 미들웨어에서 공유하는 상태입니다. 요청 간에 변하는
/// 상태는 없습니다.
pub struct AppState {
    /// 설정
    pub config: Config,

    /// 토큰 검증기
    pub validator: TokenValidator,

    /// 인증 면제 경로 (정확 일치)
    pub exempt_paths: HashSet<String>,

    /// 프로젝트 자산 저장소
    pub store: ProjectStore,
}

impl AppState {
    /// 새 상태 생성
    pub fn new(config: Config) -> Self {
        let validator = TokenValidator::new(config.paseto_keys.clone());
        let exempt_paths = config.exempt_paths.iter().cloned().collect();
        let store = ProjectStore::new(&config.project_root);
        Self {
            config,
            validator,
            exempt_paths,
            store,
        }
    }
}
