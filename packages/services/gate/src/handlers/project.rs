//! 프로젝트 자산 핸들러
//!
//! 인증 게이트를 통과한 요청만 도달합니다. 해석과 읽기는 mg-core의
//! `ProjectStore`가 수행하고, 여기서는 HTTP로 렌더링만 합니다.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::error::Result;
use crate::state::AppState;

/// 프로젝트 엔트리 목록 응답
#[derive(Debug, Serialize)]
pub struct ProjectEntries {
    /// 엔트리 이름 목록 (순서는 의미 없음)
    pub data: Vec<String>,
}

/// 파일 내용 응답
#[derive(Debug, Serialize)]
pub struct FileContent {
    pub data: String,
}

/// GET /api/projects/{name}
pub async fn open_project(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<ProjectEntries>> {
    let entries = state.store.open_project(&name)?;
    Ok(Json(ProjectEntries {
        data: entries.into_iter().collect(),
    }))
}

/// GET /api/files/{*path}
pub async fn read_file(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
) -> Result<Json<FileContent>> {
    let data = state.store.read_file(&path)?;
    Ok(Json(FileContent { data }))
}
