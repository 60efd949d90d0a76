//! Mungan Gate
//!
//! 모든 인바운드 요청을 인증 게이트로 판정하고, 통과한 요청에
//! 프로젝트 자산(디렉터리 목록, 파일 내용)을 제공합니다.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod handlers;
mod middleware;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 환경변수 로드
    dotenvy::dotenv().ok();

    // 로깅 초기화
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "mg_gate=debug,tower_http=debug,axum=trace".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 설정 로드
    let config = Config::from_env()?;
    tracing::info!("Starting Gate with config: {:?}", config);

    // 앱 상태 초기화
    let state = Arc::new(AppState::new(config));

    // 라우터 구성
    let app = create_router(state.clone());

    // 서버 시작
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.port));
    tracing::info!("Gate listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// 라우터 생성
fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Project assets
        .route("/api/projects/{name}", get(handlers::project::open_project))
        .route("/api/files/{*path}", get(handlers::project::read_file))
        // Health check
        .route("/health", get(handlers::health::health_check))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(from_fn_with_state(state.clone(), middleware::authenticate))
        .layer(from_fn(middleware::request_id))
        // State
        .with_state(state)
}
