//! HTTP server assembly / HTTP服务组装

pub mod cors;

pub use cors::build_cors_layer;

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::config::AppConfig;
use crate::error::ConfigError;
use crate::state::AppState;

/// Routes plus CORS and tracing layers / 路由加上跨域与追踪中间件
pub fn build_app(config: &AppConfig, state: Arc<AppState>) -> Result<Router, ConfigError> {
    let cors = build_cors_layer(&config.cors)?;

    Ok(api::router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

/// Bind and serve until Ctrl-C / 启动服务直到收到Ctrl-C
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(config.search.clone()));
    let app = build_app(&config, state)?;

    let bind_addr = config.get_bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server running at http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // no shutdown trigger, keep serving
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
