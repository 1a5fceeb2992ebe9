use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dorkgen_backend::{config, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dorkgen_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration / 加载配置
    let app_config = config::load_config()?;
    tracing::info!("Server will listen on {}", app_config.get_bind_address());
    tracing::info!(
        "Search links use {} (encoded: {})",
        app_config.search.engine_url,
        app_config.search.encode_query
    );

    server::run(app_config).await
}
