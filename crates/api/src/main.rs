use std::sync::Arc;

use anyhow::Context;

use cookbook_infra::{InMemoryRegistry, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cookbook_observability::init();

    let config = ServerConfig::from_env().context("invalid server configuration")?;

    // The registry lives for the whole process; nothing is persisted.
    let registry = Arc::new(InMemoryRegistry::new());
    let app = cookbook_api::app::build_app(registry);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
