use anyhow::Context;
use clap::Parser;
use hush_server::{site_router, ContactInbox, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hush_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::parse();
    let inbox = ContactInbox::open(&config.inbox)
        .with_context(|| format!("open contact inbox {}", config.inbox.display()))?;
    if !config.dist.join("index.html").is_file() {
        tracing::warn!(dist = %config.dist.display(), "no index.html in bundle directory; run `trunk build` first");
    }

    let app = site_router(inbox, &config.dist);
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("bind {}", config.bind))?;

    tracing::info!(addr = %config.bind, dist = %config.dist.display(), "hush-server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
