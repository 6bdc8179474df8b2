use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use school_activities::config::Config;
use school_activities::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = Config::from_env().context("invalid configuration")?;
    let store = config.build_store().context("failed to load activities")?;
    info!(
        activities = store.len().await,
        seed = ?config.activities_file,
        "activity registry ready"
    );

    let app = web::router(store, &config.static_dir);

    let addr = config.addr();
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config
                .fallback_addr()
                .with_context(|| format!("could not bind {}: {}", addr, e))?;
            warn!("could not bind {}: {}. trying fallback {}", addr, e, fallback);
            TcpListener::bind(fallback)
                .await
                .with_context(|| format!("could not bind fallback {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("server listening on http://{}", bound_addr);
    info!("open http://{}/ to browse activities", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
