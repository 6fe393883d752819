use anyhow::Context;
use dotenvy::dotenv;
use lexia_server::{router, ServerConfig};
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,lexia_server=debug,tower_http=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = ServerConfig::from_env().context("invalid server configuration")?;
    if !config.index_file().is_file() {
        tracing::warn!(
            "no index.html in {}; build the site with `trunk build` first",
            config.dist_dir.display()
        );
    }

    let port = config.port;
    tracing::info!(
        "Starting server on port {} ({}), serving {}",
        port,
        config.environment.as_str(),
        config.dist_dir.display()
    );
    let app = router(config);

    let listener = TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("failed to bind port {}", port))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("server stopped unexpectedly")?;
    Ok(())
}
