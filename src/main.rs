use tokio::net::TcpListener;

use user_service::{app, config::AppConfig, shutdown::shutdown_signal, telemetry, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let cfg = AppConfig::from_env()?;
    let app = app(AppState::in_memory());

    let listener = TcpListener::bind(cfg.bind_addr).await?;
    tracing::info!("user-service listening on {}", cfg.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("user-service stopped");
    Ok(())
}
