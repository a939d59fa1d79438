use std::net::SocketAddr;
use std::sync::Arc;

use linkscreen_core::{RecordStore, config_file};
use linkscreen_web::router;
use linkscreen_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "linkscreen_web=info,linkscreen_core=info,tower_http=info".into()),
        )
        .init();

    let config = config_file::load_config();

    let csv_path = std::env::var("LINKSCREEN_CSV")
        .ok()
        .or_else(|| config.storage.as_ref().and_then(|s| s.csv_path.clone()))
        .unwrap_or_else(|| "iglink.csv".to_string());

    let addr: SocketAddr = std::env::var("LINKSCREEN_ADDR")
        .ok()
        .or_else(|| config.server.as_ref().and_then(|s| s.addr.clone()))
        .unwrap_or_else(|| "0.0.0.0:5001".to_string())
        .parse()?;

    if !std::path::Path::new(&csv_path).exists() {
        tracing::warn!(path = %csv_path, "queue file does not exist yet; the page will show an error until it does");
    }

    let state = Arc::new(AppState {
        store: RecordStore::new(&csv_path),
    });
    let app = router(state);

    tracing::info!(%addr, csv = %csv_path, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
