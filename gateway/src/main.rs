use axum::{routing::get, Router};
use axum_prometheus::PrometheusMetricLayer;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    let port: u16 = std::env::var("PORT").ok().and_then(|s| s.parse().ok()).unwrap_or(8000);

    let cfg = sentra_ml::ModelCfg::from_env();
    let state = sentra_ml::AppState::init(cfg);

    let (metric_layer, metric_handle) = PrometheusMetricLayer::pair();
    axum_prometheus::metrics::gauge!(
        "app_info",
        "service" => "sentra",
        "version" => env!("CARGO_PKG_VERSION")
    )
    .set(1.0);

    let app = Router::new()
        .merge(sentra_core::urls::router())
        .merge(sentra_ml::urls::router(state))
        .route("/metrics", get(move || async move { metric_handle.render() }))
        .layer(metric_layer);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("listening on http://{}", addr);
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
