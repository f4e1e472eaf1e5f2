use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::build_app;
use axum_prometheus::PrometheusMetricLayer;
use resale_calculator::config::AppConfig;
use resale_calculator::error::AppError;
use resale_calculator::telemetry;
use resale_calculator::valuation::ValuationEngine;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{error, info};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let catalog = config.catalog.load().map_err(|err| {
        error!(%err, path = ?config.catalog.path, "catalog rejected, refusing to start");
        err
    })?;
    info!(
        categories = catalog.list_categories().len(),
        conditions = catalog.list_conditions().len(),
        path = ?config.catalog.path,
        "catalog loaded"
    );
    let engine = Arc::new(ValuationEngine::new(Arc::new(catalog)));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = build_app(engine, app_state, &config.server.cors_origins).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "resale calculator ready");

    axum::serve(listener, app).await?;
    Ok(())
}
