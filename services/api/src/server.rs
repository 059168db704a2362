use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::contract_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use franchise_contract::config::AppConfig;
use franchise_contract::error::AppError;
use franchise_contract::postal::ViaCepClient;
use franchise_contract::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let postal = ViaCepClient::new(&config.postal)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        postal: Arc::new(postal),
    };

    let app = contract_routes()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        postal_directory = %config.postal.base_url,
        "franchise contract service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
