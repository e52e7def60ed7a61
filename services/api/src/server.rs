use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_therapy_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use hf_therapy::config::AppConfig;
use hf_therapy::error::AppError;
use hf_therapy::telemetry;
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

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let calculators = config.calculators;
    let app = with_therapy_routes(calculators)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        device_eligibility = calculators.device_eligibility,
        safety_checker = calculators.safety_checker,
        gdmt_optimizer = calculators.gdmt_optimizer,
        "therapy advisor ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
