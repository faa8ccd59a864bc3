use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_advisory_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use coldflow::config::AppConfig;
use coldflow::error::AppError;
use coldflow::telemetry;
use coldflow::workflows::advisory::AdvisoryService;
use coldflow::workflows::rulebook::RuleBook;
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
    if let Some(rules) = args.rules.take() {
        config.rules_path = Some(rules);
    }

    telemetry::init(&config.telemetry)?;

    let rulebook: RuleBook = config.rulebook()?;
    info!(
        zones = rulebook.zones.len(),
        source = config
            .rules_path
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "built-in".to_string()),
        "rule book active"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = Arc::new(AdvisoryService::new(Arc::new(rulebook)));

    let app = with_advisory_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "cold-climate advisor ready");

    axum::serve(listener, app).await?;
    Ok(())
}
