use crate::cli::ServeArgs;
use crate::infra::{AppState, CrmWebhook, InMemoryLeadRepository, LoggingNotifier};
use crate::routes::with_lead_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use madfam_leads::config::AppConfig;
use madfam_leads::error::AppError;
use madfam_leads::leads::LeadCaptureService;
use madfam_leads::telemetry;
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

    let webhook = CrmWebhook::from_config(
        config.leads.webhook_url.clone(),
        config.leads.webhook_timeout,
    )?;
    if matches!(webhook, CrmWebhook::Disabled) {
        info!("APP_LEAD_WEBHOOK_URL not set; CRM webhook disabled");
    }

    let lead_service = Arc::new(
        LeadCaptureService::new(
            Arc::new(InMemoryLeadRepository::default()),
            Arc::new(LoggingNotifier::default()),
            Arc::new(webhook),
        )
        .with_default_locale(config.leads.default_locale),
    );

    let app = with_lead_routes(lead_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        default_locale = config.leads.default_locale.code(),
        "lead intake service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
