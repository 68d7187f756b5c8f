use prometheus::{Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry};
use tracing::info;
use std::sync::Arc;
use tokio::sync::OnceCell;

// Declare the static OnceCell to hold the Metrics.
static METRICS_INSTANCE: OnceCell<Arc<Metrics>> = OnceCell::const_new();

/// Asynchronously initializes and gets a reference to the static `Metrics`.
pub async fn get_metrics() -> &'static Arc<Metrics> {
    METRICS_INSTANCE.get_or_init(|| async {
        info!("Initializing Metrics ...");
        Metrics::new()}
    ).await
}


#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,

    // Poller metrics
    pub status_checks: IntCounterVec,
    pub status_check_duration: Histogram,
    pub status_level: IntGauge,
    pub last_check_unix: IntGauge,

    // Config/runtime
    pub config_validation_errors: IntCounter,
    pub up: IntGauge,
}

impl Metrics {
    fn new() -> Arc<Self> {
        let registry = Registry::new_custom(Some("tokenstatus".into()), None).unwrap();

        let metrics: Arc<Metrics> = Arc::new(Self {
            // Poller
            status_checks: IntCounterVec::new(Opts::new("status_checks_total", "Token status checks by outcome"),&["outcome"],).unwrap(),
            status_check_duration: Histogram::with_opts(HistogramOpts::new("status_check_duration_seconds", "Token status check duration seconds").buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0])).unwrap(),
            status_level: IntGauge::new("status_level", "Displayed state: 1 valid, 0 invalid (simulation), -1 error").unwrap(),
            last_check_unix: IntGauge::new("last_check_unix_seconds", "Timestamp of the last completed check").unwrap(),

            // Config/runtime
            config_validation_errors: IntCounter::new("config_validation_errors_total","Validation errors during startup",).unwrap(),
            up: IntGauge::new("up", "1 if service is healthy").unwrap(),

            registry,
        });

        // Register all metrics in the registry
        let reg = &metrics.registry;
        reg.register(Box::new(metrics.status_checks.clone())).unwrap();
        reg.register(Box::new(metrics.status_check_duration.clone())).unwrap();
        reg.register(Box::new(metrics.status_level.clone())).unwrap();
        reg.register(Box::new(metrics.last_check_unix.clone())).unwrap();
        reg.register(Box::new(metrics.config_validation_errors.clone())).unwrap();
        reg.register(Box::new(metrics.up.clone())).unwrap();

        metrics
    }
}
