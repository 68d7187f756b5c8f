use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::config::settings::SettingsConfig;
use crate::display::SharedPage;
use crate::helpers::time::{get_instant, now_i64};
use crate::observability::metrics::get_metrics;
use crate::sources::fetch::{FetchStatus, HttpStatusSource};
use crate::status::{StatusLevel, StatusView};

const TRANSPORT_ERROR: &str = "transport_error";

/// Polls the token status endpoint and renders each answer into the page header
#[derive(Debug)]
pub struct StatusPoller<S> {
    source: Arc<S>,
    page: SharedPage,
    element_id: String,
    interval: Duration,
}

impl StatusPoller<HttpStatusSource> {
    pub fn from_settings(settings: &SettingsConfig, page: SharedPage) -> Result<Self> {
        let source = HttpStatusSource::from_config(&settings.poller)?;
        Self::new(
            source,
            page,
            settings.page.element_id.clone(),
            Duration::from_millis(settings.poller.interval_ms),
        )
    }
}

impl<S> StatusPoller<S>
where
    S: FetchStatus + Send + Sync + 'static,
{
    /// `interval` must be non-zero
    pub fn new(source: S, page: SharedPage, element_id: impl Into<String>, interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            bail!("status poller interval must be greater than zero");
        }
        Ok(Self {
            source: Arc::new(source),
            page,
            element_id: element_id.into(),
            interval,
        })
    }

    pub fn page(&self) -> &SharedPage {
        &self.page
    }

    /// Idempotent: appends the placeholder element only if it is missing
    pub async fn ensure_display_element(&self) {
        let created = self.page.write().await.ensure_status_element(&self.element_id);
        if created {
            info!("status element '{}' created", self.element_id);
        }
    }

    /// One request, one display mutation. Failures end up in the error state, never in `Err`.
    pub async fn check_status(&self) -> StatusView {
        let metrics = get_metrics().await;
        let start = get_instant();

        let (view, outcome) = match self.source.fetch_status().await {
            Ok(result) => {
                let view = result.to_view();
                let outcome = view.level.label().trim_start_matches("token-");
                (view, outcome)
            }
            Err(err) => {
                error!("Errore verifica token: {:#}", err);
                (StatusView::transport_failure(), TRANSPORT_ERROR)
            }
        };

        metrics
            .status_check_duration
            .observe(start.elapsed().as_secs_f64());
        metrics.status_checks.with_label_values(&[outcome]).inc();
        metrics.status_level.set(view.level.gauge_value());
        metrics.last_check_unix.set(now_i64());

        self.render(&view).await;
        match view.level {
            StatusLevel::Valid => info!("token status: {}", view.text),
            StatusLevel::Invalid | StatusLevel::Error => warn!("token status: {}", view.text),
        }
        view
    }

    async fn render(&self, view: &StatusView) {
        let mut page = self.page.write().await;
        if page.element(&self.element_id).is_none() {
            warn!("status element '{}' missing, recreating it", self.element_id);
            page.ensure_status_element(&self.element_id);
        }
        if let Some(element) = page.element_mut(&self.element_id) {
            element.apply(view);
        }
    }

    /// Ensure the element, check immediately, then once per interval until stopped.
    /// A tick that comes due while a check is in flight is skipped, so checks never overlap.
    /// Dropping the returned handle stops the loop as well.
    pub async fn start(self) -> PollerHandle {
        self.ensure_display_element().await;

        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let period = self.interval;
        info!(
            "status poller started, element '{}', interval {:?}",
            self.element_id, period
        );

        let join = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        debug!("token status check cycle start");
                        self.check_status().await;
                    }
                    _ = shutdown_rx.changed() => {
                        info!("status poller stopped");
                        break;
                    }
                }
            }
        });

        PollerHandle { shutdown: shutdown_tx, join }
    }
}

/// Start/stop handle for a running poller
#[derive(Debug)]
pub struct PollerHandle {
    shutdown: watch::Sender<bool>,
    join: JoinHandle<()>,
}

impl PollerHandle {
    /// Signal the loop and wait for it to exit. An in-flight check finishes first.
    pub async fn stop(self) -> Result<()> {
        let _ = self.shutdown.send(true);
        self.join
            .await
            .map_err(|err| anyhow!("status poller task failed: {}", err))
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }
}
