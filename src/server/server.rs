use anyhow::{Context, Result};
use axum::Router;
use tracing::info;

use crate::config::settings::SettingsConfig;
use crate::display::SharedPage;
use crate::observability::metrics::{get_metrics, Metrics};
use crate::observability::routes::MetricsState;
use crate::server::display_routes::DisplayState;

#[derive(Clone)]
pub struct AppState {
    pub metrics_state: MetricsState,
    pub display_state: DisplayState,
}

impl AppState {
    pub fn new(metrics: &Metrics, page: SharedPage, element_id: &str) -> Self {
        Self {
            metrics_state: MetricsState::new(metrics.registry.clone()),
            display_state: DisplayState::new(page, element_id),
        }
    }
}

/// Router serving the rendered header, the display snapshot and (optionally) metrics.
pub async fn app(settings_config: &SettingsConfig, page: SharedPage) -> Router {
    let metrics = get_metrics().await;
    let state = AppState::new(metrics, page, &settings_config.page.element_id);

    Router::new()
        .merge(state.metrics_state.router(&settings_config.metrics))
        .merge(state.display_state.router())
        .with_state(state)
}

/// Bind the configured address and serve until the process ends.
pub async fn start(settings_config: &SettingsConfig, page: SharedPage) -> Result<()> {
    let app = app(settings_config, page).await;

    let bind_addr = &settings_config.server.host;
    let port = &settings_config.server.port;
    let listener = tokio::net::TcpListener::bind(format!("{}:{}", bind_addr, port))
        .await
        .with_context(|| format!("cannot bind {}:{}", bind_addr, port))?;
    info!("http server listening on {}:{}", bind_addr, port);

    get_metrics().await.up.set(1);
    axum::serve(listener, app).await?;
    Ok(())
}
