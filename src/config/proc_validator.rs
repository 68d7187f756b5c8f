//! Configuration validation with aggregated errors.
//! Every issue is collected so a broken config is reported in one pass.

use tracing::{error, info};

use crate::config::settings::{LoggingConfig, PageConfig, PollerConfig, ServiceConfig, SettingsConfig};
use crate::observability::metrics::get_metrics;

/// Routes served by the display router
const RESERVED_PATHS: [&str; 2] = ["/", "/api/display"];

/// Public entrypoint: returns Ok(()) or Err(Vec<String>) containing all issues.
pub async fn validate_service_config(cfg: &ServiceConfig) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    validate_settings(&cfg.settings, &mut errors);

    if errors.is_empty() {
        info!("config valid");
        Ok(())
    } else {
        error!("configuration validation errors ({}):", errors.len());
        for e in &errors {
            error!(" - {}", e);
        }
        get_metrics().await.config_validation_errors.inc();
        Err(errors)
    }
}

/// SETTINGS VALIDATION
fn validate_settings(settings: &SettingsConfig, errors: &mut Vec<String>) {
    validate_poller(&settings.poller, errors);
    validate_page(&settings.page, errors);

    if settings.server.host.trim().is_empty() {
        errors.push("settings.server.host must not be empty".to_string());
    }
    if settings.server.port.parse::<u16>().is_err() {
        errors.push(format!(
            "settings.server.port '{}' must be an integer in range 0-65535",
            settings.server.port
        ));
    }

    // metrics endpoint start with '/'
    if !settings.metrics.path.starts_with('/') {
        errors.push(format!(
            "settings.metrics.path '{}' must start with '/'",
            settings.metrics.path
        ));
    }
    if let Some(segment) = settings
        .metrics
        .path
        .split('/')
        .find(|segment| is_route_pattern(segment))
    {
        errors.push(format!(
            "settings.metrics.path '{}' has segment '{}'; captures and wildcards (':', '*', '{{', '}}') are not allowed",
            settings.metrics.path, segment
        ));
    }
    if RESERVED_PATHS.contains(&settings.metrics.path.as_str()) {
        errors.push(format!(
            "settings.metrics.path '{}' collides with a built-in route",
            settings.metrics.path
        ));
    }

    if let Some(logging) = &settings.logging {
        validate_logging(logging, errors);
    }
}

/// Segments the router would read as a capture or wildcard, or reject outright
fn is_route_pattern(segment: &str) -> bool {
    segment.starts_with(':')
        || segment.starts_with('*')
        || segment.contains('{')
        || segment.contains('}')
}

fn validate_poller(poller: &PollerConfig, errors: &mut Vec<String>) {
    let base_url = poller.base_url.trim();
    if base_url.is_empty() {
        errors.push("settings.poller.base_url cannot be empty".to_string());
    } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        errors.push(format!(
            "settings.poller.base_url '{}' must start with http:// or https://",
            poller.base_url
        ));
    }
    if !poller.path.starts_with('/') {
        errors.push(format!(
            "settings.poller.path '{}' must start with '/'",
            poller.path
        ));
    }
    if poller.interval_ms == 0 {
        errors.push("settings.poller.interval_ms must be > 0".to_string());
    }
    if poller.timeout_ms == Some(0) {
        errors.push("settings.poller.timeout_ms must be > 0 when set".to_string());
    }
}

fn validate_page(page: &PageConfig, errors: &mut Vec<String>) {
    if page.header_selector.trim().is_empty() {
        errors.push("settings.page.header_selector cannot be empty".to_string());
    }
    let id = page.element_id.trim();
    if id.is_empty() || id.contains(char::is_whitespace) {
        errors.push(format!(
            "settings.page.element_id '{}' must be a non-empty id without whitespace",
            page.element_id
        ));
    }
}

fn validate_logging(logging: &LoggingConfig, errors: &mut Vec<String>) {
    let valid = ["trace", "debug", "info", "warn", "error"];
    if !valid.contains(&logging.level.to_lowercase().as_str()) {
        errors.push(format!(
            "settings.logging.level '{}' invalid; allowed: {:?}",
            logging.level, valid
        ));
    }
}
