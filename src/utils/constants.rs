//! Shared constants and invariants

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 300_000;
pub const DEFAULT_STATUS_PATH: &str = "/api/token-status";
pub const DEFAULT_METRICS_PATH: &str = "/metrics";

// Page boundary
pub const DEFAULT_HEADER_SELECTOR: &str = ".header";
pub const DEFAULT_ELEMENT_ID: &str = "token-status";
pub const STATUS_ELEMENT_CLASS: &str = "token-status";
pub const PLACEHOLDER_TEXT: &str = "Verifica token in corso...";

// Backend contract
pub const SIMULATION_MODE: &str = "simulazione";
pub const FALLBACK_MESSAGE: &str = "Errore verifica token";
