use serde::{Deserialize, Serialize};

use crate::utils::constants::{FALLBACK_MESSAGE, SIMULATION_MODE};

/// Body of `GET /api/token-status`
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct StatusResult {
    pub valid: bool,
    /// only meaningful when `valid` is false
    #[serde(default)]
    pub mode: Option<String>,
    pub message: String,
}

/// The three mutually exclusive display states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Valid,
    Invalid,
    Error,
}

impl StatusLevel {
    pub const ALL: [StatusLevel; 3] = [StatusLevel::Valid, StatusLevel::Invalid, StatusLevel::Error];

    /// State label attached to the status element
    pub fn label(&self) -> &'static str {
        match self {
            StatusLevel::Valid => "token-valid",
            StatusLevel::Invalid => "token-invalid",
            StatusLevel::Error => "token-error",
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            StatusLevel::Valid => "✅ ",
            StatusLevel::Invalid => "⚠️ ",
            StatusLevel::Error => "❌ ",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == label)
    }

    /// Gauge value exported for the current state
    pub fn gauge_value(&self) -> i64 {
        match self {
            StatusLevel::Valid => 1,
            StatusLevel::Invalid => 0,
            StatusLevel::Error => -1,
        }
    }
}

/// What a single check writes into the display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusView {
    pub fn new(level: StatusLevel, message: &str) -> Self {
        Self {
            level,
            text: format!("{}{}", level.prefix(), message),
        }
    }

    /// Shown when the endpoint could not be reached or answered garbage
    pub fn transport_failure() -> Self {
        Self::new(StatusLevel::Error, FALLBACK_MESSAGE)
    }
}

impl StatusResult {
    pub fn level(&self) -> StatusLevel {
        if self.valid {
            StatusLevel::Valid
        } else if self.mode.as_deref() == Some(SIMULATION_MODE) {
            StatusLevel::Invalid
        } else {
            StatusLevel::Error
        }
    }

    pub fn to_view(&self) -> StatusView {
        StatusView::new(self.level(), &self.message)
    }
}
