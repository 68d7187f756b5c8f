use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::debug;

use crate::display::SharedPage;
use crate::helpers::time::to_rfc3339;
use crate::server::server::AppState;
use crate::status::StatusLevel;

#[derive(Clone)]
pub struct DisplayState {
    page: SharedPage,
    element_id: String,
}

/// JSON view of the status element
#[derive(Debug, Serialize)]
pub struct DisplaySnapshot {
    pub id: String,
    pub text: String,
    pub classes: Vec<String>,
    pub level: Option<StatusLevel>,
    pub updated_at: Option<String>,
}

impl DisplayState {
    pub fn new(page: SharedPage, element_id: &str) -> Self {
        Self { page, element_id: element_id.to_owned() }
    }

    pub fn router(&self) -> Router<AppState> {
        Router::new()
            .route("/", get(render_header))
            .route("/api/display", get(display_snapshot))
    }
}

async fn render_header(State(state): State<AppState>) -> Html<String> {
    let page = state.display_state.page.read().await;
    Html(page.render_header())
}

async fn display_snapshot(State(state): State<AppState>) -> Response {
    let display = &state.display_state;
    let page = display.page.read().await;
    match page.element(&display.element_id) {
        Some(element) => {
            debug!("display snapshot for '{}'", element.id);
            Json(DisplaySnapshot {
                id: element.id.clone(),
                text: element.text.clone(),
                classes: element.classes.clone(),
                level: element.level(),
                updated_at: element.updated_at.and_then(to_rfc3339),
            })
            .into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            format!("status element '{}' not found", display.element_id),
        )
            .into_response(),
    }
}
