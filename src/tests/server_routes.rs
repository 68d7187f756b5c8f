#[cfg(test)]
mod test {

use std::time::Duration;

use serde_json::Value;

use crate::config::proc_loader::parse_config;
use crate::poller::StatusPoller;
use crate::server::server::app;
use crate::tests::common::{build_reqwest_client, new_page, spawn_axum, status, StubSource, ELEMENT_ID};

const CONFIG: &str = r#"
settings:
  poller:
    base_url: "http://127.0.0.1:5000"
  server:
    host: 127.0.0.1
    port: "0"
  metrics:
    is_enabled: true
"#;

#[tokio::test]
async fn header_and_snapshot_reflect_last_check() {
    let cfg = parse_config(CONFIG.to_string()).await.unwrap();
    let page = new_page();
    let poller = StatusPoller::new(
        StubSource::answering(vec![Ok(status(false, Some("simulazione"), "Using <fallback>"))]),
        page.clone(),
        ELEMENT_ID,
        Duration::from_secs(300),
    )
    .unwrap();
    poller.ensure_display_element().await;
    poller.check_status().await;

    let (h, addr) = spawn_axum(app(&cfg.settings, page).await).await;
    let client = build_reqwest_client();

    let html = client.get(format!("http://{}/", addr)).send().await.unwrap().text().await.unwrap();
    assert_eq!(
        html,
        r#"<header class="header"><div id="token-status" class="token-status token-invalid">⚠️ Using &lt;fallback&gt;</div></header>"#
    );

    let snapshot: Value = client
        .get(format!("http://{}/api/display", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(snapshot["id"], "token-status");
    assert_eq!(snapshot["text"], "⚠️ Using <fallback>");
    assert_eq!(snapshot["level"], "invalid");
    assert_eq!(snapshot["classes"], serde_json::json!(["token-status", "token-invalid"]));
    assert!(snapshot["updated_at"].as_str().unwrap().ends_with('Z'));

    h.abort();
}

#[tokio::test]
async fn snapshot_before_first_check_is_placeholder() {
    let cfg = parse_config(CONFIG.to_string()).await.unwrap();
    let page = new_page();
    page.write().await.ensure_status_element(ELEMENT_ID);

    let (h, addr) = spawn_axum(app(&cfg.settings, page).await).await;
    let snapshot: Value = build_reqwest_client()
        .get(format!("http://{}/api/display", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(snapshot["text"], "Verifica token in corso...");
    assert!(snapshot["level"].is_null());
    assert!(snapshot["updated_at"].is_null());
    h.abort();
}

#[tokio::test]
async fn missing_element_is_not_found() {
    let cfg = parse_config(CONFIG.to_string()).await.unwrap();
    let (h, addr) = spawn_axum(app(&cfg.settings, new_page()).await).await;

    let resp = build_reqwest_client()
        .get(format!("http://{}/api/display", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    h.abort();
}

#[tokio::test]
async fn metrics_are_exposed_when_enabled() {
    let cfg = parse_config(CONFIG.to_string()).await.unwrap();
    let page = new_page();
    let poller = StatusPoller::new(
        StubSource::answering(vec![Ok(status(true, None, "Token OK"))]),
        page.clone(),
        ELEMENT_ID,
        Duration::from_secs(300),
    )
    .unwrap();
    poller.ensure_display_element().await;
    poller.check_status().await;

    let (h, addr) = spawn_axum(app(&cfg.settings, page).await).await;
    let body = build_reqwest_client()
        .get(format!("http://{}/metrics", addr))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("tokenstatus_status_checks_total"));
    assert!(body.contains("tokenstatus_status_level"));
    h.abort();
}

#[tokio::test]
async fn metrics_route_is_absent_when_disabled() {
    let yaml = CONFIG.replace("is_enabled: true", "is_enabled: false");
    let cfg = parse_config(yaml).await.unwrap();
    let (h, addr) = spawn_axum(app(&cfg.settings, new_page()).await).await;

    let resp = build_reqwest_client()
        .get(format!("http://{}/metrics", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    h.abort();
}

}
