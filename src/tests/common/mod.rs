// tests/common/mod.rs
pub use axum::Router;
pub use serde_json::json;
pub use tokio::task::JoinHandle;

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{anyhow, Error, Result};
use axum::routing::get;
use reqwest::Client;

use crate::display::{Page, SharedPage};
use crate::poller::StatusPoller;
use crate::sources::{FetchStatus, HttpStatusSource};
use crate::status::StatusResult;

pub const ELEMENT_ID: &str = "token-status";

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

/// Backend answering `/api/token-status` with a fixed JSON body
pub async fn spawn_status_backend(body: serde_json::Value) -> (JoinHandle<()>, SocketAddr) {
    let router = Router::new().route(
        "/api/token-status",
        get(move || {
            let body = body.clone();
            async move { axum::Json(body) }
        }),
    );
    spawn_axum(router).await
}

/// An address nothing listens on
pub async fn refused_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

pub fn build_reqwest_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("reqwest client")
}

pub fn new_page() -> SharedPage {
    Page::new(".header").shared()
}

pub fn http_poller(addr: SocketAddr, page: SharedPage) -> StatusPoller<HttpStatusSource> {
    let source = HttpStatusSource::new(
        build_reqwest_client(),
        format!("http://{}/api/token-status", addr),
    );
    StatusPoller::new(source, page, ELEMENT_ID, Duration::from_secs(300)).unwrap()
}

/// Scripted source: replays queued answers, then repeats the last one
#[derive(Clone, Debug, Default)]
pub struct StubSource {
    answers: Arc<Mutex<VecDeque<Result<StatusResult, String>>>>,
    pub calls: Arc<AtomicUsize>,
    pub in_flight: Arc<AtomicUsize>,
    pub max_in_flight: Arc<AtomicUsize>,
    pub delay: Option<Duration>,
}

impl StubSource {
    pub fn answering(answers: Vec<Result<StatusResult, String>>) -> Self {
        Self {
            answers: Arc::new(Mutex::new(answers.into())),
            ..Default::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FetchStatus for StubSource {
    async fn fetch_status(&self) -> Result<StatusResult, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let answer = {
            let mut answers = self.answers.lock().unwrap();
            if answers.len() > 1 {
                answers.pop_front()
            } else {
                answers.front().cloned()
            }
        };
        match answer {
            Some(Ok(result)) => Ok(result),
            Some(Err(msg)) => Err(anyhow!(msg)),
            None => Err(anyhow!("no scripted answer")),
        }
    }
}

pub fn status(valid: bool, mode: Option<&str>, message: &str) -> StatusResult {
    StatusResult {
        valid,
        mode: mode.map(str::to_owned),
        message: message.to_owned(),
    }
}
