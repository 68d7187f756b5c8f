use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;

use crate::display::element::{escape_html, StatusElement};

pub type SharedPage = Arc<RwLock<Page>>;

/// In-process model of the hosting page: a header region and its children
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub header_selector: String,
    pub header: Vec<StatusElement>,
}

impl Page {
    pub fn new(header_selector: &str) -> Self {
        Self {
            header_selector: header_selector.to_owned(),
            header: Vec::new(),
        }
    }

    pub fn shared(self) -> SharedPage {
        Arc::new(RwLock::new(self))
    }

    /// Create the status element with placeholder text unless one with `id` exists.
    /// Returns true when a new element was appended.
    pub fn ensure_status_element(&mut self, id: &str) -> bool {
        if self.element(id).is_some() {
            return false;
        }
        debug!("appending status element '{}' to '{}'", id, self.header_selector);
        self.header.push(StatusElement::placeholder(id));
        true
    }

    pub fn element(&self, id: &str) -> Option<&StatusElement> {
        self.header.iter().find(|el| el.id == id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut StatusElement> {
        self.header.iter_mut().find(|el| el.id == id)
    }

    pub fn count(&self, id: &str) -> usize {
        self.header.iter().filter(|el| el.id == id).count()
    }

    /// Header region rendered as an HTML fragment
    pub fn render_header(&self) -> String {
        let class = self.header_selector.trim_start_matches('.');
        let children: String = self.header.iter().map(StatusElement::to_html).collect();
        format!(r#"<header class="{}">{}</header>"#, escape_html(class), children)
    }
}
