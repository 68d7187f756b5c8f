use serde::Serialize;

use crate::helpers::time::now_i64;
use crate::status::{StatusLevel, StatusView};
use crate::utils::constants::{PLACEHOLDER_TEXT, STATUS_ELEMENT_CLASS};

/// The node in the page header that shows token health
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusElement {
    pub id: String,
    pub text: String,
    /// class list; base class first, at most one state label
    pub classes: Vec<String>,
    /// unix seconds of the last render, None while the placeholder is shown
    pub updated_at: Option<i64>,
}

impl StatusElement {
    pub fn placeholder(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            text: PLACEHOLDER_TEXT.to_owned(),
            classes: vec![STATUS_ELEMENT_CLASS.to_owned()],
            updated_at: None,
        }
    }

    /// Replace text and state label in one step.
    /// Every state label is removed before the new one is added.
    pub fn apply(&mut self, view: &StatusView) {
        self.clear_state_labels();
        self.classes.push(view.level.label().to_owned());
        self.text = view.text.clone();
        self.updated_at = Some(now_i64());
    }

    pub fn clear_state_labels(&mut self) {
        self.classes
            .retain(|class| StatusLevel::from_label(class).is_none());
    }

    pub fn state_labels(&self) -> Vec<&str> {
        self.classes
            .iter()
            .map(String::as_str)
            .filter(|class| StatusLevel::from_label(class).is_some())
            .collect()
    }

    pub fn level(&self) -> Option<StatusLevel> {
        self.classes
            .iter()
            .find_map(|class| StatusLevel::from_label(class))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<div id="{}" class="{}">{}</div>"#,
            escape_html(&self.id),
            escape_html(&self.classes.join(" ")),
            escape_html(&self.text)
        )
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
