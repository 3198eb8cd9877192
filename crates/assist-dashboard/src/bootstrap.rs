//! Bootstrap tooltip/popover activation.
//!
//! Scans page markup for `data-bs-toggle` triggers and hands one widget per
//! trigger to the view.

use crate::view::View;
use scraper::{Html, Selector};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Tooltip,
    Popover,
}

impl WidgetKind {
    pub fn toggle_value(self) -> &'static str {
        match self {
            Self::Tooltip => "tooltip",
            Self::Popover => "popover",
        }
    }

    /// Bootstrap JS constructor name.
    pub fn constructor(self) -> &'static str {
        match self {
            Self::Tooltip => "Tooltip",
            Self::Popover => "Popover",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    pub kind: WidgetKind,
    pub element_id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Finds every tooltip trigger followed by every popover trigger, each in
/// document order.
pub fn discover_widgets(page_html: &str) -> Vec<Widget> {
    let document = Html::parse_document(page_html);
    let mut widgets = Vec::new();

    for kind in [WidgetKind::Tooltip, WidgetKind::Popover] {
        let query = format!(r#"[data-bs-toggle="{}"]"#, kind.toggle_value());
        let selector = match Selector::parse(&query) {
            Ok(selector) => selector,
            Err(err) => {
                tracing::warn!("skipping {} triggers: {err}", kind.toggle_value());
                continue;
            }
        };

        for element in document.select(&selector) {
            let attrs = element.value();
            widgets.push(Widget {
                kind,
                element_id: attrs.id().map(str::to_string),
                title: attrs
                    .attr("title")
                    .or_else(|| attrs.attr("data-bs-title"))
                    .map(str::to_string),
                content: attrs.attr("data-bs-content").map(str::to_string),
            });
        }
    }

    widgets
}

/// Activates every trigger found in `page_html`; returns how many were found.
pub fn initialize_widgets(view: &mut dyn View, page_html: &str) -> usize {
    let widgets = discover_widgets(page_html);
    let count = widgets.len();
    for widget in widgets {
        view.activate(widget);
    }
    tracing::debug!(count, "bootstrap widgets activated");
    count
}
