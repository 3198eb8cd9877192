use crate::bootstrap::Widget;
use crate::markup::Markup;
use crate::panel::PanelUpdate;
use std::collections::BTreeMap;

/// Binding between dashboard state changes and whatever displays them.
///
/// Elements are addressed by the fixed ids of the page contract.
pub trait View {
    fn replace_html(&mut self, element_id: &str, markup: Markup);
    fn set_text(&mut self, element_id: &str, text: &str);
    fn activate(&mut self, widget: Widget);

    fn apply(&mut self, update: &PanelUpdate) {
        self.replace_html(update.panel.container_id(), update.markup.clone());
    }
}

/// In-memory view that records element contents so a full page can be
/// assembled from them.
#[derive(Debug, Clone, Default)]
pub struct PageView {
    html: BTreeMap<String, Markup>,
    text: BTreeMap<String, String>,
    widgets: Vec<Widget>,
    writes: Vec<String>,
}

impl PageView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn html(&self, element_id: &str) -> Option<&Markup> {
        self.html.get(element_id)
    }

    pub fn text(&self, element_id: &str) -> Option<&str> {
        self.text.get(element_id).map(String::as_str)
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Element ids in the order their content was replaced.
    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }
}

impl View for PageView {
    fn replace_html(&mut self, element_id: &str, markup: Markup) {
        self.writes.push(element_id.to_string());
        self.html.insert(element_id.to_string(), markup);
    }

    fn set_text(&mut self, element_id: &str, text: &str) {
        self.writes.push(element_id.to_string());
        self.text.insert(element_id.to_string(), text.to_string());
    }

    fn activate(&mut self, widget: Widget) {
        self.widgets.push(widget);
    }
}
