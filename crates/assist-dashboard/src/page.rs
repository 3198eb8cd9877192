//! Full dashboard document: the fixed page contract plus whatever the view
//! currently holds for each element.

use crate::bootstrap::{Widget, WidgetKind};
use crate::markup::escape;
use crate::render::render_loading;
use crate::state::DashboardState;
use crate::view::PageView;
use std::fmt::Write;

pub const REFRESH_BUTTON_ID: &str = "refresh-btn";
pub const TOGGLE_BUTTON_ID: &str = "toggle-processed-btn";
pub const CONFIG_CONTAINER_ID: &str = "config-container";
pub const ACCOUNTS_CONTAINER_ID: &str = "accounts-container";
pub const EMAILS_CONTAINER_ID: &str = "emails-container";
pub const EMAILS_HEADING_ID: &str = "emails-heading";

const DEFAULT_TITLE: &str = "Email Assistant";

pub fn render_page(state: &DashboardState, view: &PageView) -> String {
    let container = |id: &str| {
        view.html(id)
            .cloned()
            .unwrap_or_else(render_loading)
    };
    let toggle_label = view
        .text(TOGGLE_BUTTON_ID)
        .unwrap_or_else(|| state.toggle_label());
    let emails_heading = view
        .text(EMAILS_HEADING_ID)
        .unwrap_or_else(|| state.emails_heading());

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css">
</head>
<body class="bg-light">
<nav class="navbar navbar-dark bg-dark mb-4">
<div class="container">
<span class="navbar-brand"><i class="fas fa-envelope-open-text me-2"></i>{title}</span>
<div>
<button id="{toggle_id}" class="btn btn-outline-light btn-sm me-2" data-bs-toggle="tooltip" title="Switch between processed and unprocessed emails">{toggle_label}</button>
<button id="{refresh_id}" class="btn btn-primary btn-sm" data-bs-toggle="tooltip" title="Reload all panels"><i class="fas fa-sync-alt me-1"></i>Refresh</button>
</div>
</div>
</nav>
<main class="container">
<div class="row g-4">
<div class="col-lg-4">
<div class="card mb-4"><div class="card-header"><i class="fas fa-cog me-2"></i>Configuration</div><div class="card-body" id="{config_id}">{config}</div></div>
<div class="card"><div class="card-header"><i class="fas fa-user-circle me-2"></i>Accounts</div><div class="card-body" id="{accounts_id}">{accounts}</div></div>
</div>
<div class="col-lg-8">
<div class="card"><div class="card-header d-flex justify-content-between align-items-center"><span id="{heading_id}">{emails_heading}</span><i class="fas fa-info-circle text-muted" data-bs-toggle="popover" data-bs-trigger="hover focus" data-bs-content="Importance: High from 0.7, Medium from 0.4, otherwise Low"></i></div><div class="card-body" id="{emails_id}">{emails}</div></div>
</div>
</div>
</main>
<script src="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js"></script>
{activation}</body>
</html>
"#,
        title = DEFAULT_TITLE,
        toggle_id = TOGGLE_BUTTON_ID,
        toggle_label = escape(toggle_label),
        refresh_id = REFRESH_BUTTON_ID,
        config_id = CONFIG_CONTAINER_ID,
        config = container(CONFIG_CONTAINER_ID),
        accounts_id = ACCOUNTS_CONTAINER_ID,
        accounts = container(ACCOUNTS_CONTAINER_ID),
        heading_id = EMAILS_HEADING_ID,
        emails_heading = escape(emails_heading),
        emails_id = EMAILS_CONTAINER_ID,
        emails = container(EMAILS_CONTAINER_ID),
        activation = activation_script(view.widgets()),
    )
}

fn is_plain_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Re-creates the activated widgets once the Bootstrap bundle has loaded.
fn activation_script(widgets: &[Widget]) -> String {
    if widgets.is_empty() {
        return String::new();
    }

    let mut script = String::from("<script>\n");
    let mut anonymous = Vec::new();
    for widget in widgets {
        match widget.element_id.as_deref().filter(|id| is_plain_id(id)) {
            Some(id) => {
                let _ = writeln!(
                    script,
                    "bootstrap.{}.getOrCreateInstance(document.getElementById('{id}'));",
                    widget.kind.constructor()
                );
            }
            None if !anonymous.contains(&widget.kind) => anonymous.push(widget.kind),
            None => {}
        }
    }
    // getOrCreateInstance reuses instances already created by id above.
    for kind in anonymous {
        let _ = writeln!(
            script,
            "document.querySelectorAll('[data-bs-toggle=\"{}\"]').forEach(function (el) {{ bootstrap.{}.getOrCreateInstance(el); }});",
            kind.toggle_value(),
            kind.constructor()
        );
    }
    script.push_str("</script>\n");
    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::discover_widgets;
    use crate::markup::Markup;
    use crate::view::View;

    #[test]
    fn shell_honors_page_contract() {
        let html = render_page(&DashboardState::default(), &PageView::new());
        for id in [
            REFRESH_BUTTON_ID,
            TOGGLE_BUTTON_ID,
            CONFIG_CONTAINER_ID,
            ACCOUNTS_CONTAINER_ID,
            EMAILS_CONTAINER_ID,
        ] {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing {id}");
        }
        assert!(html.contains(escape("Show Processed").as_str()));
        assert!(html.contains("Loading..."));
        assert!(!html.contains("getOrCreateInstance"));
    }

    #[test]
    fn shell_exposes_tooltip_and_popover_triggers() {
        let html = render_page(&DashboardState::default(), &PageView::new());
        let widgets = discover_widgets(&html);
        let tooltips = widgets
            .iter()
            .filter(|w| w.kind == WidgetKind::Tooltip)
            .count();
        assert_eq!(tooltips, 2);
        assert_eq!(widgets.len(), 3);
    }

    #[test]
    fn view_contents_replace_loading_placeholders() {
        let mut view = PageView::new();
        view.replace_html(CONFIG_CONTAINER_ID, Markup::trusted("<p>cfg</p>"));
        view.set_text(TOGGLE_BUTTON_ID, "Show Unprocessed");
        let html = render_page(&DashboardState::new(true), &view);
        assert!(html.contains("<p>cfg</p>"));
        assert!(html.contains(escape("Show Unprocessed").as_str()));
        assert_eq!(html.matches("Loading...").count(), 2);
    }

    #[test]
    fn activation_script_targets_ids_and_falls_back_for_anonymous() {
        let widgets = discover_widgets(&render_page(&DashboardState::default(), &PageView::new()));
        let script = activation_script(&widgets);
        assert!(script.contains("bootstrap.Tooltip.getOrCreateInstance(document.getElementById('refresh-btn'));"));
        assert!(script.contains("bootstrap.Tooltip.getOrCreateInstance(document.getElementById('toggle-processed-btn'));"));
        assert_eq!(script.matches("[data-bs-toggle=\"popover\"]").count(), 1);
    }

    #[test]
    fn widgets_with_unusual_ids_are_still_activated() {
        let widgets = vec![
            Widget {
                kind: WidgetKind::Tooltip,
                element_id: Some("save.btn".to_string()),
                title: Some("Save".to_string()),
                content: None,
            },
            Widget {
                kind: WidgetKind::Tooltip,
                element_id: Some("it's".to_string()),
                title: None,
                content: None,
            },
        ];
        let script = activation_script(&widgets);
        assert!(!script.contains("save.btn"));
        assert!(!script.contains("getElementById"));
        assert_eq!(
            script
                .matches("document.querySelectorAll('[data-bs-toggle=\"tooltip\"]').forEach")
                .count(),
            1
        );
        assert!(!script.contains(":not([id])"));
    }
}
