use crate::bootstrap::initialize_widgets;
use crate::page::{render_page, EMAILS_HEADING_ID, REFRESH_BUTTON_ID, TOGGLE_BUTTON_ID};
use crate::panel::{load_accounts, load_config, load_emails, PanelOutcome, PanelUpdate};
use crate::state::DashboardState;
use crate::view::{PageView, View};
use assist_api::DashboardApi;
use std::sync::Arc;
use tokio::task::JoinSet;

/// User-facing controls of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Refresh,
    ToggleProcessed,
}

impl Control {
    /// Resolves the control bound to a trigger element.
    pub fn from_element_id(element_id: &str) -> Option<Self> {
        match element_id {
            REFRESH_BUTTON_ID => Some(Self::Refresh),
            TOGGLE_BUTTON_ID => Some(Self::ToggleProcessed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshSummary {
    pub rendered: usize,
    pub empty: usize,
    pub failed: usize,
}

impl RefreshSummary {
    fn record(&mut self, update: &PanelUpdate) {
        match update.outcome {
            PanelOutcome::Rendered => self.rendered += 1,
            PanelOutcome::Empty => self.empty += 1,
            PanelOutcome::Failed => self.failed += 1,
        }
    }
}

pub struct Dashboard {
    api: Arc<dyn DashboardApi>,
    state: DashboardState,
}

impl Dashboard {
    pub fn new(api: Arc<dyn DashboardApi>, state: DashboardState) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Page-load sequence: activate Bootstrap widgets on the initial page,
    /// then load every panel.
    pub async fn start(&self, view: &mut dyn View, page_html: &str) -> RefreshSummary {
        initialize_widgets(view, page_html);
        view.set_text(TOGGLE_BUTTON_ID, self.state.toggle_label());
        view.set_text(EMAILS_HEADING_ID, self.state.emails_heading());
        self.refresh(view).await
    }

    /// Runs [`Dashboard::start`] against the initial page shell and returns
    /// the populated view.
    pub async fn start_page(&self) -> (PageView, RefreshSummary) {
        let mut view = PageView::new();
        let shell = render_page(&self.state, &view);
        let summary = self.start(&mut view, &shell).await;
        (view, summary)
    }

    /// Loads all three panels concurrently and applies each update as soon
    /// as its request settles.
    pub async fn refresh(&self, view: &mut dyn View) -> RefreshSummary {
        let processed = self.state.show_processed;
        let mut loads = JoinSet::new();

        let api = Arc::clone(&self.api);
        loads.spawn(async move { load_config(api.as_ref()).await });
        let api = Arc::clone(&self.api);
        loads.spawn(async move { load_accounts(api.as_ref()).await });
        let api = Arc::clone(&self.api);
        loads.spawn(async move { load_emails(api.as_ref(), processed).await });

        let mut summary = RefreshSummary::default();
        while let Some(joined) = loads.join_next().await {
            match joined {
                Ok(update) => {
                    summary.record(&update);
                    view.apply(&update);
                }
                Err(err) => tracing::error!("panel load task aborted: {err}"),
            }
        }

        tracing::info!(
            rendered = summary.rendered,
            empty = summary.empty,
            failed = summary.failed,
            processed,
            "dashboard refreshed"
        );
        summary
    }

    /// Flips the processed filter, relabels the toggle and reloads only the
    /// emails panel.
    pub async fn toggle_processed(&mut self, view: &mut dyn View) -> PanelUpdate {
        let processed = self.state.toggle_processed();
        view.set_text(TOGGLE_BUTTON_ID, self.state.toggle_label());
        view.set_text(EMAILS_HEADING_ID, self.state.emails_heading());

        let update = load_emails(self.api.as_ref(), processed).await;
        view.apply(&update);
        update
    }

    pub async fn handle(&mut self, control: Control, view: &mut dyn View) -> RefreshSummary {
        match control {
            Control::Refresh => self.refresh(view).await,
            Control::ToggleProcessed => {
                let update = self.toggle_processed(view).await;
                let mut summary = RefreshSummary::default();
                summary.record(&update);
                summary
            }
        }
    }
}
