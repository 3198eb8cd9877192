use crate::markup::Markup;
use crate::page::{ACCOUNTS_CONTAINER_ID, CONFIG_CONTAINER_ID, EMAILS_CONTAINER_ID};
use crate::render::{render_accounts, render_config, render_emails, render_error};
use assist_api::{ApiError, DashboardApi};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Panel {
    Config,
    Accounts,
    Emails,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Config, Panel::Accounts, Panel::Emails];

    /// Element the panel renders into.
    pub fn container_id(self) -> &'static str {
        match self {
            Self::Config => CONFIG_CONTAINER_ID,
            Self::Accounts => ACCOUNTS_CONTAINER_ID,
            Self::Emails => EMAILS_CONTAINER_ID,
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            Self::Config => "configuration",
            Self::Accounts => "accounts",
            Self::Emails => "emails",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelOutcome {
    Rendered,
    Empty,
    Failed,
}

/// Replacement content for one panel, produced by a single load.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelUpdate {
    pub panel: Panel,
    pub outcome: PanelOutcome,
    pub markup: Markup,
}

impl PanelUpdate {
    fn loaded(panel: Panel, empty: bool, markup: Markup) -> Self {
        let outcome = if empty {
            PanelOutcome::Empty
        } else {
            PanelOutcome::Rendered
        };
        Self {
            panel,
            outcome,
            markup,
        }
    }

    fn failed(panel: Panel, err: &ApiError) -> Self {
        tracing::warn!(
            panel = panel.noun(),
            server = err.is_server_failure(),
            "panel load failed: {err}"
        );
        Self {
            panel,
            outcome: PanelOutcome::Failed,
            markup: render_error(panel, &err.to_string()),
        }
    }
}

pub async fn load_config(api: &dyn DashboardApi) -> PanelUpdate {
    match api.fetch_config().await {
        Ok(config) => PanelUpdate::loaded(Panel::Config, config.is_empty(), render_config(&config)),
        Err(err) => PanelUpdate::failed(Panel::Config, &err),
    }
}

pub async fn load_accounts(api: &dyn DashboardApi) -> PanelUpdate {
    match api.fetch_accounts().await {
        Ok(accounts) => PanelUpdate::loaded(
            Panel::Accounts,
            accounts.is_empty(),
            render_accounts(&accounts),
        ),
        Err(err) => PanelUpdate::failed(Panel::Accounts, &err),
    }
}

pub async fn load_emails(api: &dyn DashboardApi, processed: bool) -> PanelUpdate {
    match api.fetch_emails(processed).await {
        Ok(emails) => {
            tracing::debug!(processed, count = emails.len(), "emails loaded");
            PanelUpdate::loaded(Panel::Emails, emails.is_empty(), render_emails(&emails))
        }
        Err(err) => PanelUpdate::failed(Panel::Emails, &err),
    }
}
