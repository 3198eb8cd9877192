mod cli;

use anyhow::{anyhow, Context};
use assist_api::HttpDashboardApi;
use assist_config::{ClientSettings, ConfigManager};
use assist_dashboard::{render_page, Control, Dashboard, DashboardState};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use std::sync::Arc;
use tokio::time::{sleep, Duration};
use tracing_subscriber::{
    layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

const DEFAULT_FILTER: &str = "info";

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Installs the subscriber before anything else logs. Without `RUST_LOG`
/// the filter stays reloadable so the settings file can narrow it later.
fn init_tracing() -> Option<FilterHandle> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => {
            let fmt = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
            tracing_subscriber::registry().with(filter).with(fmt).init();
            None
        }
        Err(_) => {
            let (filter, handle) = reload::Layer::new(EnvFilter::new(DEFAULT_FILTER));
            let fmt = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
            tracing_subscriber::registry().with(filter).with(fmt).init();
            Some(handle)
        }
    }
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<ClientSettings> {
    let manager = match path {
        Some(path) => ConfigManager::at(path),
        None => ConfigManager::new(),
    }
    .context("initialize settings file")?;
    manager
        .load()
        .with_context(|| format!("load settings from {}", manager.config_path().display()))
}

/// Loads settings, applies CLI overrides and the configured log filter.
fn prepare(cli: &Cli, filter: Option<&FilterHandle>) -> anyhow::Result<ClientSettings> {
    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(base_url) = &cli.base_url {
        settings.base_url = base_url.clone();
    }
    if let Some(limit) = cli.limit {
        settings.email_limit = limit;
    }

    if let Some(handle) = filter {
        if let Err(err) = handle.reload(EnvFilter::new(&settings.log_filter)) {
            tracing::warn!("could not apply log filter `{}`: {err}", settings.log_filter);
        }
    }
    Ok(settings)
}

/// Maps trigger element ids onto dashboard controls.
fn resolve_controls(element_ids: &[String]) -> anyhow::Result<Vec<Control>> {
    element_ids
        .iter()
        .map(|id| {
            Control::from_element_id(id)
                .ok_or_else(|| anyhow!("no control is bound to element `{id}`"))
        })
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = init_tracing();
    let cli = Cli::parse();
    let settings = prepare(&cli, filter.as_ref())?;

    let api = HttpDashboardApi::new(&settings.base_url)
        .with_context(|| format!("invalid backend url `{}`", settings.base_url))?
        .with_email_limit(settings.email_limit);
    tracing::info!(backend = %api.base_url(), "using email assistant backend");

    match cli.cmd {
        Command::Render { processed, output } => {
            let dashboard = Dashboard::new(Arc::new(api), DashboardState::new(processed));
            let (view, summary) = dashboard.start_page().await;
            write_page(output.as_deref(), &render_page(dashboard.state(), &view)).await?;
            if summary.failed > 0 {
                tracing::warn!(failed = summary.failed, "some panels rendered errors");
            }
        }
        Command::Press {
            element_ids,
            processed,
            output,
        } => {
            let controls = resolve_controls(&element_ids)?;
            let mut dashboard = Dashboard::new(Arc::new(api), DashboardState::new(processed));
            let (mut view, _) = dashboard.start_page().await;
            for control in controls {
                tracing::debug!(?control, "pressing control");
                dashboard.handle(control, &mut view).await;
            }
            write_page(output.as_deref(), &render_page(dashboard.state(), &view)).await?;
        }
        Command::Watch {
            processed,
            output,
            interval,
        } => {
            let interval = interval.unwrap_or(settings.watch_interval_secs).max(1);
            let dashboard = Dashboard::new(Arc::new(api), DashboardState::new(processed));
            watch(dashboard, &output, Duration::from_secs(interval)).await?;
        }
    }

    Ok(())
}

async fn write_page(output: Option<&Path>, page: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            tokio::fs::write(path, page)
                .await
                .with_context(|| format!("write dashboard to {}", path.display()))?;
            tracing::info!(path = %path.display(), "dashboard written");
        }
        None => println!("{page}"),
    }
    Ok(())
}

async fn watch(dashboard: Dashboard, output: &Path, interval: Duration) -> anyhow::Result<()> {
    let (mut view, _) = dashboard.start_page().await;
    write_page(Some(output), &render_page(dashboard.state(), &view)).await?;

    loop {
        tokio::select! {
            _ = sleep(interval) => {}
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("stopping dashboard watch");
                return Ok(());
            }
        }

        let summary = dashboard.refresh(&mut view).await;
        if summary.failed > 0 {
            tracing::warn!(failed = summary.failed, "refresh cycle rendered panel errors");
        }
        if let Err(err) = write_page(Some(output), &render_page(dashboard.state(), &view)).await {
            tracing::error!("dashboard write failed: {err:#}");
        }
    }
}
