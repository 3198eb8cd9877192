use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "assist")]
#[command(about = "Email Assistant dashboard client", long_about = None)]
pub struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL, overriding the settings file
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Emails fetched per load, overriding the settings file
    #[arg(long, global = true)]
    pub limit: Option<u32>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load every panel once and write the dashboard page
    Render {
        /// Start with processed emails instead of unprocessed ones
        #[arg(long)]
        processed: bool,

        /// Output file; stdout when omitted
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Render, then refresh the page file on an interval until Ctrl-C
    Watch {
        #[arg(long)]
        processed: bool,

        #[arg(long, short)]
        output: PathBuf,

        /// Seconds between refreshes (defaults to the settings value)
        #[arg(long)]
        interval: Option<u64>,
    },

    /// Render, press the given controls in order, and write the result
    Press {
        /// Trigger element ids, e.g. `toggle-processed-btn` or `refresh-btn`
        #[arg(required = true)]
        element_ids: Vec<String>,

        #[arg(long)]
        processed: bool,

        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}
