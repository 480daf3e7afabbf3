//! CLI for the vscrape venue scraping toolkit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::{Path, PathBuf};
use vscrape_core::config::{self, ScrapeConfig};

use commands::{run_completions, run_export, run_filename, run_site_name, ExportArgs};

/// Top-level CLI for vscrape.
#[derive(Debug, Parser)]
#[command(name = "vscrape")]
#[command(about = "vscrape: venue scraping helpers (dedup, CSV export, output naming)", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/vscrape/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the short site identifier derived from a URL's host.
    SiteName {
        /// URL of the scraped site.
        url: String,
    },

    /// Print the CSV filename a scrape of URL would be saved under.
    Filename {
        /// URL of the scraped site.
        url: String,
        /// Prefix for the filename (overrides filename_prefix from config).
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Filter scraped records (JSON array or JSON Lines) and export them to CSV.
    Export {
        /// File holding the scraped records.
        input: PathBuf,
        /// URL the records were scraped from; names the output file.
        #[arg(long)]
        url: String,
        /// Prefix for the generated filename (overrides filename_prefix from config).
        #[arg(long)]
        prefix: Option<String>,
        /// Write to this path instead of output_dir/<site>_scraped.csv.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

/// Config from `--config` if given, else the XDG default (created on first use).
fn load_config(path: Option<&Path>) -> Result<ScrapeConfig> {
    let cfg = match path {
        Some(path) => config::load_from(path)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let Cli { config, command } = Cli::parse();
        let config = config.as_deref();

        match command {
            CliCommand::SiteName { url } => run_site_name(&url),
            CliCommand::Filename { url, prefix } => {
                let cfg = load_config(config)?;
                run_filename(&cfg, &url, prefix.as_deref())
            }
            CliCommand::Export {
                input,
                url,
                prefix,
                output,
            } => {
                let cfg = load_config(config)?;
                let cwd = std::env::current_dir()?;
                let args = ExportArgs {
                    input: &input,
                    url: &url,
                    prefix: prefix.as_deref(),
                    output: output.as_deref(),
                };
                run_export(&cfg, &args, &cwd)
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }
    }
}
