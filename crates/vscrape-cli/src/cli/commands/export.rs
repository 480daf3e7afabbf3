//! `vscrape export <input> --url <url>` – filter scraped records and write them to CSV.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use vscrape_core::collector::VenueCollector;
use vscrape_core::config::ScrapeConfig;
use vscrape_core::csv_export::save_venues_to_csv;
use vscrape_core::record::load_records;
use vscrape_core::url_model::generate_csv_filename;

pub struct ExportArgs<'a> {
    pub input: &'a Path,
    pub url: &'a str,
    pub prefix: Option<&'a str>,
    pub output: Option<&'a Path>,
}

/// `--output` if given, else `<output_dir or cwd>/<generated filename>`.
fn export_path(cfg: &ScrapeConfig, args: &ExportArgs<'_>, cwd: &Path) -> PathBuf {
    if let Some(output) = args.output {
        return output.to_path_buf();
    }
    let prefix = args.prefix.or(cfg.filename_prefix.as_deref());
    cfg.output_dir_or(cwd)
        .join(generate_csv_filename(args.url, prefix))
}

pub fn run_export(cfg: &ScrapeConfig, args: &ExportArgs<'_>, cwd: &Path) -> Result<()> {
    let records = load_records(args.input)?;
    tracing::info!(
        "loaded {} records from {}",
        records.len(),
        args.input.display()
    );

    let mut collector = VenueCollector::new(cfg.required_fields.iter().cloned());
    collector.extend(records);
    let stats = collector.stats();
    if stats.skipped() > 0 {
        println!(
            "Skipped {} records ({} duplicate, {} incomplete, {} unnamed).",
            stats.skipped(),
            stats.duplicates,
            stats.incomplete,
            stats.unnamed
        );
    }

    let path = export_path(cfg, args, cwd);
    save_venues_to_csv(&collector.into_records(), &cfg.schema(), &path)
        .with_context(|| format!("export venues to {}", path.display()))?;
    Ok(())
}
