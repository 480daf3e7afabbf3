//! `vscrape filename <url>` – print the CSV filename for a scrape of a URL.

use anyhow::Result;
use vscrape_core::config::ScrapeConfig;
use vscrape_core::url_model::generate_csv_filename;

pub fn run_filename(cfg: &ScrapeConfig, url: &str, prefix: Option<&str>) -> Result<()> {
    let prefix = prefix.or(cfg.filename_prefix.as_deref());
    println!("{}", generate_csv_filename(url, prefix));
    Ok(())
}
