//! `vscrape site-name <url>` – print the site identifier for a URL.

use anyhow::Result;
use vscrape_core::url_model::extract_website_name;

pub fn run_site_name(url: &str) -> Result<()> {
    let name = extract_website_name(url);
    if name.is_empty() {
        tracing::warn!("no host found in {url:?}; is the scheme missing?");
    }
    println!("{name}");
    Ok(())
}
