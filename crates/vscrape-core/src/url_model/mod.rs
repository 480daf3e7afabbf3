//! URL modeling and output filename derivation.
//!
//! Derives a short site identifier from a URL host and builds the
//! conventional `<site>_scraped.csv` name from it.

mod host;

pub use host::extract_website_name;

/// Suffix appended to the site identifier.
const FILENAME_SUFFIX: &str = "_scraped.csv";

/// Builds the CSV filename for a scrape of `base_url`.
///
/// `{site}_scraped.csv`, or `{prefix}_{site}_scraped.csv` when `prefix` is
/// non-empty. Only constructs a string; the result is not checked against
/// the filesystem.
///
/// # Examples
///
/// - `generate_csv_filename("https://www.flipkart.com/search", None)` → `"flipkart_scraped.csv"`
/// - `generate_csv_filename("https://www.flipkart.com/search", Some("run1"))` → `"run1_flipkart_scraped.csv"`
pub fn generate_csv_filename(base_url: &str, prefix: Option<&str>) -> String {
    let filename = format!("{}{}", extract_website_name(base_url), FILENAME_SUFFIX);
    match prefix.filter(|p| !p.is_empty()) {
        Some(prefix) => format!("{prefix}_{filename}"),
        None => filename,
    }
}
