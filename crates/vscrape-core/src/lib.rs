pub mod config;
pub mod logging;

pub mod collector;
pub mod completeness;
pub mod csv_export;
pub mod dedup;
pub mod record;
pub mod schema;
pub mod url_model;
