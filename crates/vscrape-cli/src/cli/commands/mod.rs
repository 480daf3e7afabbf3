//! CLI command handlers. Each command is in its own file.

mod completions;
mod export;
mod filename;
mod site_name;

pub use completions::run_completions;
pub use export::{run_export, ExportArgs};
pub use filename::run_filename;
pub use site_name::run_site_name;
