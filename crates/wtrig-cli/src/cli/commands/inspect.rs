//! `wtrig inspect <source-url>` – show host and account of a source URL.

use anyhow::Result;
use wtrig_core::source::inspect_source;
use wtrig_core::worker_url::WorkerUrlError;

pub fn run_inspect(source_url: &str) -> Result<()> {
    let summary = inspect_source(source_url).ok_or(WorkerUrlError::InvalidSourceUrl)?;
    println!("{:<8} {}", "HOST", summary.host);
    println!("{:<8} {}", "ACCOUNT", summary.account_label());
    Ok(())
}
