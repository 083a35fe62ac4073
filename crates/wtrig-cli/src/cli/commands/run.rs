//! `wtrig run <source-url>` – build the worker URL and open it in the browser.

use anyhow::Result;
use wtrig_core::actions::{run_worker, SystemBrowser};
use wtrig_core::config::WtrigConfig;

use super::{form_from_args, ready_url};
use crate::cli::WorkerArgs;

pub fn run_trigger(cfg: &WtrigConfig, source_url: &str, worker: &WorkerArgs) -> Result<()> {
    let form = form_from_args(cfg, source_url, worker)?;
    let url = ready_url(&form)?;
    run_worker(&SystemBrowser, &url)?;
    println!("Opened worker `{}`: {url}", form.effective_worker());
    Ok(())
}
