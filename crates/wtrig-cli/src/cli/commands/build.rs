//! `wtrig build <source-url>` – print the worker trigger URL.

use anyhow::Result;
use wtrig_core::actions::{copy_url, run_worker, CommandClipboard, SystemBrowser};
use wtrig_core::config::WtrigConfig;

use super::{form_from_args, ready_url};
use crate::cli::WorkerArgs;

#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    pub copy: bool,
    pub open: bool,
}

pub fn run_build(
    cfg: &WtrigConfig,
    source_url: &str,
    worker: &WorkerArgs,
    opts: BuildOptions,
) -> Result<()> {
    let form = form_from_args(cfg, source_url, worker)?;
    let url = ready_url(&form)?;
    println!("{url}");

    if opts.copy {
        let mut clipboard = CommandClipboard::detect()?;
        copy_url(&mut clipboard, &url)?;
        eprintln!("Copied to clipboard");
    }
    if opts.open {
        run_worker(&SystemBrowser, &url)?;
    }
    Ok(())
}
