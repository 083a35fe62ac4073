//! `wtrig workers` – list the worker catalogue.

use wtrig_core::config::WtrigConfig;
use wtrig_core::workers::custom_worker_def;

pub fn run_workers(cfg: &WtrigConfig) {
    let catalog = cfg.catalog();
    println!("{:<36} {:<30} {}", "KEY", "LABEL", "DESCRIPTION");
    for w in catalog.workers() {
        let marker = if w.key == cfg.default_worker { " (default)" } else { "" };
        println!(
            "{:<36} {:<30} {}{}",
            w.key, w.label, w.description, marker
        );
    }
    let custom = custom_worker_def();
    println!(
        "{:<36} {:<30} {}",
        "--custom <KEY>", custom.label, custom.description
    );
}
