//! CLI command handlers. Each command is in its own file.

mod build;
mod completions;
mod form;
mod inspect;
mod run;
mod workers;

pub use build::{run_build, BuildOptions};
pub use completions::run_completions;
pub use form::run_form;
pub use inspect::run_inspect;
pub use run::run_trigger;
pub use workers::run_workers;

use anyhow::{bail, Result};
use wtrig_core::config::WtrigConfig;
use wtrig_core::form::{Derived, TriggerForm};
use wtrig_core::worker_url::WorkerUrlError;
use wtrig_core::workers::{WorkerSelection, CUSTOM_WORKER_KEY};

use super::WorkerArgs;

/// Fills a form from command-line input, the way a user would fill the page.
pub(crate) fn form_from_args(
    cfg: &WtrigConfig,
    source_url: &str,
    args: &WorkerArgs,
) -> Result<TriggerForm> {
    let mut form = TriggerForm::from_config(cfg);
    form.set_source_url(source_url);

    if let Some(custom) = &args.custom {
        form.select_worker(WorkerSelection::Custom);
        form.set_custom_worker(custom.as_str());
    } else if let Some(key) = &args.worker {
        if key == CUSTOM_WORKER_KEY {
            bail!("use --custom <KEY> to pass a worker key that is not in the catalogue");
        }
        let catalog = cfg.catalog();
        if !catalog.contains(key) {
            let known: Vec<&str> = catalog.workers().iter().map(|w| w.key.as_str()).collect();
            bail!(
                "unknown worker `{key}` (known: {}); use --custom {key} to send it anyway",
                known.join(", ")
            );
        }
        form.select_worker(WorkerSelection::Catalog(key.clone()));
    }

    Ok(form)
}

/// The generated URL, or an error explaining why there is none.
pub(crate) fn ready_url(form: &TriggerForm) -> Result<String> {
    match form.derived() {
        Derived::Ready(url) => Ok(url.to_string()),
        Derived::Invalid(err) => Err((*err).into()),
        Derived::Idle => Err(WorkerUrlError::InvalidSourceUrl.into()),
        Derived::NotReady => bail!("no worker key given; pass --custom <KEY> or --worker <KEY>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "https://api.eu-west-1.rentmanapp.com/4.806/api.php?account=staging133393&requestType=query&subject=Uren";

    fn args(worker: Option<&str>, custom: Option<&str>) -> WorkerArgs {
        WorkerArgs {
            worker: worker.map(String::from),
            custom: custom.map(String::from),
        }
    }

    #[test]
    fn default_worker_from_config() {
        let form = form_from_args(&WtrigConfig::default(), SOURCE, &args(None, None)).unwrap();
        assert_eq!(
            ready_url(&form).unwrap(),
            "https://api.eu-west-1.rentmanapp.com/4.806/api.php?account=staging133393&requestType=worker&type=create-notification-leave-request"
        );
    }

    #[test]
    fn catalog_worker() {
        let form =
            form_from_args(&WtrigConfig::default(), SOURCE, &args(Some("email"), None)).unwrap();
        assert_eq!(
            ready_url(&form).unwrap(),
            "https://api.eu-west-1.rentmanapp.com/4.806/api.php?account=staging133393&requestType=worker&type=email"
        );
    }

    #[test]
    fn custom_worker() {
        let form = form_from_args(
            &WtrigConfig::default(),
            SOURCE,
            &args(None, Some(" sync-invoices ")),
        )
        .unwrap();
        assert!(ready_url(&form).unwrap().ends_with("&type=sync-invoices"));
    }

    #[test]
    fn empty_custom_worker_is_not_ready() {
        let form = form_from_args(&WtrigConfig::default(), SOURCE, &args(None, Some(""))).unwrap();
        let err = ready_url(&form).unwrap_err();
        assert!(err.to_string().contains("no worker key"));
    }

    #[test]
    fn unknown_worker_rejected() {
        let err = form_from_args(&WtrigConfig::default(), SOURCE, &args(Some("nope"), None))
            .unwrap_err();
        assert!(err.to_string().contains("unknown worker `nope`"));
    }

    #[test]
    fn custom_key_via_worker_flag_rejected() {
        assert!(
            form_from_args(&WtrigConfig::default(), SOURCE, &args(Some("custom"), None)).is_err()
        );
    }

    #[test]
    fn invalid_and_blank_source() {
        for source in ["not a url", "   "] {
            let form =
                form_from_args(&WtrigConfig::default(), source, &args(None, None)).unwrap();
            assert_eq!(
                ready_url(&form).unwrap_err().to_string(),
                "Invalid URL. Please paste a valid api.php link."
            );
        }
    }
}
