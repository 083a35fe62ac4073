//! `wtrig form` – interactive form.
//!
//! Mirrors the single-page tool: a source URL field, a worker picker with a
//! custom key field, and copy / run buttons that are only usable once a URL
//! has been generated. The output is re-derived after every edit.

use anyhow::{bail, Result};
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use wtrig_core::actions::{copy_url, run_worker, CommandClipboard, SystemBrowser};
use wtrig_core::config::WtrigConfig;
use wtrig_core::form::{Derived, TriggerForm};
use wtrig_core::workers::{WorkerCatalog, WorkerSelection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormAction {
    EditSource,
    ChooseWorker,
    EditCustomWorker,
    Copy,
    Run,
    Reset,
    Quit,
}

impl FormAction {
    fn label(self, form: &TriggerForm) -> String {
        let unavailable = |enabled: bool, text: &str| {
            if enabled {
                text.to_string()
            } else {
                format!("{text} (unavailable)")
            }
        };
        match self {
            FormAction::EditSource => "Edit source URL".to_string(),
            FormAction::ChooseWorker => "Choose worker".to_string(),
            FormAction::EditCustomWorker => "Enter custom worker key".to_string(),
            FormAction::Copy => unavailable(form.can_copy(), "Copy URL"),
            FormAction::Run => unavailable(form.can_run(), "RUN WORKER"),
            FormAction::Reset => "Reset defaults".to_string(),
            FormAction::Quit => "Quit".to_string(),
        }
    }
}

/// Actions offered for the current state; the custom key field only shows up
/// while the custom worker is selected.
fn available_actions(form: &TriggerForm) -> Vec<FormAction> {
    let mut actions = vec![FormAction::EditSource, FormAction::ChooseWorker];
    if form.selection().is_custom() {
        actions.push(FormAction::EditCustomWorker);
    }
    actions.extend([
        FormAction::Copy,
        FormAction::Run,
        FormAction::Reset,
        FormAction::Quit,
    ]);
    actions
}

pub fn run_form(cfg: &WtrigConfig) -> Result<()> {
    let term = Term::stdout();
    if !term.is_term() {
        bail!("`wtrig form` needs an interactive terminal; use `wtrig build` in scripts");
    }

    let theme = ColorfulTheme::default();
    let catalog = cfg.catalog();
    let mut form = TriggerForm::from_config(cfg);

    loop {
        print_state(&form, &catalog);

        let actions = available_actions(&form);
        let labels: Vec<String> = actions.iter().map(|a| a.label(&form)).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact_on(&term)?;

        match actions[choice] {
            FormAction::EditSource => {
                let text: String = Input::with_theme(&theme)
                    .with_prompt("Source URL")
                    .with_initial_text(form.source_url())
                    .allow_empty(true)
                    .interact_text_on(&term)?;
                form.set_source_url(text);
            }
            FormAction::ChooseWorker => {
                let selection = pick_worker(&theme, &term, &catalog, form.selection())?;
                let is_custom = selection.is_custom();
                form.select_worker(selection);
                if is_custom && form.custom_worker().trim().is_empty() {
                    prompt_custom_worker(&theme, &term, &mut form)?;
                }
            }
            FormAction::EditCustomWorker => prompt_custom_worker(&theme, &term, &mut form)?,
            FormAction::Copy => {
                if !form.can_copy() {
                    print_warning("Nothing to copy yet.");
                    continue;
                }
                let copied = CommandClipboard::detect()
                    .and_then(|mut clipboard| copy_url(&mut clipboard, form.output_url()));
                match copied {
                    Ok(()) => print_success("Copied to Clipboard"),
                    Err(err) => print_warning(&format!("Copy failed: {err}")),
                }
            }
            FormAction::Run => {
                if !form.can_run() {
                    print_warning("Nothing to run yet.");
                    continue;
                }
                match run_worker(&SystemBrowser, form.output_url()) {
                    Ok(()) => print_success("Opened worker URL in the browser"),
                    Err(err) => print_warning(&format!("Could not open browser: {err}")),
                }
            }
            FormAction::Reset => form.reset(),
            FormAction::Quit => break,
        }
    }

    Ok(())
}

fn pick_worker(
    theme: &ColorfulTheme,
    term: &Term,
    catalog: &WorkerCatalog,
    current: &WorkerSelection,
) -> Result<WorkerSelection> {
    let options = catalog.options();
    let labels: Vec<String> = options
        .iter()
        .map(|w| format!("{} {}", w.icon, w.label).trim().to_string())
        .collect();
    let default = options
        .iter()
        .position(|w| w.key == current.key())
        .unwrap_or(0);

    let choice = Select::with_theme(theme)
        .with_prompt("Worker Type")
        .items(&labels)
        .default(default)
        .interact_on(term)?;

    Ok(WorkerSelection::from_key(&options[choice].key))
}

fn prompt_custom_worker(theme: &ColorfulTheme, term: &Term, form: &mut TriggerForm) -> Result<()> {
    let text: String = Input::with_theme(theme)
        .with_prompt("Custom worker key (e.g. create-notification-leave-request)")
        .with_initial_text(form.custom_worker())
        .allow_empty(true)
        .interact_text_on(term)?;
    form.set_custom_worker(text);
    Ok(())
}

fn print_state(form: &TriggerForm, catalog: &WorkerCatalog) {
    println!();
    println!("{}", style("Configuration").bold());
    println!("  Source URL: {}", form.source_url());
    if let Some(summary) = form.summary() {
        println!(
            "  {}  {}",
            style(&summary.host).dim(),
            style(format!("account={}", summary.account_label())).yellow()
        );
    }
    if let Some(worker) = catalog.describe(form.selection()) {
        println!("  Worker: {}", worker.label);
        println!("  {}", style(&worker.description).dim());
    }
    if form.selection().is_custom() {
        println!("  Custom key: {}", form.custom_worker());
    }

    println!();
    println!("{}", style("Ready to Run").bold());
    match form.derived() {
        Derived::Invalid(err) => println!("  {}", style(err).red()),
        Derived::Ready(url) => println!("  {}", style(url).green()),
        Derived::Idle | Derived::NotReady => println!("  {}", style("Waiting for input...").dim()),
    }
}

fn print_success(msg: &str) {
    println!("{}", style(msg).green());
}

fn print_warning(msg: &str) {
    println!("{}", style(msg).yellow());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> TriggerForm {
        TriggerForm::from_config(&WtrigConfig::default())
    }

    #[test]
    fn custom_field_only_for_custom_selection() {
        let mut f = form();
        assert!(!available_actions(&f).contains(&FormAction::EditCustomWorker));
        f.select_worker(WorkerSelection::Custom);
        assert!(available_actions(&f).contains(&FormAction::EditCustomWorker));
    }

    #[test]
    fn unavailable_labels_follow_state() {
        let mut f = form();
        assert_eq!(FormAction::Copy.label(&f), "Copy URL");
        assert_eq!(FormAction::Run.label(&f), "RUN WORKER");

        f.set_source_url("not a url");
        assert_eq!(FormAction::Copy.label(&f), "Copy URL (unavailable)");
        assert_eq!(FormAction::Run.label(&f), "RUN WORKER (unavailable)");
    }
}
