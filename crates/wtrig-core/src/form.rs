//! Reactive form state: source text and worker selection in, worker URL out.
//!
//! Every setter re-derives the output, so callers never see a stale URL.

use url::Url;

use crate::config::WtrigConfig;
use crate::source::{inspect_source, SourceSummary};
use crate::worker_url::{try_build_worker_url, WorkerUrl, WorkerUrlError};
use crate::workers::WorkerSelection;

/// Output derived from the current inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Derived {
    /// Source text is blank; nothing to say yet.
    Idle,
    /// Source is fine but the effective worker is empty.
    NotReady,
    Invalid(WorkerUrlError),
    Ready(Url),
}

/// Values the form starts with and returns to on reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDefaults {
    pub source_url: String,
    pub worker: WorkerSelection,
}

impl From<&WtrigConfig> for FormDefaults {
    fn from(cfg: &WtrigConfig) -> Self {
        Self {
            source_url: cfg.default_source_url.clone(),
            worker: WorkerSelection::from_key(&cfg.default_worker),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TriggerForm {
    defaults: FormDefaults,
    source_url: String,
    selection: WorkerSelection,
    custom_worker: String,
    derived: Derived,
}

impl TriggerForm {
    pub fn new(defaults: FormDefaults) -> Self {
        let mut form = Self {
            source_url: defaults.source_url.clone(),
            selection: defaults.worker.clone(),
            custom_worker: String::new(),
            derived: Derived::Idle,
            defaults,
        };
        form.rederive();
        form
    }

    pub fn from_config(cfg: &WtrigConfig) -> Self {
        Self::new(FormDefaults::from(cfg))
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn selection(&self) -> &WorkerSelection {
        &self.selection
    }

    pub fn custom_worker(&self) -> &str {
        &self.custom_worker
    }

    pub fn set_source_url(&mut self, text: impl Into<String>) {
        self.source_url = text.into();
        self.rederive();
    }

    pub fn select_worker(&mut self, selection: WorkerSelection) {
        self.selection = selection;
        self.rederive();
    }

    /// Text of the custom worker field. Only used while `custom` is selected.
    pub fn set_custom_worker(&mut self, text: impl Into<String>) {
        self.custom_worker = text.into();
        self.rederive();
    }

    /// Restores the default source URL and worker and clears the custom field.
    pub fn reset(&mut self) {
        self.source_url = self.defaults.source_url.clone();
        self.selection = self.defaults.worker.clone();
        self.custom_worker.clear();
        self.rederive();
    }

    pub fn effective_worker(&self) -> &str {
        self.selection.effective_worker(&self.custom_worker)
    }

    pub fn derived(&self) -> &Derived {
        &self.derived
    }

    /// The generated URL, or `""` when there is none.
    pub fn output_url(&self) -> &str {
        match &self.derived {
            Derived::Ready(url) => url.as_str(),
            _ => "",
        }
    }

    pub fn error(&self) -> Option<WorkerUrlError> {
        match &self.derived {
            Derived::Invalid(err) => Some(*err),
            _ => None,
        }
    }

    /// The `{ url, error }` view of the derived state.
    pub fn view(&self) -> WorkerUrl {
        WorkerUrl {
            url: self.output_url().to_string(),
            error: self.error().map(|e| e.to_string()).unwrap_or_default(),
        }
    }

    pub fn can_copy(&self) -> bool {
        !self.output_url().is_empty()
    }

    pub fn can_run(&self) -> bool {
        !self.output_url().is_empty() && self.error().is_none()
    }

    /// Host and account of the source, when it parses.
    pub fn summary(&self) -> Option<SourceSummary> {
        inspect_source(&self.source_url)
    }

    fn rederive(&mut self) {
        let derived = if self.source_url.trim().is_empty() {
            Derived::Idle
        } else {
            match try_build_worker_url(&self.source_url, self.effective_worker()) {
                Ok(Some(url)) => Derived::Ready(url),
                Ok(None) => Derived::NotReady,
                Err(err) => Derived::Invalid(err),
            }
        };
        if derived != self.derived {
            tracing::debug!(worker = self.effective_worker(), "form output now {:?}", derived);
        }
        self.derived = derived;
    }
}
