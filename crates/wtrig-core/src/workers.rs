//! Worker catalogue and the user's worker selection.

use serde::{Deserialize, Serialize};

/// Selection key that switches the form to a free-text worker key.
pub const CUSTOM_WORKER_KEY: &str = "custom";

/// One entry of the worker catalogue (`[[workers]]` in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerDef {
    /// Value sent as `type=<key>`.
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

impl WorkerDef {
    pub fn new(key: &str, label: &str, description: &str, icon: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Workers known out of the box.
pub fn builtin_workers() -> Vec<WorkerDef> {
    vec![
        WorkerDef::new(
            "create-notification-leave-request",
            "Leave Request Notifications",
            "Triggers leave request notifications immediately",
            "🛫",
        ),
        WorkerDef::new(
            "public-functions-notification",
            "Public Functions (Job Board)",
            "Triggers new public functions notifications",
            "📢",
        ),
        WorkerDef::new("email", "Process Email Queue", "Processes email queue", "✉️"),
    ]
}

/// Pseudo-entry listed after the catalogue for entering a key by hand.
pub fn custom_worker_def() -> WorkerDef {
    WorkerDef::new(
        CUSTOM_WORKER_KEY,
        "Custom Worker...",
        "Enter a specific worker key manually",
        "🔧",
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerCatalog {
    workers: Vec<WorkerDef>,
}

impl Default for WorkerCatalog {
    fn default() -> Self {
        Self::new(builtin_workers())
    }
}

impl WorkerCatalog {
    pub fn new(workers: Vec<WorkerDef>) -> Self {
        Self { workers }
    }

    pub fn workers(&self) -> &[WorkerDef] {
        &self.workers
    }

    pub fn get(&self, key: &str) -> Option<&WorkerDef> {
        self.workers.iter().find(|w| w.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Everything a picker offers: the catalogue, then the custom entry.
    pub fn options(&self) -> Vec<WorkerDef> {
        let mut all = self.workers.clone();
        all.push(custom_worker_def());
        all
    }

    /// Catalogue entry (or the custom pseudo-entry) behind a selection.
    pub fn describe(&self, selection: &WorkerSelection) -> Option<WorkerDef> {
        match selection {
            WorkerSelection::Catalog(key) => self.get(key).cloned(),
            WorkerSelection::Custom => Some(custom_worker_def()),
        }
    }
}

/// Which worker the user picked: a fixed key, or "custom" with free text elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerSelection {
    Catalog(String),
    Custom,
}

impl WorkerSelection {
    pub fn from_key(key: &str) -> Self {
        if key == CUSTOM_WORKER_KEY {
            WorkerSelection::Custom
        } else {
            WorkerSelection::Catalog(key.to_string())
        }
    }

    pub fn key(&self) -> &str {
        match self {
            WorkerSelection::Catalog(key) => key,
            WorkerSelection::Custom => CUSTOM_WORKER_KEY,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, WorkerSelection::Custom)
    }

    /// Worker key actually sent: the catalogue key, or the trimmed custom text.
    pub fn effective_worker<'a>(&'a self, custom_text: &'a str) -> &'a str {
        match self {
            WorkerSelection::Catalog(key) => key,
            WorkerSelection::Custom => custom_text.trim(),
        }
    }
}
