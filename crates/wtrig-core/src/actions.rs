//! Side effects on a finished worker URL: copy it to the clipboard or open it
//! in the browser.
//!
//! Both go through small traits so the form and CLI can be exercised without a
//! desktop session.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;

/// Clipboard programs tried in order, with the arguments that make them read stdin.
const CLIPBOARD_PROGRAMS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
    ("clip", &[]),
];

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("no worker URL yet")]
    NothingToDo,
    #[error("no clipboard program found (tried wl-copy, xclip, xsel, pbcopy, clip)")]
    NoClipboard,
    #[error("clipboard program `{program}` failed")]
    Clipboard {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("clipboard program `{program}` exited with {status}")]
    ClipboardExit { program: String, status: ExitStatus },
    #[error("failed to open {url} in a browser")]
    Browser {
        url: String,
        #[source]
        source: io::Error,
    },
}

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ActionError>;
}

pub trait Browser {
    fn open(&self, url: &str) -> Result<(), ActionError>;
}

/// Clipboard backed by an external program found on `PATH`.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Picks the first clipboard program available on `PATH`.
    pub fn detect() -> Result<Self, ActionError> {
        CLIPBOARD_PROGRAMS
            .iter()
            .find_map(|(name, args)| {
                which::which(name).ok().map(|program| Self {
                    program,
                    args: args.iter().map(|a| a.to_string()).collect(),
                })
            })
            .ok_or(ActionError::NoClipboard)
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }
}

impl Clipboard for CommandClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ActionError> {
        let io_err = |source| ActionError::Clipboard {
            program: self.program_name(),
            source,
        };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(io_err)?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).map_err(io_err)?;
        }
        let status = child.wait().map_err(io_err)?;
        if !status.success() {
            return Err(ActionError::ClipboardExit {
                program: self.program_name(),
                status,
            });
        }
        tracing::debug!("copied {} bytes via {}", text.len(), self.program_name());
        Ok(())
    }
}

/// The platform's default URL handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), ActionError> {
        open::that(url).map_err(|source| ActionError::Browser {
            url: url.to_string(),
            source,
        })
    }
}

/// Copies `url` to the clipboard. An empty URL is refused.
pub fn copy_url(clipboard: &mut dyn Clipboard, url: &str) -> Result<(), ActionError> {
    if url.is_empty() {
        return Err(ActionError::NothingToDo);
    }
    clipboard.set_text(url)?;
    tracing::info!("copied worker url to clipboard");
    Ok(())
}

/// Opens `url` in a new browser tab. An empty URL is refused.
pub fn run_worker(browser: &dyn Browser, url: &str) -> Result<(), ActionError> {
    if url.is_empty() {
        return Err(ActionError::NothingToDo);
    }
    browser.open(url)?;
    tracing::info!("opened worker url {}", url);
    Ok(())
}
