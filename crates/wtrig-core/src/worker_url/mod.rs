//! Worker URL construction.
//!
//! Takes a pasted `api.php` link and rewrites it into a worker trigger URL:
//! every query parameter except `account` is dropped, the fragment is removed,
//! and `requestType=worker&type=<worker>` is appended.

mod error;
mod params;

pub use error::WorkerUrlError;
pub use params::{
    account_from_url, ACCOUNT_PARAM, REQUEST_TYPE_PARAM, TYPE_PARAM, WORKER_REQUEST_TYPE,
};

use url::Url;

/// Result of a transformation in its flat `{ url, error }` form.
///
/// Exactly one of the fields is non-empty when the input is complete; both are
/// empty while the worker key is still missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerUrl {
    pub url: String,
    pub error: String,
}

impl WorkerUrl {
    /// True when there is a URL to copy or open.
    pub fn is_ready(&self) -> bool {
        !self.url.is_empty() && self.error.is_empty()
    }
}

/// Parses pasted source text as an absolute URL, ignoring surrounding whitespace.
pub fn parse_source_url(raw: &str) -> Result<Url, WorkerUrlError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(WorkerUrlError::InvalidSourceUrl);
    }
    Url::parse(trimmed).map_err(|e| {
        tracing::debug!("source url rejected: {}", e);
        WorkerUrlError::InvalidSourceUrl
    })
}

/// Builds the worker URL for `raw_url` and `worker`.
///
/// Returns `Ok(None)` when `worker` is blank: the input is not ready yet, which
/// is not an error. The source is validated first, so an unparseable source is
/// reported even without a worker.
pub fn try_build_worker_url(raw_url: &str, worker: &str) -> Result<Option<Url>, WorkerUrlError> {
    let mut url = parse_source_url(raw_url)?;

    let worker = worker.trim();
    if worker.is_empty() {
        return Ok(None);
    }

    let account = account_from_url(&url);
    params::rewrite_query(&mut url, account.as_deref(), worker);
    Ok(Some(url))
}

/// Builds the worker URL and flattens the outcome into [`WorkerUrl`].
///
/// # Examples
///
/// - `("https://h/api.php?account=a&subject=Uren", "email")` →
///   `url = "https://h/api.php?account=a&requestType=worker&type=email"`
/// - `("not a url", "email")` →
///   `error = "Invalid URL. Please paste a valid api.php link."`
pub fn build_worker_url(raw_url: &str, worker: &str) -> WorkerUrl {
    match try_build_worker_url(raw_url, worker) {
        Ok(Some(url)) => WorkerUrl {
            url: url.into(),
            error: String::new(),
        },
        Ok(None) => WorkerUrl::default(),
        Err(err) => WorkerUrl {
            url: String::new(),
            error: err.to_string(),
        },
    }
}
