//! Source URL inspection: the host and account a pasted link points at.

use url::Url;

use crate::worker_url::{account_from_url, parse_source_url};

/// Label shown when the source URL carries no `account` parameter.
pub const UNKNOWN_ACCOUNT: &str = "Unknown";

/// What the user pasted, reduced to the two facts worth showing next to the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSummary {
    /// `host[:port]`, port only when it differs from the scheme default.
    pub host: String,
    pub account: Option<String>,
}

impl SourceSummary {
    pub fn from_url(url: &Url) -> Self {
        let host = match (url.host_str(), url.port()) {
            (Some(h), Some(p)) => format!("{h}:{p}"),
            (Some(h), None) => h.to_string(),
            (None, _) => String::new(),
        };
        Self {
            host,
            account: account_from_url(url),
        }
    }

    pub fn account_label(&self) -> &str {
        self.account.as_deref().unwrap_or(UNKNOWN_ACCOUNT)
    }
}

/// Summarizes `raw` if it parses as an absolute URL.
pub fn inspect_source(raw: &str) -> Option<SourceSummary> {
    parse_source_url(raw).ok().map(|url| SourceSummary::from_url(&url))
}
