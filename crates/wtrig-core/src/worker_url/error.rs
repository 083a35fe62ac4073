//! Errors produced by the worker URL transformation.

use thiserror::Error;

/// The only way a transformation can fail: the source text is not an absolute URL.
///
/// Incomplete input (no worker chosen yet) is not an error; see
/// [`super::try_build_worker_url`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WorkerUrlError {
    #[error("Invalid URL. Please paste a valid api.php link.")]
    InvalidSourceUrl,
}
