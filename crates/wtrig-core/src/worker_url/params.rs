//! Query parameter names and the query rewrite itself.

use url::Url;

pub const ACCOUNT_PARAM: &str = "account";
pub const REQUEST_TYPE_PARAM: &str = "requestType";
pub const TYPE_PARAM: &str = "type";

/// Value of `requestType` on every worker URL.
pub const WORKER_REQUEST_TYPE: &str = "worker";

/// Returns the first `account` value in the query string.
///
/// An empty value counts as absent, so `?account=&x=1` yields `None`.
pub fn account_from_url(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(name, _)| name == ACCOUNT_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Drops the whole query and fragment, then appends `account` (if any),
/// `requestType=worker` and `type=<worker>` in that order.
pub(super) fn rewrite_query(url: &mut Url, account: Option<&str>, worker: &str) {
    url.set_query(None);
    url.set_fragment(None);

    let mut pairs = url.query_pairs_mut();
    if let Some(account) = account {
        pairs.append_pair(ACCOUNT_PARAM, account);
    }
    pairs.append_pair(REQUEST_TYPE_PARAM, WORKER_REQUEST_TYPE);
    pairs.append_pair(TYPE_PARAM, worker);
}
