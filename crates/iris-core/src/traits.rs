use std::future::Future;

use crate::models::Outcome;

/// Performs one bounded-timeout fetch of a URL.
///
/// Implementations never fail: every error cause is reduced to
/// [`Outcome::Unavailable`]. `Clone` lets dispatchers hand one fetcher to
/// many concurrent tasks.
pub trait Fetcher: Send + Sync + Clone {
    fn fetch(&self, url: &str) -> impl Future<Output = Outcome> + Send;
}
