use tokio_util::task::TaskTracker;

use crate::models::FetchRecord;
use crate::report::Reporter;
use crate::traits::Fetcher;

/// Fetch every URL on its own task; each task reports its own result.
///
/// The tracker is the completion barrier: every spawn registers, every
/// task exit deregisters, and `wait` blocks until the count drains to
/// zero. Report order across tasks is a completion race.
pub async fn dispatch_direct<F, R>(fetcher: &F, reporter: &R, urls: &[String])
where
    F: Fetcher + 'static,
    R: Reporter + 'static,
{
    if urls.is_empty() {
        return;
    }

    let tracker = TaskTracker::new();
    for url in urls {
        let fetcher = fetcher.clone();
        let reporter = reporter.clone();
        let url = url.clone();
        tracker.spawn(async move {
            let outcome = fetcher.fetch(&url).await;
            reporter.report(&FetchRecord::new(url, outcome));
        });
    }
    tracker.close();
    tracker.wait().await;

    tracing::debug!(count = urls.len(), "direct dispatch complete");
}
