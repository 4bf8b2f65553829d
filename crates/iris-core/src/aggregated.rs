use tokio::sync::{mpsc, oneshot};

use crate::models::FetchRecord;
use crate::report::Reporter;
use crate::traits::Fetcher;

/// Fetch every URL on its own task; a single aggregator task drains and
/// reports exactly N results.
///
/// The result channel holds at most one record, so fetch tasks park on
/// `send` until the aggregator catches up. The oneshot fires after the
/// N-th report, which is when the dispatcher returns.
pub async fn dispatch_aggregated<F, R>(fetcher: &F, reporter: &R, urls: &[String])
where
    F: Fetcher + 'static,
    R: Reporter + 'static,
{
    let n = urls.len();
    if n == 0 {
        return;
    }

    let (result_tx, mut result_rx) = mpsc::channel::<FetchRecord>(1);
    let (done_tx, done_rx) = oneshot::channel::<()>();

    let aggregator = reporter.clone();
    tokio::spawn(async move {
        // Every fetch task sends exactly one record, so n receives always
        // complete.
        for _ in 0..n {
            if let Some(record) = result_rx.recv().await {
                aggregator.report(&record);
            }
        }
        let _ = done_tx.send(());
    });

    for url in urls {
        let fetcher = fetcher.clone();
        let result_tx = result_tx.clone();
        let url = url.clone();
        tokio::spawn(async move {
            let outcome = fetcher.fetch(&url).await;
            let _ = result_tx.send(FetchRecord::new(url, outcome)).await;
        });
    }
    drop(result_tx);

    let _ = done_rx.await;
    tracing::debug!(count = n, "aggregated dispatch complete");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Outcome;
    use crate::testutil::{CollectingReporter, MockFetcher};

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_reports_every_url_exactly_once() {
        // Enough URLs that fetch tasks must queue behind the capacity-1
        // channel and wait for the aggregator.
        let urls: Vec<String> = (0..20).map(|i| format!("https://host{i}.test")).collect();
        let fetcher = MockFetcher::new();
        let reporter = CollectingReporter::new();

        dispatch_aggregated(&fetcher, &reporter, &urls).await;

        let mut reported: Vec<String> = reporter
            .records()
            .into_iter()
            .map(|record| record.url)
            .collect();
        reported.sort();
        let mut expected = urls.clone();
        expected.sort();
        assert_eq!(reported, expected);
    }

    #[tokio::test]
    async fn test_mixed_outcomes() {
        let fetcher = MockFetcher::new()
            .respond("https://a.test", Outcome::Status("200 OK".into()))
            .respond("https://b.test", Outcome::Unavailable)
            .respond("https://c.test", Outcome::Status("404 Not Found".into()));
        let reporter = CollectingReporter::new();
        let urls = vec![
            "https://a.test".to_string(),
            "https://b.test".to_string(),
            "https://c.test".to_string(),
        ];

        dispatch_aggregated(&fetcher, &reporter, &urls).await;

        assert_eq!(
            reporter.lines(),
            vec![
                "https://a.test : 200 OK",
                "https://b.test : n/a",
                "https://c.test : 404 Not Found",
            ]
        );
    }

    #[tokio::test]
    async fn test_single_url() {
        let fetcher = MockFetcher::new();
        let reporter = CollectingReporter::new();
        let urls = vec!["https://a.test".to_string()];

        dispatch_aggregated(&fetcher, &reporter, &urls).await;

        assert_eq!(reporter.lines(), vec!["https://a.test : 200 OK"]);
    }

    #[tokio::test]
    async fn test_empty_input_spawns_nothing() {
        let fetcher = MockFetcher::new();
        let reporter = CollectingReporter::new();

        dispatch_aggregated(&fetcher, &reporter, &[]).await;

        assert!(fetcher.calls().is_empty());
        assert!(reporter.records().is_empty());
    }
}
