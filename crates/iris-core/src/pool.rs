use std::sync::Arc;
use std::thread;

use tokio::sync::{Mutex, mpsc};

use crate::models::FetchRecord;
use crate::report::Reporter;
use crate::traits::Fetcher;

/// Number of pool workers for `n` jobs: available parallelism, but never
/// more workers than jobs.
pub fn pool_size(n: usize) -> usize {
    let parallelism = thread::available_parallelism().map_or(1, usize::from);
    parallelism.min(n)
}

/// Fetch all URLs through a fixed pool of `workers` tasks.
///
/// A producer task feeds every URL into the job queue and then drops the
/// sender; the closed queue is the only termination signal workers see.
/// Each worker pulls a job, fetches, and pushes a worker-tagged record
/// into the result channel; the caller drains exactly N records. A failed
/// fetch is a normal record — workers terminate only on queue exhaustion.
pub async fn dispatch_pool<F, R>(fetcher: &F, reporter: &R, urls: &[String], workers: usize)
where
    F: Fetcher + 'static,
    R: Reporter,
{
    let n = urls.len();
    if n == 0 {
        return;
    }
    let workers = workers.clamp(1, n);

    // Both channels hold all n entries, so neither the producer nor a
    // worker ever parks on a full buffer.
    let (job_tx, job_rx) = mpsc::channel::<String>(n);
    let (result_tx, mut result_rx) = mpsc::channel::<FetchRecord>(n);

    // Workers share one receiver; the lock is held only while pulling a
    // job, never across a fetch.
    let job_rx = Arc::new(Mutex::new(job_rx));
    for id in 0..workers {
        let job_rx = Arc::clone(&job_rx);
        let result_tx = result_tx.clone();
        let fetcher = fetcher.clone();
        tokio::spawn(async move {
            loop {
                let job = { job_rx.lock().await.recv().await };
                let Some(url) = job else {
                    tracing::debug!(worker = id, "job queue exhausted");
                    break;
                };
                let outcome = fetcher.fetch(&url).await;
                let record = FetchRecord::tagged(id, url, outcome);
                if result_tx.send(record).await.is_err() {
                    break;
                }
            }
        });
    }
    drop(result_tx);

    let queued: Vec<String> = urls.to_vec();
    tokio::spawn(async move {
        for url in queued {
            if job_tx.send(url).await.is_err() {
                break;
            }
        }
        // job_tx drops here, closing the queue.
    });

    for _ in 0..n {
        if let Some(record) = result_rx.recv().await {
            reporter.report(&record);
        }
    }
}
