//! Test utilities: mock implementations of the core traits.
//!
//! Handwritten mocks for dependency injection in unit tests. All mocks use
//! `Arc<Mutex<_>>` for interior mutability, allowing test assertions on
//! recorded calls.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::{FetchRecord, Outcome};
use crate::report::Reporter;
use crate::traits::Fetcher;

// ---------------------------------------------------------------------------
// MockFetcher
// ---------------------------------------------------------------------------

/// Mock fetcher that resolves URLs against a scripted outcome table.
///
/// URLs without an entry resolve to `200 OK`. Every call is recorded so
/// tests can assert on fetch counts.
#[derive(Clone, Default)]
pub struct MockFetcher {
    outcomes: Arc<Mutex<HashMap<String, Outcome>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script `url` to resolve to `outcome`; chainable.
    pub fn respond(self, url: &str, outcome: Outcome) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .insert(url.to_string(), outcome);
        self
    }

    /// URLs fetched so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Outcome {
        self.calls.lock().unwrap().push(url.to_string());
        self.outcomes
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or_else(|| Outcome::Status("200 OK".to_string()))
    }
}

// ---------------------------------------------------------------------------
// CollectingReporter
// ---------------------------------------------------------------------------

/// Reporter that records every record it receives.
#[derive(Clone, Default)]
pub struct CollectingReporter {
    records: Arc<Mutex<Vec<FetchRecord>>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<FetchRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Rendered display lines, sorted for set comparisons.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.records().iter().map(ToString::to_string).collect();
        lines.sort();
        lines
    }
}

impl Reporter for CollectingReporter {
    fn report(&self, record: &FetchRecord) {
        self.records.lock().unwrap().push(record.clone());
    }
}
