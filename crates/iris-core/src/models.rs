use std::fmt;

use serde::{Deserialize, Serialize};

/// Displayed in place of a status line when a URL could not be fetched.
pub const UNAVAILABLE: &str = "n/a";

/// Terminal outcome of a single fetch.
///
/// Connection refusal, DNS failure, TLS failure, and timeout all collapse
/// into [`Outcome::Unavailable`]; no cause is preserved in the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Textual status line of the response, e.g. `200 OK`.
    Status(String),
    /// The URL could not be fetched.
    Unavailable,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Status(status) => f.write_str(status),
            Outcome::Unavailable => f.write_str(UNAVAILABLE),
        }
    }
}

/// One URL paired with its fetch outcome.
///
/// `worker` carries display provenance for the bounded pool and stays
/// `None` for the unbounded dispatchers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRecord {
    pub url: String,
    pub outcome: Outcome,
    pub worker: Option<usize>,
}

impl FetchRecord {
    pub fn new(url: String, outcome: Outcome) -> Self {
        Self {
            url,
            outcome,
            worker: None,
        }
    }

    /// Record tagged with the id of the pool worker that produced it.
    pub fn tagged(worker: usize, url: String, outcome: Outcome) -> Self {
        Self {
            url,
            outcome,
            worker: Some(worker),
        }
    }
}

impl fmt::Display for FetchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.worker {
            Some(id) => write!(f, "worker {} :: {} : {}", id, self.url, self.outcome),
            None => write!(f, "{} : {}", self.url, self.outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Status("200 OK".into()).to_string(), "200 OK");
        assert_eq!(Outcome::Unavailable.to_string(), "n/a");
    }

    #[test]
    fn test_record_display() {
        let record = FetchRecord::new(
            "https://example.com".into(),
            Outcome::Status("200 OK".into()),
        );
        assert_eq!(record.to_string(), "https://example.com : 200 OK");
    }

    #[test]
    fn test_record_display_with_worker_tag() {
        let record = FetchRecord::tagged(3, "https://example.com".into(), Outcome::Unavailable);
        assert_eq!(record.to_string(), "worker 3 :: https://example.com : n/a");
    }
}
