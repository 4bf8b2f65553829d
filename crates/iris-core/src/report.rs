use crate::models::FetchRecord;

/// Sink for completed fetch records (decoupled output).
///
/// `Clone` lets a dispatcher hand the same sink to every task it spawns,
/// the same way fetchers are shared.
pub trait Reporter: Send + Sync + Clone {
    fn report(&self, record: &FetchRecord);
}

/// Reporter that writes one line per record to stdout.
///
/// `println!` holds the stdout lock for the whole line, so concurrent
/// reports never interleave mid-line.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn report(&self, record: &FetchRecord) {
        println!("{record}");
    }
}
