pub mod aggregated;
pub mod direct;
pub mod error;
pub mod models;
pub mod pool;
pub mod report;
pub mod testutil;
pub mod traits;

pub use aggregated::dispatch_aggregated;
pub use direct::dispatch_direct;
pub use error::AppError;
pub use models::{FetchRecord, Outcome};
pub use pool::{dispatch_pool, pool_size};
pub use report::{Reporter, StdoutReporter};
pub use traits::Fetcher;
