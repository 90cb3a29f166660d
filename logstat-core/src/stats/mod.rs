//! Per-path latency statistics
//!
//! LogRecord
//! Aggregator (count, sum, max, samples)
//! ErrorBudget (malformed ratio)
//! Aggregation (finalized UrlStats + PipelineTotals)

mod aggregation;
mod budget;
mod median;
mod types;


pub use aggregation::{Aggregator, aggregate};
pub use budget::{DEFAULT_ERROR_THRESHOLD, ErrorBudget, malformed_ratio, should_abort};
pub use median::median;
pub use types::{Aggregation, PipelineTotals, UnparsedPathPolicy, UrlStats};
