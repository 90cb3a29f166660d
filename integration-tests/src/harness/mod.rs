mod fixtures;
pub mod tracing;

pub use fixtures::{LogDir, access_line};
pub use tracing::{CapturedEvent, capture_events};
