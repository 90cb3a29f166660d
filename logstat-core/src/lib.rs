pub mod assets;
pub mod cli;
pub mod conf;
pub mod discover;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod stats;
