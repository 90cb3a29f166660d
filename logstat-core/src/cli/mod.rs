pub mod analyze;
pub mod conf;
pub mod run;


use crate::conf::ConfigError;
use crate::discover::DiscoverError;
use crate::error::{ErrorKind, PipelineError};
use crate::report::RenderError;

pub use analyze::{AnalyzeArgs, OutputFormat, analyze};
pub use run::{RunOutcome, run};

pub const EXIT_CONFIG: u8 = 1;
pub const EXIT_SOURCE: u8 = 2;
pub const EXIT_NO_DATA: u8 = 3;
pub const EXIT_PARSE_QUALITY: u8 = 4;
pub const EXIT_RENDER: u8 = 5;

/// Process exit code for a failed command.
///
/// The first typed error found in the context chain decides; anything
/// unrecognized is reported as a configuration problem.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<PipelineError>() {
            return match e.kind() {
                ErrorKind::SourceOpen => EXIT_SOURCE,
                ErrorKind::NoData => EXIT_NO_DATA,
                ErrorKind::ParseQuality => EXIT_PARSE_QUALITY,
            };
        }
        if cause.is::<ConfigError>() {
            return EXIT_CONFIG;
        }
        if cause.is::<DiscoverError>() {
            return EXIT_SOURCE;
        }
        if cause.is::<RenderError>() {
            return EXIT_RENDER;
        }
    }
    EXIT_CONFIG
}
