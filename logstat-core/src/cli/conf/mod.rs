mod check;
mod dump;
mod init;

use clap::Subcommand;
use std::path::PathBuf;

pub use check::{check, print_config_error};
pub use dump::{dump, render_dump};
pub use init::init;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to the config file (default: ./logstat.hcl, then built-ins)
        path: Option<PathBuf>,

        /// Print errors without color
        #[arg(long)]
        plain: bool,
    },

    /// Print resolved configuration
    Dump {
        path: Option<PathBuf>,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },

    /// Write a starter config and directory layout
    Init {
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}
