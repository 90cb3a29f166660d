use clap::{Parser, Subcommand};
use logstat_core::cli::conf::{self, ConfigCmd};
use logstat_core::cli::{self, AnalyzeArgs, RunOutcome};
use logstat_core::conf::resolve_config;
use logstat_core::logging::init_logging;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "logstat",
    version,
    about = "logstat: access log latency reports"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report on the newest log in log_dir (default)
    Run {
        /// Path to the logstat config file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print statistics for a single log file
    Analyze(AnalyzeArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() -> ExitCode {
    let opts = Cli::parse();

    match opts.command {
        Some(Command::Run { config }) => run(config),
        None => run(None),

        Some(Command::Analyze(args)) => {
            match cli::analyze(&args, io::stdout().is_terminal()) {
                Ok(out) => {
                    print!("{out}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("error: {e:#}");
                    ExitCode::from(cli::exit_code(&e))
                }
            }
        }

        Some(Command::Config { cmd }) => config(cmd),
    }
}

fn run(config: Option<PathBuf>) -> ExitCode {
    let cfg = match resolve_config(config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(cli::EXIT_CONFIG);
        }
    };

    let _guard = match init_logging(&cfg.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::from(cli::EXIT_CONFIG);
        }
    };

    std::panic::set_hook(Box::new(|info| {
        tracing::error!(panic = %info, "unexpected failure");
    }));

    match cli::run(&cfg) {
        Ok(outcome) => {
            match &outcome {
                RunOutcome::NoLogs => {}
                RunOutcome::AlreadyReported { report } | RunOutcome::Rendered { report, .. } => {
                    tracing::info!(report = %report.display(), "done");
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "run failed");
            ExitCode::from(cli::exit_code(&e))
        }
    }
}

fn config(cmd: ConfigCmd) -> ExitCode {
    let result = match cmd {
        ConfigCmd::Check { path, plain } => match conf::check(path.as_deref()) {
            Ok(_) => Ok(()),
            Err(e) => {
                conf::print_config_error(&e, plain);
                return ExitCode::from(cli::EXIT_CONFIG);
            }
        },
        ConfigCmd::Dump { path, json: _, yaml } => conf::dump(path.as_deref(), yaml),
        ConfigCmd::Init { dir } => conf::init(&dir),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(cli::exit_code(&e))
        }
    }
}
