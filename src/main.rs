mod cmd;
mod command;
mod logger;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

use command::SpinnerArgs;

#[derive(Parser)]
#[command(name = "linespin", version, about = "Single-line terminal activity spinner")]
struct Cli {
    #[command(flatten)]
    spinner: SpinnerArgs,

    /// Directory for log files (defaults to the XDG state directory)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scripted start/update/stop sequence
    Demo {
        /// Number of progress updates
        #[arg(long, default_value_t = 5)]
        steps: u32,

        /// Pause between updates in milliseconds
        #[arg(long, default_value_t = 600)]
        delay_ms: u64,
    },
    /// Spin while a command runs, finishing with its outcome
    Run {
        /// Message to show instead of the command line
        #[arg(short, long)]
        message: Option<String>,

        /// Working directory for the command
        #[arg(long)]
        cwd: Option<PathBuf>,

        /// Command and its arguments
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        command: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_dir = match cli.log_dir {
        Some(dir) => dir,
        None => logger::default_log_dir()?,
    };
    let guard = logger::init(&log_dir)?;
    debug!(log_dir = %log_dir.display(), "linespin started");

    match cli.command {
        Commands::Demo { steps, delay_ms } => {
            command::demo::run(&cli.spinner, steps, Duration::from_millis(delay_ms))
        }
        Commands::Run {
            message,
            cwd,
            command,
        } => {
            let code = command::run::run(
                &cli.spinner,
                message.as_deref(),
                cwd.as_deref(),
                &command,
            )?;
            if code != 0 {
                drop(guard);
                std::process::exit(code);
            }
            Ok(())
        }
    }
}
