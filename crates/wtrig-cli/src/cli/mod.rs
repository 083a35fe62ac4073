//! CLI for wtrig, the worker trigger URL builder.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use wtrig_core::{config, logging};

use commands::{
    run_build, run_completions, run_form, run_inspect, run_trigger, run_workers, BuildOptions,
};

/// Top-level CLI for wtrig.
#[derive(Debug, Parser)]
#[command(name = "wtrig")]
#[command(about = "wtrig: turn a pasted api.php link into a worker trigger URL", long_about = None)]
pub struct Cli {
    /// Log at debug level to stderr instead of the log file.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Worker choice shared by `build` and `run`. Neither flag means the configured default.
#[derive(Debug, Clone, Default, Args)]
pub struct WorkerArgs {
    /// Worker key from the catalogue (see `wtrig workers`).
    #[arg(short, long, value_name = "KEY", conflicts_with = "custom")]
    pub worker: Option<String>,

    /// Worker key that is not in the catalogue.
    #[arg(short, long, value_name = "KEY")]
    pub custom: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the worker trigger URL for a source api.php link.
    Build {
        /// Source URL, e.g. copied from the browser's Network tab.
        source_url: String,

        #[command(flatten)]
        worker: WorkerArgs,

        /// Also copy the URL to the clipboard.
        #[arg(long)]
        copy: bool,

        /// Also open the URL in the browser.
        #[arg(long)]
        open: bool,
    },

    /// Build the worker trigger URL and open it in the browser.
    Run {
        /// Source URL, e.g. copied from the browser's Network tab.
        source_url: String,

        #[command(flatten)]
        worker: WorkerArgs,
    },

    /// Show host and account of a source URL.
    Inspect {
        /// Source URL to inspect.
        source_url: String,
    },

    /// List the worker catalogue.
    Workers,

    /// Interactive form: edit source and worker, then copy or run.
    Form,

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging(verbose: bool) {
    if verbose {
        logging::init_logging_stderr(true);
    } else if let Err(err) = logging::init_logging() {
        eprintln!("wtrig: file logging unavailable ({err:#}), logging to stderr");
        logging::init_logging_stderr(false);
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        init_logging(cli.verbose);

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Build {
                source_url,
                worker,
                copy,
                open,
            } => run_build(&cfg, &source_url, &worker, BuildOptions { copy, open })?,
            CliCommand::Run { source_url, worker } => run_trigger(&cfg, &source_url, &worker)?,
            CliCommand::Inspect { source_url } => run_inspect(&source_url)?,
            CliCommand::Workers => run_workers(&cfg),
            CliCommand::Form => run_form(&cfg)?,
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
