mod commands;

use crate::commands::{new_poll, replay, report, tally, tiebreak, validate};
use clap::{Parser, Subcommand};
use meet_poll::config::PollConfig;
use meet_poll::reports::ReportResult;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(version, about = "Tally and inspect meeting polls")]
struct Opts {
    /// TOML config file with limits and policies.
    #[clap(long, global = true)]
    config: Option<PathBuf>,
    /// Log debug output to stderr.
    #[clap(short, long, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the starting state of a new poll.
    New {
        /// Output state file
        out: PathBuf,
        /// Poll question (defaults to the configured one)
        #[clap(long)]
        question: Option<String>,
        /// Text file with one custom option per line
        #[clap(long)]
        options: Option<PathBuf>,
    },
    /// Print the results of a poll state file.
    Tally {
        /// Poll state file
        state: PathBuf,
    },
    /// Reduce a JSON-lines message log and print the results.
    Replay {
        /// Message log, one envelope per line
        log: PathBuf,
        /// Starting state, as handed to clients when the activity starts
        #[clap(long)]
        initial: Option<PathBuf>,
        /// Where to write the final state
        #[clap(long)]
        out: Option<PathBuf>,
        /// Fail on the first malformed message instead of skipping it
        #[clap(long)]
        strict: bool,
    },
    /// Check a custom option list.
    Validate {
        /// Text file with one option per line
        options: PathBuf,
    },
    /// Write a JSON results report.
    Report {
        /// Poll state file
        state: PathBuf,
        /// Report output (gzipped if it ends in .gz)
        out: PathBuf,
    },
    /// Start a tiebreak round between the candidates tied for first place.
    Tiebreak {
        /// Poll state file
        state: PathBuf,
        /// Output state file for the new round
        out: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(opts: Opts) -> ReportResult<()> {
    let config = PollConfig::load_or_default(opts.config.as_deref())?;

    match opts.command {
        Command::New {
            out,
            question,
            options,
        } => new_poll(&out, question.as_deref(), options.as_deref(), &config),
        Command::Tally { state } => tally(&state),
        Command::Replay {
            log,
            initial,
            out,
            strict,
        } => replay(&log, initial.as_deref(), out.as_deref(), strict, &config),
        Command::Validate { options } => validate(&options, &config),
        Command::Report { state, out } => report(&state, &out),
        Command::Tiebreak { state, out } => tiebreak(&state, &out, &config),
    }
}

fn main() {
    let opts = Opts::parse();
    init_tracing(opts.verbose);

    if let Err(e) = run(opts) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
