use clap::{CommandFactory, Parser, ValueEnum};
use std::io;
use std::process;

mod board;
mod error;
mod logging;
mod search;
mod solution;

use board::BOARD_SIZE;
use error::Result;
use logging::{LogConfig, LogFormat};
use search::parallel::config::{DEFAULT_QUEUE_CAPACITY, DEFAULT_TARGET_QUEENS};
use search::{ParallelConfig, SearchSession};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "nqueens")]
#[command(about = "Parallel exhaustive search for non-attacking queen placements")]
#[command(version)]
struct Args {
    /// Number of search worker threads
    #[arg(short = 't', long = "threads", default_value_t = 1,
          value_parser = clap::value_parser!(u32).range(1..))]
    threads: u32,

    /// Number of queens in a complete placement
    #[arg(short = 'n', long, default_value_t = DEFAULT_TARGET_QUEENS)]
    queens: usize,

    /// Starting placement shared by every worker, e.g. "[0,1] [1,3]"
    #[arg(long)]
    prefix: Option<String>,

    /// Capacity of the solution queue between workers and the printer
    #[arg(long, default_value_t = DEFAULT_QUEUE_CAPACITY,
          value_parser = parse_capacity)]
    queue_capacity: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value = "pretty")]
    log_format: CliLogFormat,

    /// Print per-worker statistics after the search
    #[arg(long)]
    stats: bool,
}

/// CLI log format selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliLogFormat {
    /// Multi-field human-readable output
    Pretty,
    /// Single-line output
    Compact,
}

impl From<CliLogFormat> for LogFormat {
    fn from(cli: CliLogFormat) -> Self {
        match cli {
            CliLogFormat::Pretty => LogFormat::Pretty,
            CliLogFormat::Compact => LogFormat::Compact,
        }
    }
}

fn parse_capacity(s: &str) -> std::result::Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("capacity must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("'{}' is not a positive integer", s)),
    }
}

// --- Search ---

fn run(args: Args) -> Result<()> {
    let prefix = args
        .prefix
        .as_deref()
        .map(solution::parse_coords)
        .transpose()?;

    let config = ParallelConfig::default()
        .with_workers(args.threads as usize)
        .with_queue_capacity(args.queue_capacity)
        .with_target(args.queens)
        .with_prefix_option(prefix);

    let session = SearchSession::new(config)?;

    // Fast abort: report what was counted so far and leave without joining.
    let counter = session.counter();
    let queue = session.queue();
    ctrlc::set_handler(move || {
        let total = counter.get();
        eprintln!("\nTotal solutions found: {}", total);
        queue.close();
        process::exit(0);
    })?;

    let result = session.find_solutions::<BOARD_SIZE, _>(io::stdout())?;

    if args.stats {
        for (worker_id, stats) in &result.worker_statistics {
            eprintln!("Worker {}:", worker_id);
            for line in stats.format_summary().lines() {
                eprintln!("  {}", line);
            }
        }
    }
    eprintln!("Total solutions found: {}", result.total_solutions);

    Ok(())
}

/// Parse arguments, always following a bad invocation with the usage line.
fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            eprintln!("\n{}", Args::command().render_usage());
            process::exit(2);
        }
        // --help and --version
        Err(e) => e.exit(),
    }
}

fn main() {
    let args = parse_args();

    logging::init(
        LogConfig::from_verbosity(args.verbose)
            .with_format(args.log_format.into())
            .with_env_overrides(),
    );

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
