//! equity CLI - Command-line interface for the exact equity engine
//!
//! This binary provides a CLI harness for running equity calculations and
//! evaluator benchmarks without writing code against the engine.

use clap::{Parser, Subcommand};
use equity_engine::evaluator::benchmark_throughput;
use equity_engine::{finalize, tables, EquityError, EquityRequest, PlayerResult, SolveOptions};
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "equity", version)]
#[command(about = "Exact hold'em equity by full board enumeration")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute win/tie/loss/equity for 2-8 hands
    Calc {
        /// Hole cards for one player, e.g. "As Ks" (repeat per player)
        #[arg(long = "hand", required = true)]
        hands: Vec<String>,
        /// Known community cards, e.g. "Qs Js 9h"
        #[arg(short, long, default_value = "")]
        board: String,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
        /// Enumerate on a single thread
        #[arg(long)]
        sequential: bool,
        /// Number of board-space partitions for parallel runs
        #[arg(long)]
        shards: Option<usize>,
        /// Abort if the enumeration runs longer than this
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
    /// Run benchmarks
    Bench {
        #[command(subcommand)]
        target: BenchTarget,
    },
}

#[derive(Subcommand)]
enum BenchTarget {
    /// 7-card hand evaluator throughput
    Evaluator {
        /// Number of hands to evaluate
        #[arg(default_value_t = 1_000_000)]
        sample_size: usize,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Calc {
            hands,
            board,
            json,
            sequential,
            shards,
            timeout_ms,
        } => {
            let mut options = if sequential {
                SolveOptions::sequential()
            } else {
                SolveOptions::default()
            };
            options.shards = shards;
            options.timeout = timeout_ms.map(Duration::from_millis);

            match calc(&hands, &board, &options, json) {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    log::error!("{}", err);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Bench {
            target: BenchTarget::Evaluator { sample_size },
        } => {
            println!("Running hand evaluator benchmark...");
            println!("Sample size: {} hands", sample_size);
            tables::init();
            let (evals_per_sec, duration_ms) = benchmark_throughput(sample_size);

            println!("Results:");
            println!("  Duration: {} ms", duration_ms);
            println!("  Throughput: {:.2} evals/sec", evals_per_sec);
            println!("  Throughput: {:.2}M evals/sec", evals_per_sec / 1_000_000.0);
            ExitCode::SUCCESS
        }
    }
}

/// Solve and print; any failure on the way comes back as its message
fn calc(hands: &[String], board: &str, options: &SolveOptions, json: bool) -> Result<(), String> {
    let results = run_calc(hands, board, options).map_err(|err| err.to_string())?;
    print_results(&results, json).map_err(|err| err.to_string())
}

fn run_calc(hands: &[String], board: &str, options: &SolveOptions) -> Result<Vec<PlayerResult>, EquityError> {
    let hands: Vec<&str> = hands.iter().map(String::as_str).collect();
    let request = EquityRequest::parse(&hands, board)?;
    tables::init();
    let stats = request.solve(options)?;
    log::debug!("{} boards enumerated", stats.total_boards);
    Ok(finalize(&stats))
}

fn print_results(results: &[PlayerResult], json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }
    for (i, r) in results.iter().enumerate() {
        println!(
            "P{}: Win {:.2}% | Tie {:.2}% | Loss {:.2}% | Equity {:.2}%",
            i + 1,
            r.win_pct,
            r.tie_pct,
            r.loss_pct,
            r.equity_pct
        );
    }
    Ok(())
}
