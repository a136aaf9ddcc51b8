//! Order Mapper CLI - Run, time and verify the Shopify order mapping.
//!
//! # Usage
//!
//! ```bash
//! # Map an order file and print the internal order
//! om-cli map fixtures/shopify-order.json
//!
//! # Time the mapping
//! om-cli bench fixtures/shopify-order.json --iterations 100000 --workers 4
//!
//! # Check the mapping against a reference output
//! om-cli compare fixtures/shopify-order.json fixtures/internal-order.json
//! ```
//!
//! # Commands
//!
//! - `map` - Map one order file
//! - `bench` - Measure mapping latency and throughput
//! - `compare` - Diff mapped output against a reference output
//!
//! See [`config`] for environment variables.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use commands::bench::BenchOptions;
use config::{CliConfig, LogFormat};
use error::CliError;

#[derive(Parser)]
#[command(name = "om-cli")]
#[command(version, about = "Shopify order mapper tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Map a Shopify order JSON file to an internal order
    Map {
        /// Shopify order JSON file
        input: PathBuf,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Measure mapping latency and throughput
    Bench {
        /// Shopify order JSON file
        input: PathBuf,

        /// Measured iterations (default: `OM_BENCH_ITERATIONS` or 10000)
        #[arg(short = 'n', long)]
        iterations: Option<u64>,

        /// Warmup iterations (default: `OM_BENCH_WARMUP` or 1000)
        #[arg(short, long)]
        warmup: Option<u64>,

        /// Blocking worker tasks (default: `OM_BENCH_WORKERS` or 1)
        #[arg(short = 'j', long)]
        workers: Option<usize>,

        /// Decode the JSON text on every iteration
        #[arg(long)]
        include_decode: bool,
    },
    /// Compare mapped output against a reference output
    Compare {
        /// Shopify order JSON file
        input: PathBuf,

        /// Reference internal order JSON file
        expected: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = CliConfig::from_env();

    init_tracing(config.as_ref().map_or(LogFormat::Text, |c| c.log_format));

    let result = match config {
        Ok(config) => run(cli, &config).await,
        Err(e) => Err(CliError::from(e)),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing with `RUST_LOG` filtering.
///
/// Defaults to info level for our crates if `RUST_LOG` is not set.
fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "order_mapper_cli=info,order_mapper_core=info".into());

    let is_json = format == LogFormat::Json;
    let json_layer = is_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!is_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run(cli: Cli, config: &CliConfig) -> Result<(), CliError> {
    match cli.command {
        Commands::Map {
            input,
            output,
            compact,
        } => commands::map::run(&input, output.as_deref(), compact).await?,
        Commands::Bench {
            input,
            iterations,
            warmup,
            workers,
            include_decode,
        } => {
            let options = BenchOptions {
                iterations: iterations.unwrap_or(config.bench.iterations),
                warmup: warmup.unwrap_or(config.bench.warmup),
                workers: workers.unwrap_or(config.bench.workers),
                include_decode,
            };
            commands::bench::run(&input, options).await?;
        }
        Commands::Compare { input, expected } => {
            commands::compare::run(&input, &expected).await?;
        }
    }
    Ok(())
}
