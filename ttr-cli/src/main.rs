// Loads a route file, and prints its longest single-color train route.

mod runner;

use clap::Parser;
use runner::RunOptions;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};
use ttr_analyzer::config::SearchConfig;

const DEFAULT_ROUTES_PATH: &str = "ttr.dat";

/// Finds the longest single-color train route of a Ticket To Ride map.
#[derive(Debug, Parser)]
#[command(name = "longest-route", version)]
struct Cli {
    /// Route file, with one `city1 city2 color[,color...] length` route per line.
    #[arg(default_value = DEFAULT_ROUTES_PATH)]
    input: PathBuf,

    /// Allow gray routes, which match any color.
    #[arg(long)]
    use_gray: bool,

    /// Log every step of the search.
    #[arg(long)]
    debug: bool,

    /// Wait for ENTER after every step of the search.
    #[arg(long)]
    debug_pause: bool,

    /// Print the longest route as JSON.
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_filter(&self) -> EnvFilter {
        if self.debug {
            return EnvFilter::new("warn,ttr_analyzer=trace");
        }

        match self.verbose {
            0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    }

    fn into_run_options(self) -> RunOptions {
        RunOptions {
            input: self.input,
            config: SearchConfig {
                include_wild: self.use_gray,
                verbose_trace: self.debug,
                interactive_step: self.debug_pause,
            },
            json: self.json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    fmt()
        .with_env_filter(cli.log_filter())
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    runner::run(&cli.into_run_options(), &mut std::io::stdout().lock())
}
