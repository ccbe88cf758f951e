//! Glue between the command line and [`ttr_analyzer`]: reads the routes, runs the
//! search, and writes the report.

use anyhow::Context;
use std::fs::read_to_string;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use ttr_analyzer::config::SearchConfig;
use ttr_analyzer::error::AnalyzerError;
use ttr_analyzer::explorer::Explorer;
use ttr_analyzer::map::Map;
use ttr_analyzer::report::RouteReport;

/// Everything needed for one run, once arguments are parsed.
#[derive(Debug)]
pub struct RunOptions {
    pub input: PathBuf,
    pub config: SearchConfig,
    /// Whether the report is written as JSON rather than text.
    pub json: bool,
}

pub fn run(options: &RunOptions, out: &mut impl Write) -> anyhow::Result<()> {
    let routes = read_to_string(&options.input)
        .with_context(|| format!("failed to read route file {}", options.input.display()))?;

    let report = if options.config.interactive_step {
        let stdin = io::stdin();
        analyze(&routes, options.config, options.json, || pause(&mut stdin.lock()))
    } else {
        analyze(&routes, options.config, options.json, || {})
    };
    let report = report
        .with_context(|| format!("failed to analyze route file {}", options.input.display()))?;

    writeln!(out, "{}", report)?;
    Ok(())
}

/// Searches `routes` for their longest route, calling `after_step` after every
/// step of the search, and renders the result.
///
/// A map without any usable route is not an error: it is reported as such.
pub fn analyze(
    routes: &str,
    config: SearchConfig,
    json: bool,
    mut after_step: impl FnMut(),
) -> anyhow::Result<String> {
    let map = Map::parse(routes)?;
    info!(
        num_cities = map.num_cities(),
        num_routes = map.num_routes(),
        include_wild = config.include_wild,
        "Searching for the longest route"
    );

    let longest_route = Explorer::new(&map, config).find_longest_route_with(|_| after_step())?;

    match RouteReport::new(&map, longest_route.as_ref()) {
        Ok(report) if json => Ok(serde_json::to_string_pretty(&report)?),
        Ok(report) => Ok(report.to_string()),
        Err(AnalyzerError::NoRouteFound) => Ok(AnalyzerError::NoRouteFound.to_string()),
        Err(err) => Err(err.into()),
    }
}

pub(crate) fn pause(input: &mut impl BufRead) {
    eprint!("Press ENTER to continue...");
    let mut line = String::new();
    if let Err(err) = input.read_line(&mut line) {
        warn!(%err, "Could not wait for ENTER");
    }
}
