// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line planner.
//!
//! Builds the transition graph for an inventory and checkpoint sequence,
//! enumerates every plan and prints the cheapest ones.
//!
//! ```text
//! plates --inventory 5,10,10,10,25,25,45,45 --targets 15,25,35,55,60 --top 5
//! plates --config session.toml --rank-by weight --format json
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use clap::Parser;
use plate_planner::{
    build_transition_graph, enumerate_paths, CostMetric, PlanContext, PlannerConfig, Report,
    Result,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Plan unit swaps that hit a sequence of target sums.
#[derive(Parser, Debug)]
#[command(name = "plates")]
#[command(about = "Find minimum-cost unit swaps that hit each target sum in order")]
struct Args {
    /// TOML file with inventory, targets, top_k and rank_by
    #[arg(long)]
    config: Option<PathBuf>,

    /// Units available, comma separated (overrides the config)
    #[arg(long, value_delimiter = ',')]
    inventory: Option<Vec<u64>>,

    /// Cumulative target sums, comma separated (overrides the config)
    #[arg(long, value_delimiter = ',')]
    targets: Option<Vec<u64>>,

    /// Number of plans to show per metric
    #[arg(long)]
    top: Option<usize>,

    /// Metric to rank by: count or weight (repeatable)
    #[arg(long = "rank-by")]
    rank_by: Vec<CostMetric>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Also print every edge of the transition graph
    #[arg(long)]
    show_graph: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("plate_planner=info,plates=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "Planning failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<String> {
    let mut config = match &args.config {
        Some(path) => PlannerConfig::load(path)?,
        None => PlannerConfig::default(),
    };
    if let Some(inventory) = args.inventory {
        config.inventory = inventory;
    }
    if let Some(targets) = args.targets {
        config.targets = targets;
    }
    if let Some(top) = args.top {
        config.top_k = top;
    }
    if !args.rank_by.is_empty() {
        config.rank_by = args.rank_by;
    }

    let inventory = config.inventory()?;
    info!(
        units = inventory.units().len(),
        total = inventory.total(),
        checkpoints = config.targets.len(),
        "Planning"
    );

    let mut ctx = PlanContext::new();
    let graph = build_transition_graph(&mut ctx, &inventory, &config.targets)?;
    let paths = enumerate_paths(&mut ctx, graph.layers(), graph.edges());
    for (counter, value) in ctx.statistics.iter() {
        debug!(%counter, value, "Statistic");
    }

    let report = Report::new(graph.nodes(), graph.edges(), &paths);
    match args.format {
        Format::Text => Ok(report.render_text(&config.rank_by, config.top_k, args.show_graph)),
        Format::Json => report
            .to_json(&config.rank_by, config.top_k)
            .map(|json| json + "\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("plates").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_plan_the_warmup() {
        let output = run(parse(&["--top", "1"])).unwrap();
        assert!(output.starts_with("Total ways: 36\n"));
        assert!(output.contains("\n9 90 () -> (5,10) -> (25) -> "));
    }

    #[test]
    fn test_flags_override_config() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"inventory = [5, 5, 10]\ntargets = [10, 20]\ntop_k = 5\nrank_by = [\"count\"]\n")
            .unwrap();
        let config = file.path().to_str().unwrap();

        let from_config = run(parse(&["--config", config, "--format", "json"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&from_config).unwrap();
        assert_eq!(value["total_paths"], 2);
        assert_eq!(value["rankings"][0]["metric"], "count");
        assert_eq!(value["rankings"][0]["paths"].as_array().unwrap().len(), 2);

        let overridden = run(parse(&[
            "--config", config, "--targets", "10", "--top", "1", "--rank-by", "weight",
            "--format", "json",
        ]))
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&overridden).unwrap();
        // Inventory still comes from the file: 10 is (10) or (5,5).
        assert_eq!(value["total_paths"], 2);
        assert_eq!(value["rankings"][0]["metric"], "weight");
        assert_eq!(value["rankings"][0]["paths"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_rank_by_rejected() {
        let parsed = Args::try_parse_from(["plates", "--rank-by", "plates"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_invalid_inventory_fails_run() {
        let err = run(parse(&["--inventory", "5,0"])).unwrap_err();
        assert!(matches!(
            err,
            plate_planner::PlanError::NonPositiveUnit { position: 1 }
        ));
    }
}
