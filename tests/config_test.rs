// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Config files drive a full planning run.

use plate_planner::{
    build_transition_graph, enumerate_paths, CostMetric, PlanContext, PlanError, PlannerConfig,
    Report,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_file_round_trip_through_plan() {
    let file = write_config(
        r#"
inventory = [5, 5, 10]
targets = [10, 20]
top_k = 1
rank_by = ["weight"]
"#,
    );
    let config = PlannerConfig::load(file.path()).unwrap();
    let inventory = config.inventory().unwrap();

    let mut ctx = PlanContext::new();
    let graph = build_transition_graph(&mut ctx, &inventory, &config.targets).unwrap();
    let paths = enumerate_paths(&mut ctx, graph.layers(), graph.edges());

    // 10 is (10) or (5,5); 20 is only (5,5,10).
    assert_eq!(paths.len(), 2);

    let report = Report::new(graph.nodes(), graph.edges(), &paths);
    let ranked = report.ranked(config.rank_by[0], config.top_k);
    assert_eq!(config.rank_by, vec![CostMetric::Weight]);
    assert_eq!(ranked.len(), 1);
    // (10) -> (5,5,10) cancels the 10 and adds 5+5.
    assert_eq!((ranked[0].primary, ranked[0].secondary), (20, 3));
    assert_eq!(ranked[0].chain(), "() -> (10) -> (5,5,10)");
}

#[test]
fn test_malformed_config_file() {
    let file = write_config("inventory = \"heavy\"");
    let err = PlannerConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, PlanError::Config(_)));
}
