mod common;

use common::order_graph;
use flowscore::config::{
    discover_config, load_config_from_path, parse_and_validate_config, CONFIG_FILE_NAME,
};
use flowscore::{score_diagram, score_diagram_with, DimensionWeights, Error, ScoringConfig};
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_partial_config_keeps_default_thresholds() {
    let config = parse_and_validate_config(indoc! {r#"
        [weights]
        structural = 0.10
        control_flow = 0.30
    "#})
    .unwrap();

    assert_eq!(config.weights.structural, 0.10);
    assert_eq!(config.weights.control_flow, 0.30);
    assert_eq!(config.weights.naming, 0.15);
    assert_eq!(config.thresholds, ScoringConfig::default().thresholds);
}

#[test]
fn test_invalid_weights_fall_back_to_defaults() {
    let config = parse_and_validate_config(indoc! {r#"
        [weights]
        naming = 3.0
    "#})
    .unwrap();
    assert_eq!(config.weights, DimensionWeights::default());
}

#[test]
fn test_unordered_breakpoints_are_rejected() {
    let err = parse_and_validate_config(indoc! {r#"
        [[thresholds.structural]]
        at = 40.0
        score = 50.0

        [[thresholds.structural]]
        at = 20.0
        score = 100.0
    "#})
    .unwrap_err();
    assert!(matches!(err, Error::Configuration(_)), "{err}");
}

#[test]
fn test_malformed_toml_is_a_toml_error() {
    let err = parse_and_validate_config("[weights\nnaming = ").unwrap_err();
    assert!(matches!(err, Error::Toml(_)));
}

#[test]
fn test_config_is_discovered_in_parent_directories() {
    let root = TempDir::new().unwrap();
    let nested = root.path().join("diagrams").join("billing");
    fs::create_dir_all(&nested).unwrap();
    fs::write(
        root.path().join(CONFIG_FILE_NAME),
        indoc! {r#"
            [[thresholds.control_flow]]
            at = 1.0
            score = 100.0

            [[thresholds.control_flow]]
            at = 3.0
            score = 0.0
        "#},
    )
    .unwrap();

    let config = discover_config(nested);
    assert_eq!(config.thresholds.control_flow.len(), 2);
    assert_eq!(config.weights, DimensionWeights::default());
}

#[test]
fn test_missing_config_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let err = load_config_from_path(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::FileSystem { .. }));
}

#[test]
fn test_stricter_curve_lowers_the_score() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        indoc! {r#"
            [[thresholds.control_flow]]
            at = 1.0
            score = 100.0

            [[thresholds.control_flow]]
            at = 3.0
            score = 0.0
        "#},
    )
    .unwrap();
    let strict = load_config_from_path(&path).unwrap();

    let graph = order_graph();
    let default_report = score_diagram(&graph);
    let strict_report = score_diagram_with(&graph, &strict);
    assert_eq!(strict_report.dimensions.control_flow, 50.0);
    assert!(strict_report.total_score < default_report.total_score);
}
