//! Integration test: every built-in rule against a fixture document.
//!
//! `tests/fixtures/document.json` holds one artboard with a known set of
//! problems; each rule is expected to find exactly its share of them.

use design_lint_core::{Analyzer, AnalyzerError, Config, Document, LintResult, Severity};
use design_lint_rules::{all_rules, minimal_rules};
use std::path::PathBuf;

fn fixture() -> Document {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/document.json");
    Document::from_file(&path).expect("fixture document should load")
}

fn analyze(config: &str) -> Result<LintResult, AnalyzerError> {
    let config = Config::parse(config).expect("fixture config should parse");
    Analyzer::builder()
        .rules(all_rules())
        .config(config)
        .build()
        .expect("analyzer should build")
        .analyze(&fixture())
}

fn summary(result: &LintResult) -> Vec<(String, String)> {
    result
        .violations
        .iter()
        .map(|v| (v.code.clone(), v.location.object_id.clone()))
        .collect()
}

// ── Happy path ──

#[test]
fn all_rules_find_the_seeded_problems() {
    let result = analyze("").expect("analysis should succeed");

    let expected = [
        ("DL001", "t-title"),
        ("DL001", "t-sub"),
        ("DL003", "t-title"),
        ("DL003", "t-sub"),
        ("DL004", "r-card"),
        ("DL009", "ab-landing"),
        ("DL010", "g-empty"),
        ("DL011", "g-wrap"),
        ("DL012", "b-hero"),
        ("DL014", "t-hidden"),
        ("DL015", "ls-unused"),
    ]
    .map(|(code, id)| (code.to_string(), id.to_string()));

    assert_eq!(
        summary(&result),
        expected,
        "unexpected violations: {:#?}",
        result.violations
    );
    assert_eq!(result.rules_run, 19);
    assert_eq!(result.count_by_severity(), (9, 2, 0));
    assert!(result.has_errors());
}

#[test]
fn violations_render_with_layer_paths() {
    let result = analyze("").expect("analysis should succeed");
    let lines: Vec<String> = result
        .by_rule("text-styles-prefer-library")
        .iter()
        .map(|v| v.to_string())
        .collect();

    insta::assert_snapshot!(lines.join("\n"), @r"
    Home / Landing / Title: error [DL003] Text styles must be set with the shared styles of a library
    Home / Landing / Subtitle: error [DL003] Text styles must be set with the shared styles of a library
    ");
}

#[test]
fn unchanged_input_reports_identically() {
    let first = serde_json::to_string(&analyze("").unwrap()).unwrap();
    let second = serde_json::to_string(&analyze("").unwrap()).unwrap();
    assert_eq!(first, second);
}

// ── Configuration ──

#[test]
fn config_disables_tunes_and_reclassifies() {
    let result = analyze(
        r#"
[rules.text-styles-prefer-library]
enabled = false

[rules.artboards-max-ungrouped-layers]
maxUngroupedLayers = 6

[rules.images-no-outsized]
maxRatio = 4

[rules.shared-styles-no-unused]
severity = "info"

[rules.name-pattern-groups]
forbidden = ["^Group \\d+$"]
"#,
    )
    .expect("analysis should succeed");

    assert_eq!(result.rules_run, 18);
    assert!(result.by_rule("text-styles-prefer-library").is_empty());
    assert!(result.by_rule("artboards-max-ungrouped-layers").is_empty());
    assert!(result.by_rule("images-no-outsized").is_empty());

    let groups = result.by_rule("name-pattern-groups");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].location.object_id, "g-empty");

    let unused = result.by_rule("shared-styles-no-unused");
    assert_eq!(unused[0].severity, Severity::Info);
}

// ── Error paths ──

#[test]
fn invalid_option_stops_the_run() {
    let err = analyze("[rules.groups-max-layers]\nmaxLayers = 0\n").unwrap_err();
    assert!(
        matches!(err, AnalyzerError::Rule { ref rule, .. } if rule == "groups-max-layers"),
        "unexpected error: {err}"
    );
}

#[test]
fn unknown_option_is_rejected() {
    let err = analyze("[rules.groups-no-empty]\nstrict = true\n").unwrap_err();
    assert!(matches!(err, AnalyzerError::Rule { .. }));
}

#[test]
fn minimal_preset_is_a_subset() {
    let analyzer = Analyzer::builder()
        .rules(minimal_rules())
        .build()
        .expect("analyzer should build");
    let result = analyzer.analyze(&fixture()).unwrap();
    let codes: Vec<&str> = result.violations.iter().map(|v| v.code.as_str()).collect();
    assert_eq!(codes, vec!["DL004", "DL010"]);
}
