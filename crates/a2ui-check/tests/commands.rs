use a2ui_check::cli::Cli;
use a2ui_check::run;
use clap::Parser;
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &serde_json::Value) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_string(content).unwrap()).unwrap();
    path
}

fn run_args(args: &[&str]) -> a2ui_check::Outcome {
    let mut argv = vec!["a2ui-check"];
    argv.extend_from_slice(args);
    run(&Cli::try_parse_from(argv).unwrap()).unwrap()
}

fn good_dashboard() -> serde_json::Value {
    serde_json::json!([
        {"id": "tldr-1", "type": "a2ui.TLDR", "payload": {"summary": "Short"}},
        {"id": "stat-1", "type": "a2ui.StatCard", "payload": {"value": "$196B", "label": "Market"}},
        {"id": "headline-1", "type": "a2ui.HeadlineCard", "payload": {"title": "Launch"}},
        {"id": "video-1", "type": "a2ui.VideoCard", "payload": {"videoId": "abc", "platform": "youtube"}}
    ])
}

#[test]
fn validate_single_tree() {
    let dir = TempDir::new().unwrap();
    let file = write(
        &dir,
        "tree.json",
        &serde_json::json!({
            "id": "intro",
            "type": "a2ui.Section",
            "payload": {"title": "Intro"},
            "children": [{"id": "intro", "type": "a2ui.TLDR", "payload": {}}]
        }),
    );
    let outcome = run_args(&["validate", file.to_str().unwrap()]);
    assert!(!outcome.ok);
    assert!(outcome.output.starts_with("Tree validation: INVALID"));
    assert!(outcome.output.contains("[CIRCULAR_REFERENCE] root.children[0]"));
}

#[test]
fn validate_json_output_and_depth_override() {
    let dir = TempDir::new().unwrap();
    let file = write(
        &dir,
        "deep.json",
        &serde_json::json!({
            "id": "a", "type": "a2ui.Section", "payload": {},
            "children": [{"id": "b", "type": "a2ui.Section", "payload": {},
                "children": [{"id": "c", "type": "a2ui.TLDR", "payload": {}}]}]
        }),
    );
    let path = file.to_str().unwrap();
    assert!(run_args(&["validate", path]).ok);

    let outcome = run_args(&["--json", "validate", path, "--max-depth", "1"]);
    assert!(!outcome.ok);
    let json: serde_json::Value = serde_json::from_str(&outcome.output).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"][0]["kind"], "INVALID_CHILDREN");
    assert_eq!(json["stats"]["maxDepthObserved"], 1);
}

#[test]
fn variety_accepts_type_names() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "types.json", &serde_json::json!(["S", "S", "S"]));
    let path = file.to_str().unwrap();

    let outcome = run_args(&["variety", path]);
    assert!(!outcome.ok);
    assert!(outcome.output.contains("S repeated 3 times at positions 0-2"));

    let relaxed = run_args(&["variety", path, "--min-types", "1", "--max-run", "3"]);
    assert!(relaxed.ok);
}

#[test]
fn check_many_candidates_with_policy() {
    let dir = TempDir::new().unwrap();
    let good = write(&dir, "good.json", &good_dashboard());
    let dull = write(
        &dir,
        "dull.json",
        &serde_json::json!([
            {"id": "a", "type": "a2ui.StatCard", "payload": {}},
            {"id": "b", "type": "a2ui.StatCard", "payload": {}}
        ]),
    );
    let (good, dull) = (good.to_str().unwrap(), dull.to_str().unwrap());

    assert!(run_args(&["check", good]).ok);
    assert!(run_args(&["check", good, dull]).ok);

    let strict = run_args(&["check", good, dull, "--policy", "strict"]);
    assert!(!strict.ok);
    assert!(strict.output.contains("== "));
    assert!(strict.output.contains("Dashboard check: VALID"));
    assert!(strict.output.contains("Dashboard check: INVALID (strict policy"));
}

#[test]
fn config_file_sets_policy_and_flags_override() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("gate.toml");
    std::fs::write(&config, "[gate]\npolicy = \"strict\"\n\n[variety]\nmin_unique_types = 5\n").unwrap();
    let good = write(&dir, "good.json", &good_dashboard());
    let (config, good) = (config.to_str().unwrap(), good.to_str().unwrap());

    assert!(!run_args(&["--config", config, "check", good]).ok);
    assert!(run_args(&["--config", config, "check", good, "--min-types", "4"]).ok);
    assert!(run_args(&["--config", config, "check", good, "--policy", "advisory"]).ok);
}

#[test]
fn check_rejects_non_array_input() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "object.json", &serde_json::json!({"id": "a"}));
    let cli = Cli::try_parse_from(["a2ui-check", "check", file.to_str().unwrap()]).unwrap();
    let err = run(&cli).unwrap_err();
    assert!(err.to_string().contains("expected an array of sections"));
}

#[test]
fn demo_matches_expectations() {
    let outcome = run_args(&["demo"]);
    assert!(outcome.ok);
    assert!(outcome.output.contains("== Example 1: Good variety"));

    let json = run_args(&["--json", "demo"]);
    let entries: serde_json::Value = serde_json::from_str(&json.output).unwrap();
    assert_eq!(entries.as_array().map(Vec::len), Some(9));
}
