use std::process::{Command, Output};
use tempfile::tempdir;

fn finder() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_example-finder"));
    // Keep discovery away from the developer's own config
    let scratch = std::env::temp_dir();
    command
        .current_dir(&scratch)
        .env("XDG_CONFIG_HOME", scratch.join("example-finder-test-config"));
    command
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_cli_help_command() {
    let output = finder().arg("--help").output().expect("Failed to run --help");

    assert!(output.status.success());
    let text = stdout(&output);
    for command in ["search", "gallery", "browse", "quiz", "paths", "show", "validate"] {
        assert!(text.contains(command), "missing {command}");
    }
}

#[test]
fn test_search_json() {
    let output = finder()
        .args(["search", "friend", "--json"])
        .output()
        .expect("Failed to run search");

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let ids: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["todo", "billboard", "aptosfriend"]);
}

#[test]
fn test_search_without_results_prints_hint() {
    let output = finder()
        .args(["search", "nonexistent-query-xyz"])
        .output()
        .expect("Failed to run search");

    assert!(output.status.success());
    assert!(stdout(&output).contains("No examples found matching your criteria"));
}

#[test]
fn test_gallery_count() {
    let output = finder()
        .args(["gallery", "--new"])
        .output()
        .expect("Failed to run gallery");

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("5 example(s) found"));
}

#[test]
fn test_quiz_recommendations() {
    let output = finder()
        .args([
            "quiz",
            "--experience",
            "none",
            "--background",
            "web2",
            "--time",
            "medium",
            "--json",
        ])
        .output()
        .expect("Failed to run quiz");

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let recommendations = parsed["recommendations"].as_array().unwrap();
    assert!(!recommendations.is_empty() && recommendations.len() <= 3);
}

#[test]
fn test_show_unknown_example_fails() {
    let output = finder()
        .args(["show", "does-not-exist"])
        .output()
        .expect("Failed to run show");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Example not found: does-not-exist"));
}

#[test]
fn test_custom_catalog_and_config() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("catalog.yaml"),
        r#"
examples:
  - id: hello
    title: Hello Move
    description: First module
    longDescription: Write and publish a first Move module.
    url: https://example.com/hello
    categories: [basics]
    difficulty: beginner
"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("example-finder.yaml"),
        "catalog: catalog.yaml\nformat: json\n",
    )
    .unwrap();

    let output = finder()
        .arg("gallery")
        .current_dir(dir.path())
        .output()
        .expect("Failed to run gallery");

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(parsed[0]["id"], "hello");
    assert_eq!(parsed.as_array().unwrap().len(), 1);
}

#[test]
fn test_paths_reference_missing_examples_gracefully() {
    let dir = tempdir().unwrap();
    let catalog = dir.path().join("catalog.json");
    std::fs::write(
        &catalog,
        r##"[{"id":"todo","title":"To-Do","description":"d","longDescription":"l","url":"#","categories":["basics"],"difficulty":"beginner"}]"##,
    )
    .unwrap();

    let output = finder()
        .args(["paths", "web3", "--json", "--catalog"])
        .arg(&catalog)
        .output()
        .expect("Failed to run paths");

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(parsed[0]["steps"][0]["example"]["id"], "todo");
    assert_eq!(parsed[0]["steps"][1]["example"]["id"], "default");
    assert_eq!(parsed[0]["steps"][1]["example"]["title"], "Example Not Found");
}

#[test]
fn test_validate_reports_errors() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("bad.yaml");
    std::fs::write(
        &file,
        "- id: a\n  title: A\n  description: d\n  longDescription: l\n  url: '#'\n  categories: [defi]\n  difficulty: beginner\n  estimatedTime: soon\n",
    )
    .unwrap();

    let output = finder()
        .arg("validate")
        .arg(&file)
        .output()
        .expect("Failed to run validate");

    assert!(!output.status.success());
    assert!(stdout(&output).contains("ERROR: example 'a' has malformed estimatedTime"));
}

#[test]
fn test_validate_names_unparseable_value() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("bad.yaml");
    std::fs::write(
        &file,
        "- id: a\n  title: A\n  description: d\n  longDescription: l\n  url: '#'\n  categories: [defi]\n  difficulty: expert\n",
    )
    .unwrap();

    let output = finder()
        .arg("validate")
        .arg(&file)
        .output()
        .expect("Failed to run validate");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("expert"), "{stderr}");
    assert!(!stderr.contains("untagged"), "{stderr}");
}
