use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture writing a schema and one record into a temp directory
struct TestFixture {
    _temp_dir: TempDir,
    fields: PathBuf,
    rows: PathBuf,
}

impl TestFixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let fields = temp_dir.path().join("fields.json");
        let rows = temp_dir.path().join("rows.jsonl");

        let schema = serde_json::to_string(&logseg_testing::sample_schema())
            .expect("Failed to serialize schema");
        fs::write(&fields, schema).expect("Failed to write schema");

        let row = serde_json::to_string(&logseg_testing::sample_row())
            .expect("Failed to serialize row");
        fs::write(&rows, row).expect("Failed to write row");

        Self {
            _temp_dir: temp_dir,
            fields,
            rows,
        }
    }

    fn command(&self) -> Command {
        Command::cargo_bin("logseg").expect("Failed to find logseg binary")
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self._temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }
}

#[test]
fn tokenize_renders_every_field_of_the_record() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("tokenize")
        .arg("--fields")
        .arg(&fixture.fields)
        .arg("--row")
        .arg(&fixture.rows)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "message: GET /api/v1/items timeout after 30s",
        ))
        .stdout(predicate::str::contains("host: node-7.cluster.local"))
        .stdout(predicate::str::contains("timestamp: 2024-04-09 13:02:11"));
}

#[test]
fn tokenize_single_field_emits_json_tokens() {
    let fixture = TestFixture::new();

    let assert = fixture
        .command()
        .arg("tokenize")
        .arg("--fields")
        .arg(&fixture.fields)
        .arg("--row")
        .arg(&fixture.rows)
        .arg("--field")
        .arg("message")
        .arg("--json")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(parsed["field"], "message");

    let tokens = parsed["tokens"].as_array().unwrap();
    let marked: Vec<&str> = tokens
        .iter()
        .filter(|t| t["is_mark"] == true)
        .map(|t| t["text"].as_str().unwrap())
        .collect();
    assert_eq!(marked, vec!["timeout"]);
}

#[test]
fn tokenize_rejects_an_unknown_field_name() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("tokenize")
        .arg("--fields")
        .arg(&fixture.fields)
        .arg("--row")
        .arg(&fixture.rows)
        .arg("--field")
        .arg("no_such_field")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no_such_field"));
}

#[test]
fn expand_lists_virtual_nodes() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("expand")
        .arg("--fields")
        .arg(&fixture.fields)
        .assert()
        .success()
        .stdout(predicate::str::contains("kubernetes (virtual)"))
        .stdout(predicate::str::contains("kubernetes.pod (virtual)"))
        .stdout(predicate::str::contains("kubernetes.pod.name\n"));
}

#[test]
fn config_file_overrides_the_budgets() {
    let fixture = TestFixture::new();
    let config = fixture.write("logseg.toml", "max_word_tokens = 2\nchunk_size = 4\n");

    let assert = fixture
        .command()
        .arg("--config")
        .arg(&config)
        .arg("tokenize")
        .arg("--fields")
        .arg(&fixture.fields)
        .arg("--row")
        .arg(&fixture.rows)
        .arg("--field")
        .arg("message")
        .arg("--json")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    let tokens = parsed["tokens"].as_array().unwrap();
    let blobs: Vec<&serde_json::Value> = tokens
        .iter()
        .filter(|t| t["is_blob_word"] == true)
        .collect();
    assert!(!blobs.is_empty());
    assert!(blobs
        .iter()
        .all(|t| t["text"].as_str().unwrap().chars().count() <= 4));
}

#[test]
fn invalid_config_file_fails_with_context() {
    let fixture = TestFixture::new();
    let config = fixture.write("broken.toml", "max_word_tokens = \"many\"\n");

    fixture
        .command()
        .arg("--config")
        .arg(&config)
        .arg("expand")
        .arg("--fields")
        .arg(&fixture.fields)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}
