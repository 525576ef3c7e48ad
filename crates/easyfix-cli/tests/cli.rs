use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Writes an isolated config under `{dir}/easyfix/config.toml` and returns
/// the directory to use as `XDG_CONFIG_HOME`.
fn write_config(contents: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    let easyfix_dir = dir.path().join("easyfix");
    std::fs::create_dir_all(&easyfix_dir).expect("create config dir");
    std::fs::write(easyfix_dir.join("config.toml"), contents).expect("write config");
    dir
}

const ONE_REPO_CONFIG: &str = r#"
[github]
username = "tester"

[[repositories]]
name = "org/repo1"
label = "easyfix"
contact = "alice"
"#;

#[test]
fn test_version() {
    let mut cmd = cargo_bin_cmd!("easyfix");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("easyfix"));
}

#[test]
fn test_help_contains_all_commands() {
    let mut cmd = cargo_bin_cmd!("easyfix");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("collect"))
        .stdout(predicate::str::contains("repos"))
        .stdout(predicate::str::contains("auth"))
        .stdout(predicate::str::contains("completion"));
}

#[test]
fn test_completion_bash() {
    let mut cmd = cargo_bin_cmd!("easyfix");
    cmd.arg("completion")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("bash").or(predicate::str::contains("complete")));
}

#[test]
fn test_completion_zsh() {
    let mut cmd = cargo_bin_cmd!("easyfix");
    cmd.arg("completion")
        .arg("zsh")
        .assert()
        .success()
        .stdout(predicate::str::contains("zsh").or(predicate::str::contains("compdef")));
}

#[test]
fn test_invalid_command() {
    let mut cmd = cargo_bin_cmd!("easyfix");
    cmd.arg("invalidcmd")
        .assert()
        .failure()
        .code(predicate::eq(2));
}

#[test]
fn test_invalid_output_format() {
    let mut cmd = cargo_bin_cmd!("easyfix");
    cmd.arg("repos")
        .arg("--output")
        .arg("xml")
        .assert()
        .failure()
        .code(predicate::eq(2))
        .stderr(predicate::str::contains("invalid").or(predicate::str::contains("format")));
}

#[test]
fn test_repos_json_output() {
    let config_home = write_config(ONE_REPO_CONFIG);

    let output = cargo_bin_cmd!("easyfix")
        .env("XDG_CONFIG_HOME", config_home.path())
        .arg("repos")
        .arg("--output")
        .arg("json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("repos --output json should produce valid JSON");
    assert_eq!(json["repositories"][0]["name"], "org/repo1");
    assert_eq!(json["repositories"][0]["label"], "easyfix");
}

#[test]
fn test_repos_text_output() {
    let config_home = write_config(ONE_REPO_CONFIG);

    let mut cmd = cargo_bin_cmd!("easyfix");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .arg("repos")
        .assert()
        .success()
        .stdout(predicate::str::contains("org/repo1"))
        .stdout(predicate::str::contains("easyfix"));
}

#[test]
fn test_repos_without_config_file() {
    let config_home = tempfile::tempdir().expect("tempdir");

    let mut cmd = cargo_bin_cmd!("easyfix");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .arg("repos")
        .assert()
        .success()
        .stdout(predicate::str::contains("No repositories configured"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config_home = write_config(
        r#"
[[repositories]]
name = "not-a-repo"
label = "easyfix"
contact = "alice"
"#,
    );

    let mut cmd = cargo_bin_cmd!("easyfix");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .arg("repos")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not-a-repo"));
}

#[test]
fn test_auth_status_not_authenticated() {
    let config_home = tempfile::tempdir().expect("tempdir");

    let output = cargo_bin_cmd!("easyfix")
        .env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("EASYFIX_API_KEY")
        .env_remove("GITHUB_TOKEN")
        .arg("auth")
        .arg("status")
        .arg("--output")
        .arg("json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["authenticated"], false);
}

#[test]
fn test_collect_without_credentials() {
    let config_home = write_config(ONE_REPO_CONFIG);

    let mut cmd = cargo_bin_cmd!("easyfix");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("EASYFIX_API_KEY")
        .env_remove("GITHUB_TOKEN")
        .arg("collect")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Authentication required"));
}

#[test]
fn test_collect_unconfigured_repository() {
    let config_home = write_config(ONE_REPO_CONFIG);

    let mut cmd = cargo_bin_cmd!("easyfix");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("EASYFIX_API_KEY", "test-key")
        .arg("collect")
        .arg("org/ghost")
        .assert()
        .failure()
        .stderr(predicate::str::contains("org/ghost"))
        .stderr(predicate::str::contains("easyfix repos"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_collect_end_to_end_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/org/repo1/issues"))
        .and(query_param("labels", "easyfix"))
        .and(query_param("state", "open"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "number": 5,
            "title": "Fix typo",
            "created_at": "2021-01-01T00:00:00Z",
            "updated_at": "2021-01-02T00:00:00Z",
            "user": {"html_url": "https://github.com/bob", "login": "bob"},
            "html_url": "https://github.com/org/repo1/issues/5",
            "labels": [{"name": "easyfix"}]
        }])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/org/repo1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "html_url": "https://github.com/org/repo1",
            "description": "desc",
            "id": 42,
            "owner": {"html_url": "https://github.com/org", "login": "org"},
            "created_at": "2020-01-01T00:00:00Z"
        })))
        .mount(&server)
        .await;

    let config_home = write_config(ONE_REPO_CONFIG);

    let output = cargo_bin_cmd!("easyfix")
        .env("XDG_CONFIG_HOME", config_home.path())
        .env("EASYFIX_API_KEY", "test-key")
        .arg("--api-root")
        .arg(server.uri())
        .arg("--output")
        .arg("json")
        .arg("collect")
        .output()
        .unwrap();

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(output.status.success(), "stderr was: {stderr}");
    assert!(stderr.contains("[PASS] org/repo1 - Retrieved 1 tickets"));
    assert!(stderr.contains("1 passed, 0 failed, 1 total"));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON report");
    assert_eq!(json["passed"], 1);
    assert_eq!(json["failed"], 0);
    assert_eq!(json["total"], 1);
    assert_eq!(json["repositories"]["org/repo1"]["ticket_count"], 1);
    assert_eq!(
        json["repositories"]["org/repo1"]["ticket_list"]["5"]["title"],
        "Fix typo"
    );
    assert_eq!(
        json["repositories"]["org/repo1"]["contact"],
        "alice@fedoraproject.org"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_collect_quiet_suppresses_status_lines() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/org/repo1/issues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/org/repo1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "html_url": "https://github.com/org/repo1",
            "description": null,
            "id": 42,
            "owner": {"html_url": "https://github.com/org", "login": "org"},
            "created_at": "2020-01-01T00:00:00Z"
        })))
        .mount(&server)
        .await;

    let config_home = write_config(ONE_REPO_CONFIG);

    let output = cargo_bin_cmd!("easyfix")
        .env("XDG_CONFIG_HOME", config_home.path())
        .env("EASYFIX_API_KEY", "test-key")
        .arg("--api-root")
        .arg(server.uri())
        .arg("--output")
        .arg("json")
        .arg("--quiet")
        .arg("collect")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stderr.contains("[PASS]"));
    assert!(!stderr.contains("[FAIL]"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_collect_malformed_response_aborts() {
    let server = MockServer::start().await;
    // Listing payload is missing required issue fields.
    Mock::given(method("GET"))
        .and(path("/repos/org/repo1/issues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"title": "No number"}])))
        .mount(&server)
        .await;

    let config_home = write_config(ONE_REPO_CONFIG);

    let output = cargo_bin_cmd!("easyfix")
        .env("XDG_CONFIG_HOME", config_home.path())
        .env("EASYFIX_API_KEY", "test-key")
        .arg("--api-root")
        .arg(server.uri())
        .arg("collect")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Malformed API response"), "stderr: {stderr}");
    // Aborted runs never print the summary line.
    assert!(!stderr.contains("passed,"), "stderr: {stderr}");
}
