#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SITE: &str = r#"
bucket "site"
expected_bucket_owner "123456789012"
index_document {
    suffix "index.html"
}
routing_rule {
    condition { key_prefix_equals "docs/"; }
    redirect { replace_key_prefix_with "documents/"; }
}
"#;

const CONFLICTING: &str = r#"
bucket "site"
index_document { suffix "index.html"; }
redirect_all_requests_to { host_name "example.com"; }
"#;

fn weave() -> Command {
    Command::cargo_bin("weave").unwrap()
}

/// 設定ファイルの探索がテスト環境に影響されないようにする
fn isolated(dir: &TempDir) -> Command {
    let mut cmd = weave();
    cmd.current_dir(dir.path())
        .env_remove("WEAVE_CONFIG_PATH")
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path());
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// CLIヘルプが正しく表示されることを確認
#[test]
fn test_cli_help() {
    weave()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("expand"))
        .stdout(predicate::str::contains("flatten"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("waiters"));
}

#[test]
fn test_cli_version() {
    weave()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cloudweave"));
}

#[test]
fn test_invalid_command() {
    weave().arg("invalid-command").assert().failure();
}

#[test]
fn test_expand_prints_put_input() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(&dir, "site.kdl", SITE);

    weave()
        .arg("expand")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""Bucket": "site""#))
        .stdout(predicate::str::contains(r#""ExpectedBucketOwner": "123456789012""#))
        .stdout(predicate::str::contains(r#""Suffix": "index.html""#))
        .stdout(predicate::str::contains(r#""ReplaceKeyPrefixWith": "documents/""#))
        .stdout(predicate::str::contains("ErrorDocument").not());
}

#[test]
fn test_expand_rejects_conflicting_blocks() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(&dir, "site.kdl", CONFLICTING);

    weave()
        .arg("expand")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("redirect_all_requests_to"));
}

#[test]
fn test_expand_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    weave()
        .arg("expand")
        .arg(dir.path().join("missing.kdl"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.kdl"));
}

#[test]
fn test_validate() {
    let dir = tempfile::tempdir().unwrap();
    let good = write(&dir, "good.kdl", SITE);
    let bad = write(&dir, "bad.kdl", CONFLICTING);

    weave()
        .arg("validate")
        .arg(&good)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"));

    weave()
        .arg("validate")
        .arg(&bad)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("index_document"));
}

#[test]
fn test_flatten_renders_kdl() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(
        &dir,
        "output.json",
        r#"{
  "IndexDocument": {"Suffix": "index.html"},
  "RoutingRules": [
    {"Redirect": {"ReplaceKeyWith": "home.html"}}
  ]
}"#,
    );

    weave()
        .arg("flatten")
        .arg(&file)
        .args(["--bucket", "site"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bucket"))
        .stdout(predicate::str::contains("index_document"))
        .stdout(predicate::str::contains("index.html"))
        .stdout(predicate::str::contains("routing_rule"))
        .stdout(predicate::str::contains("home.html"))
        .stdout(predicate::str::contains("error_document").not());
}

#[test]
fn test_flatten_rejects_non_output_json() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(&dir, "output.json", "not json");

    weave().arg("flatten").arg(&file).assert().failure();
}

#[test]
fn test_id_format_and_parse() {
    weave()
        .args(["id", "format", "site", "123456789012"])
        .assert()
        .success()
        .stdout("site,123456789012\n");

    weave()
        .args(["id", "format", "site"])
        .assert()
        .success()
        .stdout("site\n");

    weave()
        .args(["id", "parse", "site,123456789012"])
        .assert()
        .success()
        .stdout(predicate::str::contains("site"))
        .stdout(predicate::str::contains("123456789012"));
}

#[test]
fn test_id_parse_malformed() {
    weave()
        .args(["id", "parse", "a,b,c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "expected BUCKET or BUCKET,EXPECTED_BUCKET_OWNER",
        ));
}

#[test]
fn test_waiters_uses_default_timeouts() {
    let dir = tempfile::tempdir().unwrap();

    isolated(&dir)
        .arg("waiters")
        .assert()
        .success()
        .stdout(predicate::str::contains("dev_endpoint_created"))
        .stdout(predicate::str::contains("PROVISIONING"))
        .stdout(predicate::str::contains("900s"));
}

#[test]
fn test_waiters_uses_configured_timeouts() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "weave.yaml", "glue:\n  trigger_create_secs: 42\n");

    isolated(&dir)
        .arg("waiters")
        .assert()
        .success()
        .stdout(predicate::str::contains("42s"));
}

#[test]
fn test_config_show() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(&dir, "custom.yaml", "retry:\n  max_attempts: 9\n");

    isolated(&dir)
        .env("WEAVE_CONFIG_PATH", &config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max_attempts: 9"))
        .stdout(predicate::str::contains("not_found_checks: 20"));
}

#[test]
fn test_config_show_defaults() {
    let dir = tempfile::tempdir().unwrap();

    isolated(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max_attempts: 5"));
}
