use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

const USER: &str = r#"
use std::time as t;

pub struct User {
    #[accessor(getter)]
    name: String,
    #[accessor(getter, setter)]
    age: u32,
    #[accessor(getter = "session_timeout")]
    timeout: t::Duration,
}
"#;

fn module() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    fs::write(dir.path().join("user.rs"), USER).expect("write fixture");
    dir
}

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("accessory").unwrap();
    cmd.arg("--no-color").env_remove("ACCESSORY_RECEIVER").env_remove("RUST_LOG");
    cmd
}

#[test]
fn generates_accessor_file() {
    let dir = module();

    cmd()
        .args(["--type", "User"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("Generated").and(contains("(4 accessors)")));

    let source = fs::read_to_string(dir.path().join("user_accessor.rs")).unwrap();
    assert!(source.contains("use std::time as t;"));
    assert!(source.contains("pub fn session_timeout(&self) -> &t::Duration"));
    assert!(source.contains("pub fn set_age(&mut self, val: u32)"));
}

#[test]
fn debug_log_shows_resolved_options() {
    let dir = module();

    cmd()
        .args(["--type", "User", "--receiver", "me"])
        .arg(dir.path())
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stderr(contains("generating accessors for `User`").and(contains("receiver: Some(\"me\")")));
}

#[test]
fn second_run_reports_up_to_date() {
    let dir = module();
    cmd().args(["-t", "User"]).arg(dir.path()).assert().success();

    cmd()
        .args(["-t", "User"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("is up to date"));
}

#[test]
fn check_detects_drift() {
    let dir = module();

    cmd()
        .args(["--type", "User", "--check"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(contains("out of date"));

    cmd().args(["--type", "User"]).arg(dir.path()).assert().success();

    cmd()
        .args(["--type", "User", "--check"])
        .arg(dir.path())
        .assert()
        .success();

    fs::write(
        dir.path().join("user.rs"),
        USER.replace("#[accessor(getter)]\n    name", "#[accessor(getter, setter)]\n    name"),
    )
    .unwrap();

    cmd()
        .args(["--type", "User", "--check"])
        .arg(dir.path())
        .assert()
        .failure();
}

#[test]
fn dry_run_prints_without_writing() {
    let dir = module();

    cmd()
        .args(["--type", "User", "--dry-run"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("//! Code generated by accessory; DO NOT EDIT.").and(contains("impl User")));

    assert!(!dir.path().join("user_accessor.rs").exists());
}

#[test]
fn overrides_receiver_and_output() {
    let dir = module();

    cmd()
        .args(["--type", "User", "--receiver", "self", "--output", "user_methods.rs"])
        .arg(dir.path())
        .assert()
        .success();

    let source = fs::read_to_string(dir.path().join("user_methods.rs")).unwrap();
    assert!(source.contains("&self.name"));
    assert!(!dir.path().join("user_accessor.rs").exists());
}

#[test]
fn receiver_from_environment() {
    let dir = module();

    cmd()
        .env("ACCESSORY_RECEIVER", "user")
        .args(["--type", "User", "--dry-run"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("let user = self;"));
}

#[test]
fn type_is_required() {
    let dir = module();
    cmd().arg(dir.path()).assert().failure().stderr(contains("--type"));
}

#[test]
fn rejects_non_directory() {
    let dir = module();

    cmd()
        .args(["--type", "User"])
        .arg(dir.path().join("user.rs"))
        .assert()
        .failure()
        .stderr(contains("is not a directory"));
}

#[test]
fn unknown_type_fails_without_output() {
    let dir = module();

    cmd()
        .args(["--type", "Account"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(contains("no struct named `Account`"));

    assert!(!dir.path().join("account_accessor.rs").exists());
}

#[test]
fn malformed_tag_is_reported_with_location() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("user.rs"),
        "pub struct User {\n    #[accessor(getter, mutator)]\n    name: String,\n}\n",
    )
    .unwrap();

    cmd()
        .args(["--type", "User"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(contains("user.rs:2:").and(contains("unknown accessor option `mutator`")));
}
