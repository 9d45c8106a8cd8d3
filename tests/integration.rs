use assert_cmd::Command;
use predicates::prelude::*;

fn ojcli() -> Command {
    assert_cmd::cargo::cargo_bin_cmd!("ojcli")
}

#[test]
fn no_arguments_shows_usage() {
    ojcli()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_lists_subcommands() {
    ojcli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("submit"))
        .stdout(predicate::str::contains("verdict"))
        .stdout(predicate::str::contains("rank"))
        .stdout(predicate::str::contains("progress"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn missing_config_exits_2() {
    let home = tempfile::tempdir().unwrap();
    ojcli()
        .arg("stats")
        .env("HOME", home.path())
        .current_dir(home.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No config file found"));
}

#[test]
fn explicit_missing_config_reports_the_path() {
    ojcli()
        .args(["--config", "/nonexistent/ojrc.toml", "rank"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn unparseable_config_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ojcli.toml");
    std::fs::write(&path, "this is not toml [").unwrap();

    ojcli()
        .arg("--config")
        .arg(&path)
        .arg("stats")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn config_without_user_section_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ojcli.toml");
    std::fs::write(&path, "[server]\nurl = \"x\"\n").unwrap();

    ojcli()
        .arg("--config")
        .arg(&path)
        .arg("stats")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn surround_conflicts_with_above() {
    ojcli().args(["rank", "-C", "2", "-a", "1"]).assert().code(2);
}

#[test]
fn verdict_limit_conflicts_with_all() {
    ojcli()
        .args(["verdict", "--limit", "5", "--all"])
        .assert()
        .code(2);
}

#[test]
fn submit_requires_a_file() {
    ojcli().arg("submit").assert().code(2);
}
