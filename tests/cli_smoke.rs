use assert_cmd::Command;
use predicates::str::{contains, is_empty};

#[test]
fn tl_help_works() {
    Command::cargo_bin("tl")
        .expect("binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("in-memory task tracker"));
}

#[test]
fn add_find_remove_roundtrip() {
    Command::cargo_bin("tl")
        .expect("binary")
        .write_stdin("add 2 Buy milk\nfind buy milk\nremove Buy milk\nquit\n")
        .assert()
        .success()
        .stdout(contains("Task added: Buy milk"))
        .stdout(contains("Task found at position 1: Buy milk"))
        .stdout(contains("Task removed: Buy milk"));
}

#[test]
fn removal_requires_exact_casing() {
    Command::cargo_bin("tl")
        .expect("binary")
        .write_stdin("add 2 Buy milk\nremove buy milk\nquit\n")
        .assert()
        .success()
        .stdout(contains("Task 'buy milk' not found"));
}

#[test]
fn seeded_stats_in_json() {
    Command::cargo_bin("tl")
        .expect("binary")
        .args(["--seed", "--json"])
        .write_stdin("stats\nquit\n")
        .assert()
        .success()
        .stdout(contains("\"command\":\"stats\""))
        .stdout(contains("\"total\":5"))
        .stdout(contains("\"schema_version\":\"tl.v1\""));
}

#[test]
fn unknown_commands_keep_the_session_alive() {
    Command::cargo_bin("tl")
        .expect("binary")
        .write_stdin("bogus\nadd 1 Call mom\nquit\n")
        .assert()
        .success()
        .stderr(contains("Unknown command: bogus"))
        .stderr(contains("hint: type 'help'"))
        .stdout(contains("Task added: Call mom"));
}

#[test]
fn invalid_priority_is_a_user_error_report() {
    Command::cargo_bin("tl")
        .expect("binary")
        .write_stdin("add high Buy milk\nquit\n")
        .assert()
        .success()
        .stderr(contains("Invalid priority: high"));
}

#[test]
fn blank_description_reports_validation_error() {
    Command::cargo_bin("tl")
        .expect("binary")
        .write_stdin("add 2\nquit\n")
        .assert()
        .success()
        .stderr(contains("description cannot be empty"));
}

#[test]
fn quiet_mode_suppresses_success_output() {
    Command::cargo_bin("tl")
        .expect("binary")
        .arg("--quiet")
        .write_stdin("add 1 X\nlist\nquit\n")
        .assert()
        .success()
        .stdout(is_empty());
}

#[test]
fn priority_filter_lists_matches_and_placeholder() {
    Command::cargo_bin("tl")
        .expect("binary")
        .write_stdin("append 1 Call the doctor\nappend 3 Read a book\npriority 1\nquit\n")
        .assert()
        .success()
        .stdout(contains("[high] Call the doctor"))
        .stdout(contains("Task added: Filtered by priority 1"));
}

#[test]
fn events_stream_to_a_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("events.jsonl");

    Command::cargo_bin("tl")
        .expect("binary")
        .arg("--events")
        .arg(&path)
        .write_stdin("add 1 Call mom\nquit\n")
        .assert()
        .success();

    let contents = std::fs::read_to_string(&path).expect("events file");
    assert!(contents.contains("\"task_added\""));
    assert!(contents.contains("\"view_refreshed\""));
    assert!(contents.contains("Call mom"));
}
