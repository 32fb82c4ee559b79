//! Integration tests for CLI commands.
//!
//! Tests that verify command functionality end-to-end, driving the chat
//! session by piping scripted input through stdin.

#![allow(deprecated)] // Command::cargo_bin is deprecated but replacement requires newer assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Builds a chatterbox command running in a fresh temp dir so no stray
/// project config leaks into the test.
fn chatterbox_in(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("chatterbox").unwrap();
    cmd.current_dir(temp.path());
    cmd
}

// ============================================================================
// Chat Session
// ============================================================================

#[test]
fn chat_runs_the_classic_dialogue() {
    let temp = TempDir::new().unwrap();

    chatterbox_in(&temp)
        .args(["--no-color", "chat", "--plain"])
        .write_stdin("Max\n1\n2\n1\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "\
Hello! My name is Aid.
I was created in 2022.
Please, remind me your name.
What a great name you have, Max!
Let me guess your age.
Enter remainders of dividing your age by 3, 5 and 7.
Your age is 22; that's a good time to start programming!
Now I will prove to you that I can count to any number you want.
0 !
1 !
2 !
3 !
4 !
5 !
Completed, have a nice day!
",
        ));
}

#[test]
fn chat_counts_once_for_zero_bound() {
    let temp = TempDir::new().unwrap();

    chatterbox_in(&temp)
        .args(["--no-color", "chat", "--plain"])
        .write_stdin("Ada\n0\n0\n0\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "0 !\nCompleted, have a nice day!\n",
        ))
        .stdout(predicate::str::contains("1 !").not());
}

#[test]
fn chat_rejects_non_numeric_remainder() {
    let temp = TempDir::new().unwrap();

    chatterbox_in(&temp)
        .args(["--no-color", "chat", "--plain"])
        .write_stdin("Max\nten\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid input format"));
}

#[test]
fn chat_rejects_out_of_range_remainder() {
    let temp = TempDir::new().unwrap();

    chatterbox_in(&temp)
        .args(["--no-color", "chat", "--plain"])
        .write_stdin("Max\n1\n5\n1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be between 0 and 4"));
}

#[test]
fn chat_rejects_negative_count_bound() {
    let temp = TempDir::new().unwrap();

    chatterbox_in(&temp)
        .args(["--no-color", "chat", "--plain"])
        .write_stdin("Max\n1\n2\n1\n-4\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn chat_reports_truncated_input() {
    let temp = TempDir::new().unwrap();

    chatterbox_in(&temp)
        .args(["--no-color", "chat", "--plain"])
        .write_stdin("Max\n1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ended before"));
}

#[test]
fn chat_logs_the_session_summary_by_default() {
    let temp = TempDir::new().unwrap();

    // Logging defaults to INFO and goes to stderr, leaving stdout for the
    // dialogue itself.
    chatterbox_in(&temp)
        .args(["--no-color", "chat", "--plain"])
        .env_remove("RUST_LOG")
        .write_stdin("Max\n1\n2\n1\n5\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("chat finished"));
}

#[test]
fn chat_uses_the_configured_bot_identity() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("chatterbox.toml"),
        "[bot]\nname = \"Kitty\"\nbirth_year = 2020\n",
    )
    .unwrap();

    chatterbox_in(&temp)
        .args(["--no-color", "chat", "--plain"])
        .write_stdin("Max\n1\n2\n1\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello! My name is Kitty."))
        .stdout(predicate::str::contains("I was created in 2020."));
}

#[test]
fn chat_honors_the_configured_count_cap() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("chatterbox.toml"),
        "[counting]\nmax_bound = 10\n",
    )
    .unwrap();

    chatterbox_in(&temp)
        .args(["--no-color", "chat", "--plain"])
        .write_stdin("Max\n1\n2\n1\n50\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the maximum"));
}

// ============================================================================
// Count Command
// ============================================================================

#[test]
fn count_prints_the_sequence_and_closing_line() {
    let temp = TempDir::new().unwrap();

    chatterbox_in(&temp)
        .args(["--no-color", "count", "5"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "0 !\n1 !\n2 !\n3 !\n4 !\n5 !\nCompleted, have a nice day!\n",
        ));
}

#[test]
fn count_zero_prints_exactly_one_value() {
    let temp = TempDir::new().unwrap();

    chatterbox_in(&temp)
        .args(["--no-color", "count", "0"])
        .assert()
        .success()
        .stdout(predicate::str::diff("0 !\nCompleted, have a nice day!\n"));
}

#[test]
fn count_refuses_bounds_above_the_configured_cap() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("chatterbox.toml"),
        "[counting]\nmax_bound = 10\n",
    )
    .unwrap();

    chatterbox_in(&temp)
        .args(["--no-color", "count", "11"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the maximum"));
}

// ============================================================================
// Guess Command
// ============================================================================

#[test]
fn guess_estimates_the_classic_example() {
    let temp = TempDir::new().unwrap();

    chatterbox_in(&temp)
        .args(["--no-color", "guess", "1", "2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Estimated age: 22"));
}

#[test]
fn guess_all_zero_remainders_gives_zero() {
    let temp = TempDir::new().unwrap();

    chatterbox_in(&temp)
        .args(["--no-color", "guess", "0", "0", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Estimated age: 0"));
}

#[test]
fn guess_rejects_out_of_range_remainders() {
    let temp = TempDir::new().unwrap();

    chatterbox_in(&temp)
        .args(["--no-color", "guess", "3", "0", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be between 0 and 2"));
}

// ============================================================================
// Config Command
// ============================================================================

#[test]
fn config_show_prints_defaults() {
    let temp = TempDir::new().unwrap();

    chatterbox_in(&temp)
        .args(["--no-color", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Aid"))
        .stdout(predicate::str::contains("2022"));
}

#[test]
fn config_show_supports_toml_format() {
    let temp = TempDir::new().unwrap();

    chatterbox_in(&temp)
        .args(["--no-color", "config", "show", "--format", "toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[bot]"))
        .stdout(predicate::str::contains("[counting]"));
}

#[test]
fn config_show_reflects_project_overrides() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("chatterbox.toml"),
        "[bot]\nname = \"Kitty\"\n",
    )
    .unwrap();

    chatterbox_in(&temp)
        .args(["--no-color", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kitty"));
}

#[test]
fn config_show_rejects_unknown_format() {
    let temp = TempDir::new().unwrap();

    chatterbox_in(&temp)
        .args(["--no-color", "config", "show", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}
