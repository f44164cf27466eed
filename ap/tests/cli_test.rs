//! Integration tests for the ap CLI

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo_bin;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Helper: run `ap` inside an empty directory with no user config
fn ap(dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin!("ap"));
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_cli_help_flag() {
    let dir = TempDir::new().unwrap();
    ap(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("render"));
}

#[test]
fn test_list_shows_every_prompt() {
    let dir = TempDir::new().unwrap();
    ap(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("review-code"))
        .stdout(predicate::str::contains("code-review.af"))
        .stdout(predicate::str::contains("TicketId?: string"))
        .stdout(predicate::str::contains("generate-tests"));
}

#[test]
fn test_show_prints_outline() {
    let dir = TempDir::new().unwrap();
    ap(&dir)
        .args(["show", "review-code"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pr: PullRequest"))
        .stdout(predicate::str::contains("{{#if Pr.LinesChanged gte 500}}"));
}

#[test]
fn test_render_from_params_file() {
    let dir = TempDir::new().unwrap();
    let params = dir.path().join("qa.yml");
    fs::write(&params, "topic: Go generics\nquestion: How do I write a generic map?\n").unwrap();

    ap(&dir)
        .args(["render", "answer-question", "--params"])
        .arg(&params)
        .assert()
        .success()
        .stdout(predicate::str::contains("You are an expert on Go generics."))
        .stdout(predicate::str::contains("Context:").not());
}

#[test]
fn test_render_prompt_without_params() {
    let dir = TempDir::new().unwrap();
    ap(&dir)
        .args(["render", "system-prompt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("programming assistant"));
}

#[test]
fn test_render_unknown_prompt_fails() {
    let dir = TempDir::new().unwrap();
    ap(&dir)
        .args(["render", "write-poem"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown prompt: write-poem"));
}

#[test]
fn test_render_missing_required_field_fails() {
    let dir = TempDir::new().unwrap();
    let params = dir.path().join("commit.yml");
    fs::write(&params, "ticket_id: PROJ-1\n").unwrap();

    ap(&dir)
        .args(["render", "generate-commit-message", "--params"])
        .arg(&params)
        .assert()
        .failure()
        .stderr(predicate::str::contains("diff"));
}

#[test]
fn test_demo_prints_banners() {
    let dir = TempDir::new().unwrap();
    ap(&dir)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "=== AgentFlow Example ===\nDemonstrating generated prompts from 5 .af template files\n\n",
        ))
        .stdout(predicate::str::contains(&"-".repeat(60)))
        .stdout(predicate::str::contains(">>> [code-review.af] Code Review (nested structs)"))
        .stdout(predicate::str::contains("touches 600 lines"));
}

#[test]
fn test_demo_uses_banner_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.yml");
    fs::write(&config, "banner:\n  width: 12\n  fill: '='\ncolor: false\n").unwrap();

    ap(&dir)
        .arg("--config")
        .arg(&config)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("============\n>>> [assistant.af]"));
}
