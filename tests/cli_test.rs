mod common;

use anyhow::Result;
use assert_cmd::Command;
use common::GitFixture;
use predicates::prelude::*;

#[test]
fn test_version_flag() -> Result<()> {
    Command::cargo_bin("autopush")?
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(autopush::VERSION));

    Ok(())
}

#[test]
fn test_help_describes_sequence() -> Result<()> {
    Command::cargo_bin("autopush")?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("git push origin main"));

    Ok(())
}

#[test]
fn test_branch_argument_is_rejected() -> Result<()> {
    Command::cargo_bin("autopush")?
        .arg("develop")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unexpected argument"));

    Ok(())
}

#[test]
fn test_missing_git_exits_with_error() -> Result<()> {
    let fixture = GitFixture::new()?;

    fixture
        .autopush()?
        .env("PATH", "")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Could not find 'git' in PATH"));

    Ok(())
}

#[test]
fn test_verbose_logs_go_to_stderr() -> Result<()> {
    let fixture = GitFixture::new()?;
    fixture.write_file("readme.md", "# hello\n")?;

    fixture
        .autopush()?
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("Running git step"))
        .stdout(predicate::str::contains("Running git step").not());

    Ok(())
}
