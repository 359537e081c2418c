#![allow(dead_code)]

use anyhow::{Context, Result};
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A working repository on `main` with a bare `origin`, isolated from the
/// user's global git configuration
pub struct GitFixture {
    pub temp_dir: TempDir,
    pub work: PathBuf,
    pub remote: PathBuf,
}

impl GitFixture {
    /// Create the working repository and its bare remote
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let work = temp_dir.path().join("work");
        let remote = temp_dir.path().join("remote.git");
        fs::create_dir_all(&work)?;
        fs::create_dir_all(&remote)?;

        let fixture = Self {
            temp_dir,
            work,
            remote,
        };

        fixture.git_in(&fixture.remote, &["init", "--bare"])?;
        fixture.git(&["init"])?;
        fixture.git(&["symbolic-ref", "HEAD", "refs/heads/main"])?;
        fixture.git(&["config", "user.name", "Test User"])?;
        fixture.git(&["config", "user.email", "test@example.com"])?;
        fixture.git(&["config", "commit.gpgsign", "false"])?;
        let remote_url = fixture.remote.to_string_lossy().into_owned();
        fixture.git(&["remote", "add", "origin", &remote_url])?;

        Ok(fixture)
    }

    /// Run git in the working repository and return its stdout
    pub fn git(&self, args: &[&str]) -> Result<String> {
        self.git_in(&self.work, args)
    }

    /// Run git in `dir` and return its stdout
    pub fn git_in(&self, dir: &Path, args: &[&str]) -> Result<String> {
        let output = std::process::Command::new("git")
            .args(args)
            .current_dir(dir)
            .env("HOME", self.temp_dir.path())
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .output()
            .with_context(|| format!("Failed to run git {}", args.join(" ")))?;

        if !output.status.success() {
            return Err(anyhow::anyhow!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr)
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Write a file inside the working repository
    pub fn write_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.work.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Subject line of the newest commit on the remote's `main`, if any
    pub fn remote_head_subject(&self) -> Option<String> {
        self.git_in(&self.remote, &["log", "-1", "--format=%s", "main"])
            .ok()
            .map(|s| s.trim().to_string())
    }

    /// The autopush binary, configured to run inside the working repository
    pub fn autopush(&self) -> Result<Command> {
        autopush_in(self.temp_dir.path(), &self.work)
    }
}

/// The autopush binary running in `dir` with `home` as an isolated HOME
pub fn autopush_in(home: &Path, dir: &Path) -> Result<Command> {
    let mut cmd = Command::cargo_bin("autopush")?;
    cmd.current_dir(dir)
        .env("HOME", home)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_CEILING_DIRECTORIES", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    Ok(cmd)
}
