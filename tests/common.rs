#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A scratch directory the binary runs in, with no inherited environment.
pub struct TestWorkspace {
    _dir: TempDir,
    pub path: PathBuf,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().to_path_buf();
        Self { _dir: dir, path }
    }

    #[must_use]
    pub fn run_contributors(&self, env_vars: &[(&str, &str)]) -> Output {
        self.run_contributors_with_args(&[], env_vars)
    }

    #[must_use]
    pub fn run_contributors_with_args(&self, args: &[&str], env_vars: &[(&str, &str)]) -> Output {
        run_contributors_in(&self.path, args, env_vars)
    }

    #[must_use]
    pub fn file_exists(&self, relative_path: &str) -> bool {
        self.path.join(relative_path).exists()
    }

    #[must_use]
    pub fn read_file(&self, relative_path: &str) -> String {
        std::fs::read_to_string(self.path.join(relative_path)).expect("failed to read file")
    }

    #[must_use]
    pub fn read_json(&self, relative_path: &str) -> serde_json::Value {
        serde_json::from_str(&self.read_file(relative_path)).expect("invalid json report")
    }
}

#[must_use]
pub fn run_contributors_in(dir: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> Output {
    let bin = env!("CARGO_BIN_EXE_contributors");

    let mut cmd = Command::new(bin);
    cmd.args(args).current_dir(dir).env_clear();

    for (key, value) in env_vars {
        cmd.env(key, value);
    }

    cmd.output().expect("failed to run contributors")
}

#[must_use]
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[must_use]
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn assert_no_reports(dir: &Path) {
    assert!(!dir.join("contributors.md").exists(), "markdown report was written");
    assert!(!dir.join("contributors.json").exists(), "json report was written");
}
