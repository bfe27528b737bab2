//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated workspace directories
//! - Placing deal collections and config files
//! - Executing CLI commands with proper context

use anyhow::Result;
use assert_cmd::Command;
use rattle_types::Deal;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::write_deals_file;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use rattle_testing::{TestWorld, sample_pipeline};
///
/// let world = TestWorld::new().with_deals(&sample_pipeline()).unwrap();
///
/// let result = world.run(&["deals", "list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    deals_path: Option<PathBuf>,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".rattle");

        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            deals_path: None,
            env_vars: HashMap::new(),
        }
    }

    /// Get the data directory path (.rattle).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the deals file passed via `--deals`, if any.
    pub fn deals_path(&self) -> Option<&Path> {
        self.deals_path.as_deref()
    }

    /// Write `deals` to `deals.json` and pass it to every command via `--deals`.
    pub fn with_deals(mut self, deals: &[Deal]) -> Result<Self> {
        let path = self.temp_dir.path().join("deals.json");
        write_deals_file(&path, deals)?;
        self.deals_path = Some(path);
        Ok(self)
    }

    /// Write a raw deals file (for malformed-input tests) and pass it via `--deals`.
    pub fn with_raw_deals(mut self, content: &str) -> Result<Self> {
        let path = self.temp_dir.path().join("deals.json");
        std::fs::write(&path, content)?;
        self.deals_path = Some(path);
        Ok(self)
    }

    /// Write `config.toml` into the data directory.
    pub fn with_config(self, toml: &str) -> Result<Self> {
        std::fs::write(self.data_dir.join("config.toml"), toml)?;
        Ok(self)
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// Adds `--data-dir`, `--deals` (when set) and the environment variables.
    /// `RUST_LOG` is cleared so log output never leaks into assertions.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());

        if let Some(path) = &self.deals_path {
            cmd.arg("--deals").arg(path);
        }

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()`, which locates the `rattle`
    /// binary built for the current test run.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("rattle")
            .map_err(|e| anyhow::anyhow!("Failed to find rattle binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Execute a command with `--format json` and parse stdout.
    pub fn run_json(&self, args: &[&str]) -> Result<(CliResult, serde_json::Value)> {
        let mut full_args = vec!["--format", "json"];
        full_args.extend_from_slice(args);
        let result = self.run(&full_args)?;
        let json = result.json()?;
        Ok((result, json))
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
