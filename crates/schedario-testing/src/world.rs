//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Isolated environment: a temp data directory and an output directory.
///
/// # Example
/// ```no_run
/// use schedario_testing::TestWorld;
///
/// let world = TestWorld::new().with_sample_data();
/// let result = world.run(&["list", "--dataset", "mosi"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    output_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("data");
        let output_dir = temp_dir.path().join("out");

        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");
        std::fs::create_dir_all(&output_dir).expect("Failed to create output dir");

        Self {
            temp_dir,
            data_dir,
            output_dir,
            env_vars: HashMap::new(),
        }
    }

    /// Populate the data directory with every sample input.
    pub fn with_sample_data(self) -> Self {
        fixtures::write_all(&self.data_dir).expect("Failed to write sample data");
        self
    }

    /// Write (or overwrite) one file in the data directory.
    pub fn with_file(self, name: &str, content: &str) -> Self {
        std::fs::write(self.data_dir.join(name), content).expect("Failed to write data file");
        self
    }

    /// Remove one input from the data directory.
    pub fn without_file(self, name: &str) -> Self {
        let _ = std::fs::remove_file(self.data_dir.join(name));
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Configure a CLI command with this environment's data directory.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("SCHEDARIO_PATH");
        cmd.env("NO_COLOR", "1");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    #[allow(deprecated)]
    fn command(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("schedario")
            .map_err(|e| anyhow::anyhow!("Failed to find schedario binary: {}", e))?;
        self.configure_command(&mut cmd);
        Ok(cmd)
    }

    /// Run the CLI with plain output.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = self.command()?;
        cmd.args(args);
        Ok(CliResult::from(cmd.output()?))
    }

    /// Run the CLI with `--format json`.
    pub fn run_json(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = self.command()?;
        cmd.arg("--format").arg("json").args(args);
        Ok(CliResult::from(cmd.output()?))
    }

    /// Run the CLI feeding `input` on stdin.
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Result<CliResult> {
        let mut cmd = self.command()?;
        cmd.args(args).write_stdin(input);
        Ok(CliResult::from(cmd.output()?))
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for CliResult {
    fn from(output: std::process::Output) -> Self {
        Self {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
