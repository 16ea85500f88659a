//! Isolated environment for running the pakstage binary.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::TempDir;

/// Result of running a pakstage CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as NDJSON, skipping blank lines
    pub fn events(&self) -> Vec<Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("not JSON ({e}): {l}\nstdout:\n{}", self.stdout))
            })
            .collect()
    }

    /// Events with the given `event` field
    pub fn events_named(&self, name: &str) -> Vec<Value> {
        self.events()
            .into_iter()
            .filter(|e| e["event"] == name)
            .collect()
    }
}

/// Temp working directory plus a temp HOME/XDG config root.
pub struct TestEnv {
    pub work_dir: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: tempfile::tempdir().expect("work dir"),
            home_dir: tempfile::tempdir().expect("home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_pakstage")),
        }
    }

    /// Path relative to the working directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }

    /// Write a file in the working directory and return its path
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&path, content).expect("write file");
        path
    }

    /// Write the per-user config where `dirs::config_dir` looks for it
    /// (XDG on Linux, Application Support on macOS).
    pub fn write_user_config(&self, content: &str) {
        for base in [
            self.home_dir.path().join(".config"),
            self.home_dir.path().join("Library/Application Support"),
        ] {
            let dir = base.join("pakstage");
            std::fs::create_dir_all(&dir).expect("create config dir");
            std::fs::write(dir.join("config.toml"), content).expect("write config");
        }
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_full(args, &[], None)
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_full(args, env_vars, None)
    }

    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> TestResult {
        self.run_full(args, &[], Some(stdin))
    }

    fn run_full(&self, args: &[&str], env_vars: &[(&str, &str)], stdin: Option<&str>) -> TestResult {
        let mut cmd = self.command(self.work_dir.path());
        cmd.args(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = match stdin {
            None => cmd.output().expect("Failed to execute pakstage"),
            Some(input) => {
                cmd.stdin(Stdio::piped())
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped());
                let mut child = cmd.spawn().expect("Failed to spawn pakstage");
                child
                    .stdin
                    .take()
                    .expect("stdin")
                    .write_all(input.as_bytes())
                    .expect("write stdin");
                child.wait_with_output().expect("Failed to wait for pakstage")
            }
        };

        output_to_result(output)
    }

    fn command(&self, cwd: &Path) -> Command {
        let home = self.home_dir.path();
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .env("HOME", home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("NO_COLOR", "1")
            .env("LANG", "C.UTF-8")
            .env("TERM", "xterm")
            .env_remove("PAKSTAGE_VERBOSITY")
            .env_remove("PAKSTAGE_COLOR")
            .env_remove("PAKSTAGE_SCHEDULE_FORMAT")
            .env_remove("GITHUB_ACTIONS");
        cmd
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
