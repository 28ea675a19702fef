use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// A builder for executing child commands whose output must not reach the
/// terminal while a spinner owns it
pub struct Cmd<'a> {
    command: &'a str,
    args: Vec<&'a str>,
    workdir: Option<&'a Path>,
}

impl<'a> Cmd<'a> {
    /// Create a new command builder
    pub fn new(command: &'a str) -> Self {
        Self {
            command,
            args: Vec::new(),
            workdir: None,
        }
    }

    /// Add multiple arguments
    pub fn args(mut self, args: &[&'a str]) -> Self {
        self.args.extend_from_slice(args);
        self
    }

    /// Set the working directory for the command
    pub fn workdir(mut self, path: &'a Path) -> Self {
        self.workdir = Some(path);
        self
    }

    /// The command line as typed, for display
    pub fn describe(&self) -> String {
        std::iter::once(self.command)
            .chain(self.args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Execute the command with captured stdout/stderr and closed stdin.
    /// A non-zero exit is not an error here; inspect `Output::status`.
    pub fn run_captured(self) -> Result<Output> {
        let mut cmd = Command::new(self.command);
        if let Some(dir) = self.workdir {
            cmd.current_dir(dir);
        }
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("Failed to execute command: {}", self.describe()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_joins_args() {
        let cmd = Cmd::new("cargo").args(&["build", "--release"]);
        assert_eq!(cmd.describe(), "cargo build --release");
    }

    #[cfg(unix)]
    #[test]
    fn test_run_captured_reports_status_and_output() {
        let output = Cmd::new("sh")
            .args(&["-c", "echo hello; exit 3"])
            .run_captured()
            .unwrap();
        assert_eq!(output.status.code(), Some(3));
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn test_run_captured_in_workdir() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = Cmd::new("pwd")
            .workdir(dir.path())
            .run_captured()
            .unwrap();
        let printed = String::from_utf8_lossy(&output.stdout).trim().to_string();
        assert!(printed.ends_with(dir.path().file_name().unwrap().to_str().unwrap()));
    }

    #[test]
    fn test_missing_program_is_error() {
        let result = Cmd::new("linespin-definitely-not-a-program").run_captured();
        assert!(result.is_err());
    }
}
