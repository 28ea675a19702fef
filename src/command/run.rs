//! Spin while a child command runs.

use anyhow::{Result, anyhow};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, warn};

use super::SpinnerArgs;
use crate::cmd::Cmd;
use linespin::spinner::Severity;

/// Run `command`, returning the exit code to propagate.
///
/// The child's stdout/stderr are captured and replayed after the spinner
/// line is finished, so nothing interleaves with the animation.
pub fn run(
    args: &SpinnerArgs,
    message: Option<&str>,
    workdir: Option<&Path>,
    command: &[String],
) -> Result<i32> {
    let (program, rest) = command
        .split_first()
        .ok_or_else(|| anyhow!("No command given"))?;
    let rest: Vec<&str> = rest.iter().map(String::as_str).collect();

    let mut cmd = Cmd::new(program).args(&rest);
    if let Some(dir) = workdir {
        cmd = cmd.workdir(dir);
    }
    let label = message
        .map(str::to_string)
        .unwrap_or_else(|| cmd.describe());

    let overrides = args.overrides()?;
    let spinner = args.spinner();
    spinner.start(&label, Severity::Info, &overrides)?;

    let output = match cmd.run_captured() {
        Ok(output) => output,
        Err(e) => {
            spinner.stop(Severity::Error, Some(&format!("{} (failed to start)", label)))?;
            return Err(e);
        }
    };

    let code = output.status.code().unwrap_or(1);
    if output.status.success() {
        spinner.stop(Severity::Success, None)?;
    } else {
        warn!(command = %label, code, "command failed");
        spinner.stop(Severity::Error, Some(&format!("{} (exit {})", label, code)))?;
    }
    debug!(command = %label, code, "command finished");

    io::stdout().write_all(&output.stdout)?;
    io::stderr().write_all(&output.stderr)?;

    Ok(code)
}
