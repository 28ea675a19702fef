//! Scripted walkthrough of the spinner lifecycle.

use anyhow::Result;
use std::thread;
use std::time::Duration;

use super::SpinnerArgs;
use linespin::spinner::Severity;

pub fn run(args: &SpinnerArgs, steps: u32, delay: Duration) -> Result<()> {
    let overrides = args.overrides()?;
    let spinner = args.spinner();
    let steps = steps.max(1);

    spinner.start("Resolving dependencies", Severity::Info, &overrides)?;
    thread::sleep(delay);

    for step in 1..=steps {
        let percent = step * 100 / steps;
        let mode = if step == steps / 2 + 1 && steps > 2 {
            Severity::Warning
        } else {
            Severity::Info
        };
        spinner.update(Some(&format!("Building ({}%)", percent)), mode)?;
        thread::sleep(delay);
    }

    // Leaves the text alone, only the mode changes
    spinner.update(None, Severity::Info)?;
    thread::sleep(delay);

    spinner.stop(Severity::Success, Some("Done"))?;

    // Restart directly into a second run; the first is finished implicitly
    spinner.start("Deploying to production", Severity::Info, &overrides)?;
    thread::sleep(delay);
    spinner.start("Verifying deployment", Severity::Info, &overrides)?;
    thread::sleep(delay);
    spinner.stop(Severity::Success, None)?;

    Ok(())
}
