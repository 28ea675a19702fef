pub mod demo;
pub mod run;

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

use linespin::spinner::{RenderOverrides, Spinner, parse_color_override};

/// Rendering options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct SpinnerArgs {
    /// Animation frame rate
    #[arg(long, global = true)]
    pub fps: Option<u32>,

    /// Glyph color for a severity, e.g. `success=cyanBright` (repeatable)
    #[arg(long = "color", value_name = "SEVERITY=COLOR", global = true)]
    pub colors: Vec<String>,

    /// YAML or JSON file with render overrides
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Draw on stderr instead of stdout
    #[arg(long, global = true)]
    pub stderr: bool,
}

impl SpinnerArgs {
    /// Overrides from the config file, then command-line flags on top.
    pub fn overrides(&self) -> Result<RenderOverrides> {
        let mut overrides = match &self.config {
            Some(path) => RenderOverrides::from_file(path)?,
            None => RenderOverrides::default(),
        };

        let mut cli = RenderOverrides::default();
        if let Some(fps) = self.fps {
            cli = cli.frames_per_second(fps);
        }
        for raw in &self.colors {
            let (severity, token) = parse_color_override(raw)?;
            cli = cli.color(severity, token);
        }
        overrides = overrides.merge(&cli);

        debug!(?overrides, "render overrides resolved");
        Ok(overrides)
    }

    pub fn spinner(&self) -> Spinner {
        if self.stderr {
            Spinner::stderr()
        } else {
            Spinner::stdout()
        }
    }
}
