//! Terminal activity spinner.
//!
//! Renders one in-place status line (`⠋ Building`) that animates on a
//! background clock, accepts live text and severity updates, and finishes
//! with a colored bullet and a newline.
//!
//! ```no_run
//! use linespin::{RenderOverrides, Severity, Spinner};
//!
//! # fn main() -> Result<(), linespin::SpinnerError> {
//! let spinner = Spinner::stdout();
//! spinner.start("Building", Severity::Info, &RenderOverrides::default())?;
//! spinner.update(Some("Building (50%)"), Severity::Info)?;
//! spinner.stop(Severity::Success, Some("Done"))?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod spinner;
pub mod term;

pub use error::{ConfigError, SpinnerError};
pub use spinner::{
    AnimationState, ColorOverrides, ColorToken, Hue, RenderConfig, RenderOverrides, Severity, Spinner,
};
pub use term::{BufferConsole, Console, TermConsole};
