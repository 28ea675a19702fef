//! Single-line activity spinner.
//!
//! A [`Spinner`] draws `\r <glyph> <text>` in place on a console, cycling
//! through braille frames on a background clock until [`Spinner::stop`]
//! replaces the glyph with a terminal bullet and ends the line.
//!
//! ```text
//! Idle ──start──▶ Running ──stop──▶ Idle
//!                   │  ▲
//!                   └──┘ start: implicit stop, then a fresh run
//! ```

mod clock;
mod color;
mod config;
pub mod frames;
mod render;
mod severity;
mod state;

use clock::FrameClock;

pub use color::{ColorToken, Hue};
pub use config::{
    ColorOverrides, DEFAULT_FRAMES_PER_SECOND, RenderConfig, RenderOverrides,
    parse_color_override,
};
pub use render::{ELLIPSIS, FrameSpec, RenderedLine, fit_text, render_line};
pub use severity::Severity;
pub use state::AnimationState;

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use tracing::debug;

use crate::error::SpinnerError;
use crate::term::{Console, TermConsole};

/// State shared between the controller and its clock thread.
pub(crate) struct Engine {
    core: Mutex<Core>,
    wake: Condvar,
}

/// Everything a draw needs, guarded by one lock.
pub(crate) struct Core {
    state: AnimationState,
    config: RenderConfig,
    console: Box<dyn Console>,
    /// Visible width of the last in-place draw, zero after a newline
    last_width: usize,
    /// Bumped on every cancellation; a clock only draws for its own value
    generation: u64,
}

impl Engine {
    fn new(console: Box<dyn Console>) -> Self {
        Self {
            core: Mutex::new(Core {
                state: AnimationState::default(),
                config: RenderConfig::default(),
                console,
                last_width: 0,
                generation: 0,
            }),
            wake: Condvar::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Core> {
        self.core.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Core {
    /// Invalidate the running clock. No tick draws after this returns.
    fn cancel_clock(&mut self, wake: &Condvar) {
        self.generation += 1;
        wake.notify_all();
    }

    /// Clock tick: draw the current frame, then advance.
    fn tick(&mut self) -> Result<(), SpinnerError> {
        self.draw(false)?;
        self.state.advance();
        Ok(())
    }

    fn draw(&mut self, is_final: bool) -> Result<(), SpinnerError> {
        let color = self.config.color_for(self.state.mode)?;
        let rendered = render_line(&FrameSpec {
            glyph: frames::glyph(self.state.frame_index, is_final),
            color,
            text: &self.state.text,
            width: self.console.width(),
            previous_width: self.last_width,
            force_styling: self.console.force_styling(),
        });

        self.console.write_str(&rendered.line)?;
        if is_final {
            self.console.write_str("\n")?;
            self.last_width = 0;
        } else {
            self.last_width = rendered.visible_width;
        }
        self.console.flush()?;
        Ok(())
    }
}

/// Lifecycle controller for one animated status line.
///
/// All methods take `&self`; a `Spinner` can be shared between threads.
/// The clock slot doubles as the transition lock: `start`, `update` and
/// `stop` hold it for their whole duration, so a restart always completes
/// the previous run's final draw before the new run exists.
pub struct Spinner {
    engine: Arc<Engine>,
    clock: Mutex<Option<FrameClock>>,
}

impl Spinner {
    pub fn with_console(console: Box<dyn Console>) -> Self {
        Self {
            engine: Arc::new(Engine::new(console)),
            clock: Mutex::new(None),
        }
    }

    pub fn stdout() -> Self {
        Self::with_console(Box::new(TermConsole::stdout()))
    }

    pub fn stderr() -> Self {
        Self::with_console(Box::new(TermConsole::stderr()))
    }

    fn lock_clock(&self) -> MutexGuard<'_, Option<FrameClock>> {
        self.clock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Begin animating `text`.
    ///
    /// `overrides` are merged over the default render config and validated
    /// before anything else happens, so an invalid config leaves a running
    /// animation untouched. A running animation is stopped (info mode, its
    /// current text) before the new one starts. The first frame appears on
    /// the first tick.
    pub fn start(
        &self,
        text: &str,
        mode: Severity,
        overrides: &RenderOverrides,
    ) -> Result<(), SpinnerError> {
        self.begin_run(text, mode, overrides, true)
    }

    /// Start a run whose frames are drawn only by explicit `Core::tick` calls.
    #[cfg(test)]
    fn start_driven(
        &self,
        text: &str,
        mode: Severity,
        overrides: &RenderOverrides,
    ) -> Result<(), SpinnerError> {
        self.begin_run(text, mode, overrides, false)
    }

    fn begin_run(
        &self,
        text: &str,
        mode: Severity,
        overrides: &RenderOverrides,
        spawn_clock: bool,
    ) -> Result<(), SpinnerError> {
        let config = RenderConfig::with_overrides(overrides);
        config.validate()?;

        let mut clock = self.lock_clock();
        let previous = clock.take();
        if previous.is_some() || self.is_running() {
            debug!(
                generation = previous.as_ref().map(FrameClock::generation),
                "spinner:restart"
            );
            self.finish_run(previous, Severity::Info, None)?;
        }

        let interval = config.frame_interval();
        debug!(text, %mode, fps = config.frames_per_second, "spinner:start");
        {
            let mut core = self.engine.lock();
            core.config = config;
            core.state.begin(text, mode, interval);
        }

        if !spawn_clock {
            return Ok(());
        }
        match FrameClock::spawn(Arc::clone(&self.engine), interval) {
            Ok(started) => {
                *clock = Some(started);
                Ok(())
            }
            Err(e) => {
                self.engine.lock().state.finish();
                Err(e.into())
            }
        }
    }

    /// Change the message and mode.
    ///
    /// An empty or absent `text` keeps the current message. While running,
    /// the next tick shows the change; while idle, the line is redrawn once.
    pub fn update(&self, text: Option<&str>, mode: Severity) -> Result<(), SpinnerError> {
        let _transition = self.lock_clock();
        let mut core = self.engine.lock();
        core.state.apply_update(text, mode);
        if !core.state.running {
            core.draw(false)?;
        }
        Ok(())
    }

    /// Halt the animation and write the final line.
    ///
    /// Applies `text` and `mode` like [`Spinner::update`], draws the
    /// terminal glyph, ends the line with `\n` and waits for the clock
    /// thread. Returns once the final line has been flushed. Stopping an
    /// idle spinner still writes that final line.
    pub fn stop(&self, mode: Severity, text: Option<&str>) -> Result<(), SpinnerError> {
        let mut clock = self.lock_clock();
        let previous = clock.take();
        self.finish_run(previous, mode, text)
    }

    fn finish_run(
        &self,
        clock: Option<FrameClock>,
        mode: Severity,
        text: Option<&str>,
    ) -> Result<(), SpinnerError> {
        let result = {
            let mut core = self.engine.lock();
            core.cancel_clock(&self.engine.wake);
            core.state.apply_update(text, mode);
            let drawn = core.draw(true);
            core.state.finish();
            debug!(text = %core.state.text, %mode, "spinner:stop");
            drawn
        };

        if let Some(clock) = clock {
            clock.join();
        }
        result
    }

    pub fn is_running(&self) -> bool {
        self.engine.lock().state.running
    }

    /// Copy of the current animation state.
    pub fn snapshot(&self) -> AnimationState {
        self.engine.lock().state.clone()
    }

    /// Render config of the current (or last) run.
    pub fn config(&self) -> RenderConfig {
        self.engine.lock().config.clone()
    }
}

impl Drop for Spinner {
    /// Halts the clock without drawing; the line is left as last ticked.
    fn drop(&mut self) {
        if let Some(clock) = self.lock_clock().take() {
            {
                let mut core = self.engine.lock();
                core.cancel_clock(&self.engine.wake);
                core.state.finish();
            }
            clock.join();
        }
    }
}
