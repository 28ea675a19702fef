//! Periodic tick source driving the animation.
//!
//! The clock is a dedicated thread that sleeps on the engine's condition
//! variable between ticks. Every wake-up re-checks the run generation under
//! the state lock, so once a caller has bumped the generation no further
//! tick can draw, including one whose timeout already elapsed.

use std::sync::{Arc, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, trace, warn};

use super::Engine;

/// Handle to a running clock thread.
pub(crate) struct FrameClock {
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

impl FrameClock {
    /// Start ticking every `interval` for the engine's current generation.
    pub(crate) fn spawn(engine: Arc<Engine>, interval: Duration) -> std::io::Result<Self> {
        let generation = engine.lock().generation;
        let handle = thread::Builder::new()
            .name("linespin-clock".to_string())
            .spawn(move || run(engine, generation, interval))?;

        debug!(generation, interval_ms = interval.as_millis(), "clock:spawned");
        Ok(Self {
            generation,
            handle: Some(handle),
        })
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    /// Wait for the thread to exit.
    ///
    /// The generation must already have been bumped, otherwise this blocks
    /// for as long as the animation runs.
    pub(crate) fn join(mut self) {
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            warn!(generation = self.generation, "clock:thread panicked");
        }
        debug!(generation = self.generation, "clock:joined");
    }
}

fn run(engine: Arc<Engine>, generation: u64, interval: Duration) {
    let mut core = engine.lock();
    loop {
        let (guard, _) = engine
            .wake
            .wait_timeout_while(core, interval, |c| c.generation == generation)
            .unwrap_or_else(PoisonError::into_inner);
        core = guard;

        if core.generation != generation {
            trace!(generation, "clock:cancelled");
            break;
        }

        if let Err(e) = core.tick() {
            warn!(generation, error = %e, "clock:draw failed");
        }
    }
}
