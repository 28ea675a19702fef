//! Console collaborators the spinner draws to.
//!
//! The engine only needs two things from a console: its current width,
//! queried fresh on every draw, and a byte sink for the rendered line.

use console::Term;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Width reported when the terminal size cannot be determined
const FALLBACK_WIDTH: usize = 80;

/// A text console that the spinner renders into.
pub trait Console: Send {
    /// Current column count. Must not be cached across calls.
    fn width(&self) -> usize;

    /// Whether color sequences should be emitted unconditionally.
    fn force_styling(&self) -> bool {
        false
    }

    fn write_str(&mut self, s: &str) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;
}

/// A real terminal stream, backed by `console::Term`.
pub struct TermConsole {
    term: Term,
}

impl TermConsole {
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    pub fn stderr() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl Console for TermConsole {
    fn width(&self) -> usize {
        self.term
            .size_checked()
            .map(|(_, cols)| cols as usize)
            .unwrap_or(FALLBACK_WIDTH)
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.term.write_str(s)
    }

    fn flush(&mut self) -> io::Result<()> {
        Write::flush(&mut self.term)
    }
}

/// In-memory console with an adjustable width.
///
/// Clones share the same buffer and width, so a test can hand one clone to
/// the spinner and inspect output through another.
#[derive(Clone)]
pub struct BufferConsole {
    inner: Arc<Mutex<BufferInner>>,
}

struct BufferInner {
    width: usize,
    output: String,
    flushes: usize,
}

impl BufferConsole {
    pub fn new(width: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(BufferInner {
                width,
                output: String::new(),
                flushes: 0,
            })),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BufferInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Change the reported width, as a terminal resize would.
    pub fn set_width(&self, width: usize) {
        self.lock().width = width;
    }

    /// Everything written so far, escape sequences included.
    pub fn output(&self) -> String {
        self.lock().output.clone()
    }

    /// Output with color sequences removed.
    pub fn plain_output(&self) -> String {
        console::strip_ansi_codes(&self.lock().output).into_owned()
    }

    /// Each carriage-return-delimited draw, colors stripped.
    pub fn frames(&self) -> Vec<String> {
        self.plain_output()
            .split('\r')
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn flush_count(&self) -> usize {
        self.lock().flushes
    }

    pub fn clear(&self) {
        self.lock().output.clear();
    }
}

impl Console for BufferConsole {
    fn width(&self) -> usize {
        self.lock().width
    }

    fn force_styling(&self) -> bool {
        true
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.lock().output.push_str(s);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock().flushes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_clones_share_output() {
        let console = BufferConsole::new(40);
        let mut writer = console.clone();

        writer.write_str("\r a").unwrap();
        writer.write_str("\r b\n").unwrap();
        writer.flush().unwrap();

        assert_eq!(console.output(), "\r a\r b\n");
        assert_eq!(console.frames(), vec![" a".to_string(), " b\n".to_string()]);
        assert_eq!(console.flush_count(), 1);
    }

    #[test]
    fn test_buffer_width_is_live() {
        let console = BufferConsole::new(40);
        let reader = console.clone();
        console.set_width(12);
        assert_eq!(reader.width(), 12);
    }
}
