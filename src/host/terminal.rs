//! Terminal host - attaches rendered output to the terminal screen.
//!
//! The terminal exposes a single anchor. Its selector is chosen by the
//! integrator at construction time, so the bootstrap can use whatever
//! naming convention its environment expects (`"#app"`, `"screen"`, ...).
//!
//! Attaching clears the screen and writes the content line by line from the
//! top-left corner, queued first and flushed once.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use tracing::debug;

use crate::error::AppError;

use super::{Anchor, Host};

/// Host backed by the terminal screen, with one named anchor.
pub struct TerminalHost {
    selector: String,
}

impl TerminalHost {
    /// Create a terminal host whose screen answers to `selector`.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
        }
    }

    /// The selector the screen anchor answers to.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    fn write_screen(&self, out: &mut impl Write, content: &str) -> io::Result<()> {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        for (row, line) in content.lines().enumerate() {
            queue!(out, MoveTo(0, row as u16), Print(line))?;
        }
        out.flush()
    }
}

impl Host for TerminalHost {
    fn resolve(&self, target: &str) -> Option<Anchor> {
        (target == self.selector).then(|| Anchor::new(&self.selector))
    }

    fn attach(&mut self, anchor: &Anchor, content: &str) -> Result<(), AppError> {
        debug!(anchor = anchor.selector(), "attaching to terminal");
        let mut stdout = io::stdout();
        self.write_screen(&mut stdout, content)?;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
