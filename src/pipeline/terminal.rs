//! Terminal setup and restore.
//!
//! [`TerminalGuard`] puts the terminal in raw mode on the alternate screen
//! and undoes both when dropped, including on early returns and panics that
//! unwind through `run`.

use std::io::{self, Write};

use crossterm::terminal;

use crate::renderer::ansi;

pub const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Current terminal size, or 80x24 when it can't be queried.
pub fn terminal_size() -> (u16, u16) {
    terminal::size().unwrap_or(FALLBACK_SIZE)
}

pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    pub fn enter(title: &str) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = Self { active: true };

        let mut out = io::stdout().lock();
        ansi::enter_alt_screen(&mut out)?;
        ansi::cursor_hide(&mut out)?;
        ansi::clear_screen(&mut out)?;
        ansi::set_title(&mut out, title)?;
        out.flush()?;

        tracing::debug!("terminal entered raw mode");
        Ok(guard)
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let mut out = io::stdout().lock();
        ansi::reset(&mut out)?;
        ansi::cursor_show(&mut out)?;
        ansi::exit_alt_screen(&mut out)?;
        out.flush()?;
        terminal::disable_raw_mode()?;

        tracing::debug!("terminal restored");
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            tracing::warn!(%err, "failed to restore terminal");
        }
    }
}
