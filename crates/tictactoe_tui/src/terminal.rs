//! Raw-mode terminal setup that undoes itself on drop.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, info, warn};

/// Restores the terminal when dropped, including while unwinding from a panic
/// or after an early `?` return.
pub struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// Switches to raw mode and the alternate screen.
    pub fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        // Guard exists before the screen switch, so a failed switch still restores the terminal.
        let mut guard = Self::new(out);
        guard.raw_mode = true;
        execute!(guard.out, EnterAlternateScreen)?;
        info!("Terminal switched to raw mode");
        Ok(guard)
    }

    /// Wraps `out` without touching raw mode; dropping still leaves the
    /// alternate screen and shows the cursor.
    pub fn new(out: W) -> Self {
        Self {
            out,
            raw_mode: false,
        }
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        debug!("Restoring terminal");

        if self.raw_mode
            && let Err(e) = disable_raw_mode()
        {
            warn!(error = %e, "Failed to disable raw mode");
        }

        if let Err(e) = execute!(self.out, LeaveAlternateScreen, Show) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};

    const LEAVE_ALTERNATE_SCREEN: &str = "\x1b[?1049l";
    const SHOW_CURSOR: &str = "\x1b[?25h";

    #[test]
    fn test_drop_restores_screen_and_cursor() {
        let mut out = Vec::new();
        drop(TerminalGuard::new(&mut out));

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains(LEAVE_ALTERNATE_SCREEN), "{:?}", written);
        assert!(written.contains(SHOW_CURSOR), "{:?}", written);
    }

    #[test]
    fn test_panic_still_restores_terminal() {
        let mut out = Vec::new();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _guard = TerminalGuard::new(&mut out);
            panic!("draw failed");
        }));
        assert!(result.is_err());

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains(LEAVE_ALTERNATE_SCREEN), "{:?}", written);
        assert!(written.contains(SHOW_CURSOR), "{:?}", written);
    }
}
