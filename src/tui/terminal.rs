use std::io;

use anyhow::Result;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::Backend;

/// Switches the host terminal in and out of dashboard mode
pub trait ScreenMode {
    fn enter(&mut self) -> io::Result<()>;
    fn leave(&mut self) -> io::Result<()>;
}

/// Raw mode, alternate screen and a hidden cursor on stdout
pub struct CrosstermScreen;

impl ScreenMode for CrosstermScreen {
    fn enter(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)
    }

    fn leave(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, Show)
    }
}

/// One dashboard session on the terminal.
///
/// The screen mode is left exactly once: by [`TerminalSession::run`] on the normal path,
/// or on drop when the session is abandoned early.
pub struct TerminalSession<B: Backend, M: ScreenMode> {
    terminal: Terminal<B>,
    mode: M,
    active: bool,
}

impl<B: Backend, M: ScreenMode> TerminalSession<B, M> {
    pub fn start(backend: B, mut mode: M) -> Result<Self> {
        mode.enter()?;
        let terminal = match Terminal::new(backend) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = mode.leave();
                return Err(e.into());
            }
        };
        let mut session = Self { terminal, mode, active: true };
        session.terminal.clear()?;
        Ok(session)
    }

    /// Run `body` against the terminal, then restore the screen.
    ///
    /// An error from `body` wins over an error restoring the screen.
    pub fn run<T>(mut self, body: impl FnOnce(&mut Terminal<B>) -> Result<T>) -> Result<T> {
        let result = body(&mut self.terminal);
        let restored = self.finish();
        let value = result?;
        restored?;
        Ok(value)
    }

    fn finish(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.mode.leave()?;
        Ok(())
    }
}

impl<B: Backend, M: ScreenMode> Drop for TerminalSession<B, M> {
    fn drop(&mut self) {
        if self.active {
            // May run while unwinding
            let _ = self.mode.leave();
        }
    }
}
