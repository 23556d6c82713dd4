//! Terminal ownership
//!
//! [`RenderContext`] switches the terminal into raw mode on the alternate
//! screen when created and puts it back when dropped, so every exit path
//! out of `main` (including errors) leaves a usable shell behind.

use crate::error::Result;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

pub type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// The one drawing surface of the program
pub struct RenderContext {
    terminal: CrosstermTerminal,
}

impl RenderContext {
    /// Take over the terminal and set the window title
    pub fn new(title: &str) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, SetTitle(title), Hide) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }

        let backend = CrosstermBackend::new(stdout);
        let terminal = match Terminal::new(backend) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
                let _ = disable_raw_mode();
                return Err(e.into());
            }
        };

        Ok(RenderContext { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut CrosstermTerminal {
        &mut self.terminal
    }
}

impl Drop for RenderContext {
    fn drop(&mut self) {
        // Nothing useful can be done if restoring fails
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen, Show);
        let _ = self.terminal.show_cursor();
    }
}
