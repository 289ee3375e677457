//! Terminal session guard.

use crossterm::{cursor, execute, terminal};
use std::io::{self, Write};

/// Puts the terminal into raw mode (and optionally the alternate screen)
/// for as long as it lives.
///
/// Every setup step that succeeded is undone on drop, including when a
/// later step of [`TerminalSession::enter`] fails.
#[derive(Debug)]
pub struct TerminalSession {
    raw_mode: bool,
    alternate_screen: bool,
    cursor_hidden: bool,
}

impl TerminalSession {
    /// Enter raw mode, optionally switch to the alternate screen, and hide
    /// the cursor.
    pub fn enter(alternate_screen: bool) -> io::Result<Self> {
        let mut session = Self {
            raw_mode: false,
            alternate_screen: false,
            cursor_hidden: false,
        };
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        session.raw_mode = true;

        if alternate_screen {
            execute!(stdout, terminal::EnterAlternateScreen)?;
            session.alternate_screen = true;
        }

        execute!(stdout, cursor::Hide)?;
        session.cursor_hidden = true;

        tracing::debug!(alternate_screen, "terminal session entered");
        Ok(session)
    }

    /// Current terminal size in (columns, rows).
    pub fn size() -> io::Result<(u16, u16)> {
        terminal::size()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.cursor_hidden {
            let _ = execute!(stdout, cursor::Show);
        }
        if self.alternate_screen {
            let _ = execute!(stdout, terminal::LeaveAlternateScreen);
        }
        if self.raw_mode {
            let _ = terminal::disable_raw_mode();
        }
        let _ = stdout.flush();
        tracing::debug!("terminal session restored");
    }
}
