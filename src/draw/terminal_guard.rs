use std::io;
use std::io::Stdout;

use crossterm::cursor;
use crossterm::execute;
use crossterm::terminal;
use tracing::warn;

use crate::session::Session;

/// The terminal in raw mode on the alternate screen. Dropping it puts the terminal back the way
/// it was, whichever way the program exits.
pub struct Terminal {
    stdout: Stdout,
}

impl Terminal {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, terminal::EnterAlternateScreen) {
            // still need to undo raw mode, there is no guard yet
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }

        Ok(Self { stdout })
    }

    pub fn draw(&mut self, session: &Session) -> io::Result<()> {
        super::draw(&mut self.stdout, session)
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen) {
            warn!("failed to leave the alternate screen: {e}");
        }

        if let Err(e) = terminal::disable_raw_mode() {
            warn!("failed to disable raw mode: {e}");
        }
    }
}
