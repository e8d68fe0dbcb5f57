use std::io;
use std::io::Write;

use crossterm::cursor;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;

use crate::session::Phase;
use crate::session::Session;

pub mod terminal_guard;

pub use self::terminal_guard::Terminal;

/// Draw the grid, the status line below it and, while editing, the cursor on the selected cell.
///
/// The grid is written as-is, one line at a time: in raw mode a bare line feed does not return
/// the carriage.
pub fn draw<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    queue!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    for line in session.grid().render_text().lines() {
        queue!(out, style::Print(line), cursor::MoveToNextLine(1))?;
    }

    queue!(out, style::Print(status_line(session)))?;

    match session.phase() {
        Phase::Editing => {
            // Interior cell (x, y) sits at column x, row y of the screen
            let (x, y) = session.cursor().position();
            queue!(out, cursor::MoveTo(x as u16, y as u16), cursor::Show)?;
        }
        Phase::Running => {
            queue!(out, cursor::Hide)?;
        }
    }

    out.flush()
}

/// Whether a grid with the given interior fits in a terminal of `cols` by `rows`, borders and
/// status line included.
pub fn fits_terminal((width, height): (usize, usize), (cols, rows): (u16, u16)) -> bool {
    width + 2 <= cols as usize && height + 3 <= rows as usize
}

pub fn status_line(session: &Session) -> String {
    match session.phase() {
        Phase::Editing => format!(
            "population {} | arrows/hjkl move, enter toggles, space starts, q quits",
            session.population()
        ),
        Phase::Running => format!(
            "generation {} population {} | q quits",
            session.generation(),
            session.population()
        ),
    }
}
