use crate::Coord;
use crate::board::Board;
use crate::board::BoardError;

const LIVE_GLYPH: char = '#';
const DEAD_GLYPH: char = ' ';

/// Turns a [`Board`] into printable text.
///
/// Owns a reusable frame buffer so rendering allocates once, not per frame.
/// One character per cell, one line per row; the driver decides where on the
/// terminal the frame goes.
pub struct Screen {
    fb: String,
}

impl Screen {
    pub fn new(width: Coord, height: Coord) -> Self {
        // One byte per cell plus a newline per row
        let fb = String::with_capacity((width as usize + 1) * height as usize);

        Self { fb }
    }

    /// Render every cell of the board into the frame buffer.
    pub fn render(&mut self, board: &Board) -> Result<&str, BoardError> {
        self.fb.clear();

        for y in 0..board.height() {
            for x in 0..board.width() {
                let glyph = if board.is_alive(x, y)? {
                    LIVE_GLYPH
                } else {
                    DEAD_GLYPH
                };

                self.fb.push(glyph);
            }

            self.fb.push('\n');
        }

        Ok(&self.fb)
    }
}

/// One-line summary for the driver's status bar.
pub fn status_line(board: &Board, paused: bool) -> String {
    let state = if paused { "paused " } else { "running" };

    format!(
        "gen {:>6}  pop {:>6}  {}  [space] pause  [hjkl] move  [t] toggle  [s] step  [r] seed  [c] clear  [q] quit",
        board.generation(),
        board.population(),
        state,
    )
}
