use std::io;
use std::time::Duration;
use std::time::Instant;

use anyhow::Context;
use crossterm::cursor;
use crossterm::event;
use crossterm::execute;
use crossterm::style;
use crossterm::terminal;
use tracing::debug;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lifegrid::Coord;
use lifegrid::board::Board;
use lifegrid::events::AppEvent;
use lifegrid::events::Direction;
use lifegrid::events::convert_event;
use lifegrid::screen::Screen;
use lifegrid::screen::status_line;

/// How often the screen repaints and input is polled
const FRAMETIME: Duration = Duration::from_millis(30);

/// How often the simulation advances, decoupled from the render rate
const TICKTIME: Duration = Duration::from_millis(500);

/// Probability that a cell starts out alive
const SEED_DENSITY: f64 = 0.05;

/// Driver state. Timing and UI flags live here, never in the engine.
struct App {
    paused: bool,
    cursor_x: Coord,
    cursor_y: Coord,
    last_tick: Instant,
}

impl App {
    fn new() -> Self {
        Self {
            paused: false,
            cursor_x: 0,
            cursor_y: 0,
            last_tick: Instant::now(),
        }
    }

    fn move_cursor(&mut self, dir: Direction, board: &Board) {
        match dir {
            Direction::Up => self.cursor_y = self.cursor_y.saturating_sub(1),
            Direction::Down => self.cursor_y = (self.cursor_y + 1).min(board.height() - 1),
            Direction::Left => self.cursor_x = self.cursor_x.saturating_sub(1),
            Direction::Right => self.cursor_x = (self.cursor_x + 1).min(board.width() - 1),
        }
    }

    fn clamp_cursor(&mut self, board: &Board) {
        self.cursor_x = self.cursor_x.min(board.width() - 1);
        self.cursor_y = self.cursor_y.min(board.height() - 1);
    }
}

/// Board dimensions for a cols x rows terminal, keeping the bottom row free
/// for the status bar.
fn board_size(cols: Coord, rows: Coord) -> (Coord, Coord) {
    (cols.max(1), rows.saturating_sub(1).max(1))
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they can be redirected away from the raw-mode
    // screen. Silent unless RUST_LOG is set.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let (cols, rows) = terminal::size().context("Failed to query the terminal size")?;
    let (width, height) = board_size(cols, rows);
    info!("Starting with a {width}x{height} board");

    let mut board = Board::new(width, height)?;
    board.seed(&mut rand::rng(), SEED_DENSITY);

    terminal::enable_raw_mode()?;
    let res = run(&mut board);
    terminal::disable_raw_mode()?;

    res
}

fn run(board: &mut Board) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    let mut screen = Screen::new(board.width(), board.height());
    let mut app = App::new();

    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;

    loop {
        // Poll input for as long as FRAMETIME
        let event = if event::poll(FRAMETIME)? {
            convert_event(event::read()?)
        } else {
            None
        };

        match event {
            None => {}
            Some(AppEvent::Exit) => break,
            Some(AppEvent::TogglePause) => {
                app.paused = !app.paused;
            }
            Some(AppEvent::Step) => {
                if app.paused {
                    board.advance();
                }
            }
            Some(AppEvent::MoveCursor(dir)) => {
                app.move_cursor(dir, board);
            }
            Some(AppEvent::ToggleCell) => {
                let alive = board.toggle(app.cursor_x, app.cursor_y)?;
                debug!(
                    "Toggled ({}, {}) to {alive}",
                    app.cursor_x, app.cursor_y
                );
            }
            Some(AppEvent::Reseed) => {
                board.seed(&mut rand::rng(), SEED_DENSITY);
            }
            Some(AppEvent::Clear) => {
                board.clear();
            }
            Some(AppEvent::Resize { cols, rows }) => {
                let (width, height) = board_size(cols, rows);
                info!("Resized to a {width}x{height} board");

                // The board does not survive a resize, the new one is
                // reseeded from scratch.
                *board = Board::new(width, height)?;
                board.seed(&mut rand::rng(), SEED_DENSITY);

                screen = Screen::new(width, height);
                app.clamp_cursor(board);

                execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
            }
        }

        if !app.paused && app.last_tick.elapsed() >= TICKTIME {
            board.advance();
            app.last_tick = Instant::now();
        }

        let frame = screen.render(board)?;

        execute!(stdout, cursor::Hide, cursor::MoveTo(0, 0))?;

        for line in frame.lines() {
            execute!(stdout, style::Print(line), cursor::MoveToNextLine(1))?;
        }

        // The terminal cursor doubles as the editing cursor
        execute!(
            stdout,
            style::Print(status_line(board, app.paused)),
            cursor::MoveTo(app.cursor_x, app.cursor_y),
            cursor::Show,
        )?;
    }

    Ok(())
}
