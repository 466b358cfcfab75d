use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;

use crate::Coord;

pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

pub enum AppEvent {
    /// Pause or resume the simulation clock
    TogglePause,

    /// Advance a single generation while paused
    Step,

    /// Move the editing cursor
    MoveCursor(Direction),

    /// Flip the cell under the editing cursor
    ToggleCell,

    /// Randomly re-populate the board
    Reseed,

    /// Kill every cell
    Clear,

    /// The terminal was resized
    Resize { cols: Coord, rows: Coord },

    /// Exit the application
    Exit,
}

/// Converts a crossterm event into an app event
pub fn convert_event(event: CrossTermEvent) -> Option<AppEvent> {
    match event {
        CrossTermEvent::Key(key_event) => match key_event {
            KeyEvent {
                code: KeyCode::Char('q'),
                ..
            }
            | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => Some(AppEvent::Exit),
            KeyEvent {
                code: KeyCode::Char(' '),
                ..
            } => Some(AppEvent::TogglePause),
            KeyEvent {
                code: KeyCode::Char('s'),
                ..
            } => Some(AppEvent::Step),
            KeyEvent {
                code: KeyCode::Char('h') | KeyCode::Left,
                ..
            } => Some(AppEvent::MoveCursor(Direction::Left)),
            KeyEvent {
                code: KeyCode::Char('j') | KeyCode::Down,
                ..
            } => Some(AppEvent::MoveCursor(Direction::Down)),
            KeyEvent {
                code: KeyCode::Char('k') | KeyCode::Up,
                ..
            } => Some(AppEvent::MoveCursor(Direction::Up)),
            KeyEvent {
                code: KeyCode::Char('l') | KeyCode::Right,
                ..
            } => Some(AppEvent::MoveCursor(Direction::Right)),
            KeyEvent {
                code: KeyCode::Char('t') | KeyCode::Enter,
                ..
            } => Some(AppEvent::ToggleCell),
            KeyEvent {
                code: KeyCode::Char('r'),
                ..
            } => Some(AppEvent::Reseed),
            KeyEvent {
                code: KeyCode::Char('c'),
                ..
            } => Some(AppEvent::Clear),
            _ => None,
        },
        CrossTermEvent::Resize(cols, rows) => Some(AppEvent::Resize { cols, rows }),
        _ => None,
    }
}
