pub mod board;
pub mod events;
pub mod screen;

/// Cell coordinates. Boards are sized from the terminal, so this matches what
/// crossterm reports for columns and rows.
pub type Coord = u16;
