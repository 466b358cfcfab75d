use rand::Rng;
use thiserror::Error;

use crate::Coord;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds {
        x: Coord,
        y: Coord,
        width: Coord,
        height: Coord,
    },

    #[error("Board dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: Coord, height: Coord },
}

/// The eight Moore-neighborhood offsets around a cell.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A fixed-size Life board.
///
/// Cells are stored densely in row-major order. The board carries a second
/// buffer of the same size so that [`Board::advance`] can write the next
/// generation while reading the current one, then swap the two without
/// reallocating.
///
/// The boundary is hard: edge cells have fewer neighbors, and accessors
/// reject out-of-range coordinates instead of clamping or wrapping.
pub struct Board {
    width: Coord,
    height: Coord,

    /// The current generation, row-major.
    cells: Vec<bool>,

    /// Scratch buffer the next generation is written into.
    scratch: Vec<bool>,

    /// Number of times [`Board::advance`] has run since creation or the last
    /// [`Board::clear`]/[`Board::seed`].
    generation: u64,
}

impl Board {
    /// Create a board with every cell dead.
    pub fn new(width: Coord, height: Coord) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::ZeroDimension { width, height });
        }

        let n = width as usize * height as usize;

        Ok(Self {
            width,
            height,
            cells: vec![false; n],
            scratch: vec![false; n],
            generation: 0,
        })
    }

    pub fn width(&self) -> Coord {
        self.width
    }

    pub fn height(&self) -> Coord {
        self.height
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn is_alive(&self, x: Coord, y: Coord) -> Result<bool, BoardError> {
        let i = self.index(x, y)?;

        Ok(self.cells[i])
    }

    pub fn set_alive(&mut self, x: Coord, y: Coord) -> Result<(), BoardError> {
        let i = self.index(x, y)?;
        self.cells[i] = true;

        Ok(())
    }

    pub fn set_dead(&mut self, x: Coord, y: Coord) -> Result<(), BoardError> {
        let i = self.index(x, y)?;
        self.cells[i] = false;

        Ok(())
    }

    /// Flip a single cell, returning its new state.
    pub fn toggle(&mut self, x: Coord, y: Coord) -> Result<bool, BoardError> {
        let i = self.index(x, y)?;
        self.cells[i] = !self.cells[i];

        Ok(self.cells[i])
    }

    /// Count the live cells among the up-to-eight neighbors of `(x, y)`.
    ///
    /// Neighbor coordinates that fall outside the board are skipped, so
    /// corner cells see at most 3 neighbors and edge cells at most 5.
    pub fn count_living_neighbors(&self, x: Coord, y: Coord) -> Result<u8, BoardError> {
        self.index(x, y)?;

        Ok(self.living_neighbors(x as usize, y as usize))
    }

    /// Advance the whole board by one generation under B3/S23.
    ///
    /// Every neighbor count is taken against the pre-advance state: the pass
    /// writes only the scratch buffer, which is swapped in once the pass is
    /// complete.
    pub fn advance(&mut self) {
        let (w, h) = (self.width as usize, self.height as usize);

        for y in 0..h {
            for x in 0..w {
                let alive = self.cells[y * w + x];
                let n = self.living_neighbors(x, y);

                // Three neighbors is birth or survival, an alive cell with
                // two survives. Everything else dies.
                self.scratch[y * w + x] = matches!((alive, n), (_, 3) | (true, 2));
            }
        }

        std::mem::swap(&mut self.cells, &mut self.scratch);
        self.generation += 1;
    }

    /// Re-populate the board, making each cell independently alive with
    /// probability `density`. Resets the generation counter.
    pub fn seed<R: Rng>(&mut self, rng: &mut R, density: f64) {
        for cell in self.cells.iter_mut() {
            *cell = rng.random_bool(density);
        }

        self.generation = 0;
    }

    /// Kill every cell and reset the generation counter.
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.generation = 0;
    }

    /// Row-major index of `(x, y)`, bounds-checked.
    fn index(&self, x: Coord, y: Coord) -> Result<usize, BoardError> {
        if x >= self.width || y >= self.height {
            return Err(BoardError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok(y as usize * self.width as usize + x as usize)
    }

    /// Neighbor count for an in-range cell.
    fn living_neighbors(&self, x: usize, y: usize) -> u8 {
        let (w, h) = (self.width as i32, self.height as i32);
        let mut count = 0;

        for (dx, dy) in NEIGHBOR_OFFSETS {
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;

            if nx < 0 || ny < 0 || nx >= w || ny >= h {
                continue;
            }

            if self.cells[ny as usize * w as usize + nx as usize] {
                count += 1;
            }
        }

        count
    }
}
