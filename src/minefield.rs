//! Minefield state: mine layout, adjacency counts, marks and explored cells.

use alloc::vec::Vec;
use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::Rng;
#[cfg(feature = "std")]
use rand::SeedableRng;

use crate::bitboard::BitBoard;
use crate::cell::{neighbors, Cell, Neighbors, Position};
use crate::common::{FieldError, RevealResult};

/// Per-cell flag mask, row-major.
pub type Mask = BitBoard<u128>;

/// Main field state: mine layout, counts, marks and explored cells.
///
/// Adjacency counts are computed once, when the layout is final. The mine
/// moved by a first reveal does not update them (see [`Minefield::reveal_cell`]).
#[derive(Clone, Debug)]
pub struct Minefield {
    width: usize,
    height: usize,
    mines: Mask,
    marks: Mask,
    explored: Mask,
    adjacent: Vec<u8>,
    rng: SmallRng,
}

fn empty_mask(width: usize, height: usize) -> Result<Mask, FieldError> {
    if width == 0 || height == 0 {
        return Err(FieldError::EmptyField);
    }
    Ok(Mask::try_new(width, height)?)
}

fn check_mine_count(mines: usize, cells: usize) -> Result<(), FieldError> {
    if mines >= cells {
        Err(FieldError::TooManyMines { mines, cells })
    } else {
        Ok(())
    }
}

impl Minefield {
    /// Create a field with `mines` randomly placed mines, seeded from the
    /// thread RNG.
    #[cfg(feature = "std")]
    pub fn new(width: usize, height: usize, mines: usize) -> Result<Self, FieldError> {
        let mut seed_rng = rand::rng();
        Self::with_rng(width, height, mines, SmallRng::from_rng(&mut seed_rng))
    }

    /// Create a field with `mines` randomly placed mines using `rng` for
    /// placement and for the first-reveal relocation.
    pub fn with_rng(
        width: usize,
        height: usize,
        mines: usize,
        mut rng: SmallRng,
    ) -> Result<Self, FieldError> {
        let mut layout = empty_mask(width, height)?;
        check_mine_count(mines, layout.cells())?;

        // rejection sampling: an already mined draw leaves the count unchanged
        while layout.count_ones() < mines {
            let row = rng.random_range(0..height);
            let col = rng.random_range(0..width);
            layout.set(row, col)?;
        }
        debug!("placed {} mines on a {}x{} field", mines, width, height);

        Ok(Self::from_layout(layout, rng))
    }

    /// Create a field with mines at exactly `positions`. Duplicates collapse
    /// into one mine.
    pub fn from_mines(
        width: usize,
        height: usize,
        positions: &[Position],
        rng: SmallRng,
    ) -> Result<Self, FieldError> {
        let mut layout = empty_mask(width, height)?;
        for &(row, col) in positions {
            layout.set(row, col)?;
        }
        check_mine_count(layout.count_ones(), layout.cells())?;
        Ok(Self::from_layout(layout, rng))
    }

    fn from_layout(mines: Mask, rng: SmallRng) -> Self {
        let (width, height) = (mines.width(), mines.height());
        let adjacent = (0..height)
            .flat_map(|row| (0..width).map(move |col| (row, col)))
            .map(|pos| {
                if mines.get(pos.0, pos.1).unwrap_or(false) {
                    0
                } else {
                    neighbors(pos, width, height)
                        .filter(|&(r, c)| mines.get(r, c).unwrap_or(false))
                        .count() as u8
                }
            })
            .collect();

        Minefield {
            width,
            height,
            marks: mines.empty_like(),
            explored: mines.empty_like(),
            mines,
            adjacent,
            rng,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of mines currently on the field.
    pub fn mine_count(&self) -> usize {
        self.mines.count_ones()
    }

    /// Mask of mined cells.
    pub fn mines(&self) -> Mask {
        self.mines
    }

    /// Mask of marked cells.
    pub fn marks(&self) -> Mask {
        self.marks
    }

    /// Mask of explored cells.
    pub fn explored(&self) -> Mask {
        self.explored
    }

    /// Snapshot of the cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, FieldError> {
        let is_mined = self.mines.get(row, col)?;
        Ok(Cell {
            is_mined,
            adjacent_mines: if is_mined {
                0
            } else {
                self.adjacent[row * self.width + col]
            },
            is_marked: self.marks.get(row, col)?,
            is_explored: self.explored.get(row, col)?,
        })
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |row| (0..self.width).map(move |col| (row, col)))
            .filter_map(move |(row, col)| self.cell(row, col).ok().map(|cell| ((row, col), cell)))
    }

    /// In-bounds neighbours of `pos`.
    pub fn neighbors(&self, pos: Position) -> Neighbors {
        neighbors(pos, self.width, self.height)
    }

    /// Toggle the player's mark at (row, col).
    ///
    /// Placing a mark on an explored cell is rejected; removing one is
    /// always allowed.
    pub fn mark_cell(&mut self, row: usize, col: usize) -> Result<(), FieldError> {
        let marked = self.marks.get(row, col)?;
        if !marked && self.explored.get(row, col)? {
            return Err(FieldError::IllegalMarkOnExplored { row, col });
        }
        self.marks.toggle(row, col)?;
        trace!("mark at ({}, {}) -> {}", row, col, !marked);
        Ok(())
    }

    /// Reveal (row, col) and flood-fill from it.
    ///
    /// A mine under the first reveal of the game is moved to a random other
    /// free cell instead of detonating. Stored adjacency counts are not
    /// recomputed after the move, so hints around the old and new position
    /// may be off by one for the rest of the game.
    pub fn reveal_cell(
        &mut self,
        row: usize,
        col: usize,
        is_first_reveal: bool,
    ) -> Result<RevealResult, FieldError> {
        if self.mines.get(row, col)? {
            if !is_first_reveal {
                debug!("mine detonated at ({}, {})", row, col);
                return Ok(RevealResult::Detonated);
            }
            self.relocate_mine((row, col))?;
        }

        let visited = self.flood_fill((row, col))?;
        debug!("reveal at ({}, {}) visited {} cells", row, col, visited);
        Ok(RevealResult::Safe)
    }

    /// `true` when the marks match the mines exactly, or when every
    /// non-mined cell is explored.
    pub fn check_win(&self) -> bool {
        self.marks == self.mines || (self.explored | self.mines).is_full()
    }

    #[inline]
    fn is_mined(&self, (row, col): Position) -> bool {
        self.mines.get(row, col).unwrap_or(false)
    }

    fn relocate_mine(&mut self, from: Position) -> Result<Position, FieldError> {
        self.mines.clear(from.0, from.1)?;
        // construction keeps at least one free cell besides `from`
        loop {
            let row = self.rng.random_range(0..self.height);
            let col = self.rng.random_range(0..self.width);
            if (row, col) != from && !self.mines.get(row, col)? {
                self.mines.set(row, col)?;
                debug!("first reveal: mine moved from {:?} to {:?}", from, (row, col));
                return Ok((row, col));
            }
        }
    }

    /// Explicit-stack flood fill. A cell spreads to its neighbours only if
    /// none of them holds a mine. Returns the number of cells visited.
    fn flood_fill(&mut self, start: Position) -> Result<usize, FieldError> {
        let mut visited = self.mines.empty_like();
        let mut queued = self.mines.empty_like();
        let mut frontier: Vec<Position> = Vec::new();

        queued.set(start.0, start.1)?;
        frontier.push(start);

        while let Some(pos) = frontier.pop() {
            if visited.get(pos.0, pos.1)? {
                continue;
            }
            visited.set(pos.0, pos.1)?;
            self.explored.set(pos.0, pos.1)?;

            let clear = neighbors(pos, self.width, self.height).all(|n| !self.is_mined(n));
            if !clear {
                continue;
            }
            for (r, c) in neighbors(pos, self.width, self.height) {
                if !visited.get(r, c)? && !queued.get(r, c)? {
                    queued.set(r, c)?;
                    frontier.push((r, c));
                }
            }
        }

        Ok(visited.count_ones())
    }
}
