//! Cell snapshots and grid neighbourhood helpers.

/// `(row, col)` position on the field.
pub type Position = (usize, usize);

/// Read-only view of a single grid position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub is_mined: bool,
    /// Mines among the up-to-8 neighbours; always 0 for mined cells.
    pub adjacent_mines: u8,
    pub is_marked: bool,
    pub is_explored: bool,
}

impl Cell {
    /// Explored, not mined, and showing a non-zero count.
    pub const fn shows_number(&self) -> bool {
        self.is_explored && !self.is_mined && self.adjacent_mines > 0
    }
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Iterator over the in-bounds neighbours of a position.
#[derive(Debug, Clone)]
pub struct Neighbors {
    center: Position,
    height: usize,
    width: usize,
    index: usize,
}

/// Neighbours of `center` on a `width × height` grid. Positions off the
/// grid are skipped, never wrapped.
pub fn neighbors(center: Position, width: usize, height: usize) -> Neighbors {
    Neighbors {
        center,
        height,
        width,
        index: 0,
    }
}

impl Iterator for Neighbors {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < DISPLACEMENTS.len() {
            let (dr, dc) = DISPLACEMENTS[self.index];
            self.index += 1;

            let Some(row) = self.center.0.checked_add_signed(dr) else {
                continue;
            };
            let Some(col) = self.center.1.checked_add_signed(dc) else {
                continue;
            };
            if row < self.height && col < self.width {
                return Some((row, col));
            }
        }
        None
    }
}
