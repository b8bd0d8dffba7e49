//! A rectangular bitboard packed into a single unsigned integer.
//!
//! The type is `no_std` friendly and avoids heap allocations. A board of
//! `width × height` cells is stored row-major in the integer `T`, so the
//! grid must fit in `T::BITS`. Dimensions are chosen at run time and checked
//! once by [`BitBoard::try_new`].

use core::ops::{BitAnd, BitOr, BitXor, Not};
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested `width * height` exceeds the capacity of `T::BITS`.
    SizeTooLarge { cells: usize, capacity: usize },
    /// Row or column index is out of bounds.
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { cells, capacity } => {
                write!(f, "SizeTooLarge: {} cells exceed T::BITS={}", cells, capacity)
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A `width × height` bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    width: usize,
    height: usize,
}

impl<T> BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of bits available in `T`.
    pub const CAPACITY: usize = mem::size_of::<T>() * 8;

    #[inline]
    fn mask(&self) -> T {
        let cells = self.cells();
        if cells == Self::CAPACITY {
            !T::zero()
        } else {
            (T::one() << cells) - T::one()
        }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if the grid does not
    /// fit in `T`.
    pub fn try_new(width: usize, height: usize) -> Result<Self, BitBoardError> {
        let cells = width.saturating_mul(height);
        if cells > Self::CAPACITY {
            Err(BitBoardError::SizeTooLarge {
                cells,
                capacity: Self::CAPACITY,
            })
        } else {
            Ok(BitBoard {
                bits: T::zero(),
                width,
                height,
            })
        }
    }

    /// An empty board with the same dimensions as `self`.
    #[inline]
    pub fn empty_like(&self) -> Self {
        BitBoard {
            bits: T::zero(),
            width: self.width,
            height: self.height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells (`width * height`).
    #[inline]
    pub fn cells(&self) -> usize {
        self.width * self.height
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Returns true if every cell is set.
    pub fn is_full(&self) -> bool {
        self.bits == self.mask()
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        let idx = self.index(row, col)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let idx = self.index(row, col)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Clears the bit at (row, col) to 0.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let idx = self.index(row, col)?;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    /// Toggles the bit at (row, col).
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let idx = self.index(row, col)?;
        self.bits = self.bits ^ (T::one() << idx);
        Ok(())
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, BitBoardError> {
        if row >= self.height || col >= self.width {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(row * self.width + col)
        }
    }

    /// Creates a bitboard from an iterator over `(row, col)` positions.
    pub fn from_iter<I>(width: usize, height: usize, iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::try_new(width, height)?;
        for (r, c) in iter {
            board.set(r, c)?;
        }
        Ok(board)
    }

    /// Iterator over the set bits of the board, in row-major order.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T> {
        SetBits {
            board: self,
            idx: 0,
        }
    }

    #[inline]
    fn with_bits(&self, bits: T) -> Self {
        let mut board = self.empty_like();
        board.bits = bits & self.mask();
        board
    }
}

impl<T> fmt::Debug for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "BitBoard<{}, {}x{}>:",
            any::type_name::<T>(),
            self.width,
            self.height
        )?;
        fmt::Display::fmt(self, f)
    }
}

impl<T> fmt::Display for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.height {
            for c in 0..self.width {
                let bit = if ((self.bits >> (r * self.width + c)) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over `(row, col)` positions of set bits.
pub struct SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T>,
    idx: usize,
}

impl<'a, T> Iterator for SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let width = self.board.width;
        while self.idx < self.board.cells() {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / width, idx % width));
            }
        }
        None
    }
}

// Binary operators keep the dimensions of the left operand; both sides are
// expected to describe the same grid.

impl<T> BitAnd for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        debug_assert_eq!((self.width, self.height), (rhs.width, rhs.height));
        self.with_bits(self.bits & rhs.bits)
    }
}

impl<T> BitOr for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        debug_assert_eq!((self.width, self.height), (rhs.width, rhs.height));
        self.with_bits(self.bits | rhs.bits)
    }
}

impl<T> BitXor for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self {
        debug_assert_eq!((self.width, self.height), (rhs.width, rhs.height));
        self.with_bits(self.bits ^ rhs.bits)
    }
}

/// Bitwise NOT, restricted to the cells of the board.
impl<T> Not for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        self.with_bits(!self.bits)
    }
}
