//! Rectangular byte grid and directional line scanning.

mod word;

#[cfg(test)]
mod tests;

use core::fmt;

use bstr::ByteSlice;
use thiserror::Error;

pub use self::word::{Needle, WordAnchors, WordCount};

/// Errors raised when building a grid.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,
    #[error("row {row} has {len} columns, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// A row and column position.
///
/// Scans step past the edges of a grid before they turn around, so both
/// coordinates are signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: isize,
    pub col: isize,
}

impl Pos {
    #[inline]
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
    pub rows: usize,
    pub cols: usize,
}

impl Dims {
    /// Test if the position falls inside the grid.
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (0..self.rows as isize).contains(&pos.row) && (0..self.cols as isize).contains(&pos.col)
    }
}

/// A position increment within the given dimensions.
pub type Step = fn(Pos, Dims) -> Pos;

/// One scanning order over a grid.
///
/// A scan is plain data: a start position, a step applied within a line and
/// a line increment applied to each line start. The stock constructors all
/// tile a grid so that every cell is visited exactly once.
#[derive(Debug, Clone, Copy)]
pub struct Scan {
    start: Pos,
    step: Step,
    line: Step,
}

impl Scan {
    /// Construct a scanning order from its parts.
    ///
    /// The scanner stops a line when `step` leaves the grid and stops
    /// entirely when `line` takes the line start out, so both must
    /// eventually escape any in-bounds position or scanning will not
    /// terminate.
    #[inline]
    pub fn new(start: Pos, step: Step, line: Step) -> Self {
        Self { start, step, line }
    }

    /// Rows scanned left to right, top to bottom.
    pub fn rows(_: Dims) -> Self {
        Self::new(
            Pos::new(0, 0),
            |p, _| Pos::new(p.row, p.col + 1),
            |p, _| Pos::new(p.row + 1, p.col),
        )
    }

    /// Rows scanned right to left, top to bottom.
    pub fn rows_rev(dims: Dims) -> Self {
        Self::new(
            Pos::new(0, dims.cols as isize - 1),
            |p, _| Pos::new(p.row, p.col - 1),
            |p, _| Pos::new(p.row + 1, p.col),
        )
    }

    /// Columns scanned top to bottom, left to right.
    pub fn columns(_: Dims) -> Self {
        Self::new(
            Pos::new(0, 0),
            |p, _| Pos::new(p.row + 1, p.col),
            |p, _| Pos::new(p.row, p.col + 1),
        )
    }

    /// Columns scanned bottom to top, left to right.
    pub fn columns_rev(dims: Dims) -> Self {
        Self::new(
            Pos::new(dims.rows as isize - 1, 0),
            |p, _| Pos::new(p.row - 1, p.col),
            |p, _| Pos::new(p.row, p.col + 1),
        )
    }

    /// Down-right diagonals, each walked from its topmost cell.
    ///
    /// Line starts march from the top-right corner along the top row, then
    /// down the left column.
    pub fn diagonals(dims: Dims) -> Self {
        Self::new(
            Pos::new(0, dims.cols as isize - 1),
            |p, _| Pos::new(p.row + 1, p.col + 1),
            |p, _| {
                if p.col > 0 {
                    Pos::new(p.row, p.col - 1)
                } else {
                    Pos::new(p.row + 1, p.col)
                }
            },
        )
    }

    /// Down-right diagonals walked in reverse, from the bottommost cell up.
    ///
    /// Line starts march from the top-right corner down the right column,
    /// then along the bottom row.
    pub fn diagonals_rev(dims: Dims) -> Self {
        Self::new(
            Pos::new(0, dims.cols as isize - 1),
            |p, _| Pos::new(p.row - 1, p.col - 1),
            |p, dims| {
                if p.row < dims.rows as isize - 1 {
                    Pos::new(p.row + 1, p.col)
                } else {
                    Pos::new(p.row, p.col - 1)
                }
            },
        )
    }

    /// Down-left diagonals, each walked from its topmost cell.
    ///
    /// Line starts march from the top-left corner along the top row, then
    /// down the right column.
    pub fn anti_diagonals(_: Dims) -> Self {
        Self::new(
            Pos::new(0, 0),
            |p, _| Pos::new(p.row + 1, p.col - 1),
            |p, dims| {
                if p.col < dims.cols as isize - 1 {
                    Pos::new(p.row, p.col + 1)
                } else {
                    Pos::new(p.row + 1, p.col)
                }
            },
        )
    }

    /// Down-left diagonals walked in reverse, from the bottommost cell up.
    ///
    /// Line starts march from the top-left corner down the left column,
    /// then along the bottom row.
    pub fn anti_diagonals_rev(_: Dims) -> Self {
        Self::new(
            Pos::new(0, 0),
            |p, _| Pos::new(p.row - 1, p.col + 1),
            |p, dims| {
                if p.row < dims.rows as isize - 1 {
                    Pos::new(p.row + 1, p.col)
                } else {
                    Pos::new(p.row, p.col + 1)
                }
            },
        )
    }

    /// Every scanning order, covering all eight directions.
    pub fn all(dims: Dims) -> [Scan; 8] {
        [
            Self::rows(dims),
            Self::rows_rev(dims),
            Self::columns(dims),
            Self::columns_rev(dims),
            Self::diagonals(dims),
            Self::diagonals_rev(dims),
            Self::anti_diagonals(dims),
            Self::anti_diagonals_rev(dims),
        ]
    }
}

/// Receives the cells of a scan in visit order.
pub trait ScanSink {
    /// Called for every cell along the current line.
    fn ingest(&mut self, symbol: u8, at: Pos);

    /// Called when a line has been exhausted.
    fn end_of_line(&mut self);
}

/// A rectangular byte grid with owned storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Vec<u8>,
    dims: Dims,
}

impl Grid {
    /// Parse a grid from newline-separated rows.
    ///
    /// Trailing whitespace is stripped. Every row must have the same length
    /// as the first and the grid must contain at least one cell.
    pub fn parse(input: &[u8]) -> Result<Self, GridError> {
        let input = input.trim_end();
        let mut data = Vec::with_capacity(input.len());
        let mut rows = 0;
        let mut cols = 0;

        for (row, line) in input.lines().enumerate() {
            if row == 0 {
                cols = line.len();
            } else if line.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    len: line.len(),
                    expected: cols,
                });
            }

            data.extend_from_slice(line);
            rows += 1;
        }

        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }

        Ok(Self {
            data,
            dims: Dims { rows, cols },
        })
    }

    /// Grid dimensions.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Get the byte at the given position.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<u8> {
        if !self.dims.contains(pos) {
            return None;
        }

        let index = pos.row as usize * self.dims.cols + pos.col as usize;
        self.data.get(index).copied()
    }

    /// Feed every cell to `sink` in the order given by `scan`.
    ///
    /// Each line is walked with the scan's step until it leaves the grid,
    /// followed by [ScanSink::end_of_line]; line starts advance with the
    /// scan's line increment until the start itself leaves the grid.
    pub fn scan<S>(&self, scan: Scan, sink: &mut S)
    where
        S: ScanSink,
    {
        let dims = self.dims;
        let mut start = scan.start;

        while dims.contains(start) {
            let mut cur = start;

            while let Some(symbol) = self.get(cur) {
                sink.ingest(symbol, cur);
                cur = (scan.step)(cur, dims);
            }

            sink.end_of_line();
            start = (scan.line)(start, dims);
        }
    }
}
