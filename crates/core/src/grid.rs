//! Square grid of per-pixel classifications.
//!
//! Cells are stored row-major: row `i` corresponds to the `i`-th sample of the
//! y axis (row 0 is y = -1), column `j` to the `j`-th sample of the x axis.

use crate::classification::Classification;
use crate::error::BasinError;
use serde::Serialize;

/// A `size x size` grid of [`Classification`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassGrid {
    size: usize,
    cells: Vec<Classification>,
}

impl ClassGrid {
    /// Creates a grid from row-major cells, validating `cells.len() == size * size`.
    pub fn from_cells(size: usize, cells: Vec<Classification>) -> Result<Self, BasinError> {
        if size == 0 {
            return Err(BasinError::InvalidGridSize);
        }
        let expected = size.checked_mul(size).ok_or(BasinError::InvalidGridSize)?;
        if cells.len() != expected {
            return Err(BasinError::DimensionMismatch {
                expected,
                got: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Samples per axis.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major cells.
    pub fn cells(&self) -> &[Classification] {
        &self.cells
    }

    /// The cell at `(row, col)`, or `OutOfBounds`.
    pub fn get(&self, row: usize, col: usize) -> Result<Classification, BasinError> {
        if row >= self.size || col >= self.size {
            return Err(BasinError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(self.cells[row * self.size + col])
    }

    /// Iterates `(row, col, classification)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Classification)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (i / self.size, i % self.size, c))
    }

    /// Counts cells by outcome.
    ///
    /// `pole_count` sizes the per-pole vector; captures by a higher index
    /// than that extend it.
    pub fn tally(&self, pole_count: usize) -> Tally {
        let mut tally = Tally {
            captured: vec![0; pole_count],
            escaped: 0,
            timed_out: 0,
        };
        for &c in &self.cells {
            match c {
                Classification::Captured(i) => {
                    if i >= tally.captured.len() {
                        tally.captured.resize(i + 1, 0);
                    }
                    tally.captured[i] += 1;
                }
                Classification::Escaped => tally.escaped += 1,
                Classification::TimedOut => tally.timed_out += 1,
            }
        }
        tally
    }
}

/// Pixel counts per outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Pixels captured by each pole, indexed like the attractor list.
    pub captured: Vec<usize>,
    pub escaped: usize,
    pub timed_out: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.captured.iter().sum::<usize>() + self.escaped + self.timed_out
    }
}
