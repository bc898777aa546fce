// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dense two-dimensional grid of exact integers.

use std::fmt;

use num_bigint::BigInt;
use num_traits::{One, Zero};

use super::StirlingKind;
use crate::error::{RegionError, Result};

/// An N×K grid of Stirling numbers, stored row-major.
///
/// Every cell starts at zero except `(0, 0)`, which is one. Cells the
/// recurrence never writes (column 0 below the first row, everything above
/// the diagonal) therefore read as zero.
///
/// One `BigInt` per cell; the largest values sit in the last row and grow
/// like `N!`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    kind: StirlingKind,
    signed: bool,
    rows: usize,
    cols: usize,
    cells: Vec<BigInt>,
}

impl Table {
    /// Allocate a zeroed table with `table[0][0] = 1`.
    pub(crate) fn seeded(
        kind: StirlingKind,
        signed: bool,
        rows: usize,
        cols: usize,
    ) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(RegionError::InvalidDimension { rows, cols });
        }
        let mut cells = vec![BigInt::zero(); rows * cols];
        cells[0] = BigInt::one();
        Ok(Self {
            kind,
            signed,
            rows,
            cols,
            cells,
        })
    }

    /// Unchecked read used by the recurrences, whose loop bounds keep
    /// every index in range.
    #[inline]
    pub(crate) fn at(&self, n: usize, k: usize) -> &BigInt {
        &self.cells[n * self.cols + k]
    }

    #[inline]
    pub(crate) fn set(&mut self, n: usize, k: usize, value: BigInt) {
        self.cells[n * self.cols + k] = value;
    }

    pub fn kind(&self) -> StirlingKind {
        self.kind
    }

    /// True if the table holds signed first-kind coefficients.
    pub fn is_signed(&self) -> bool {
        self.signed
    }

    /// Number of rows (N).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (K).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Bounds-checked read. Returns `None` outside the table.
    pub fn get(&self, n: usize, k: usize) -> Option<&BigInt> {
        if n < self.rows && k < self.cols {
            Some(self.at(n, k))
        } else {
            None
        }
    }

    /// Bounds-checked read that reports the failing index.
    pub fn lookup(&self, n: usize, k: usize) -> Result<&BigInt> {
        self.get(n, k).ok_or(RegionError::InsufficientTableSize {
            row: n,
            col: k,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// One full row, or `None` past the last row.
    pub fn row(&self, n: usize) -> Option<&[BigInt]> {
        if n < self.rows {
            Some(&self.cells[n * self.cols..(n + 1) * self.cols])
        } else {
            None
        }
    }

    /// Fail unless the table has at least `rows` rows and `cols` columns.
    pub fn ensure_covers(&self, rows: usize, cols: usize) -> Result<()> {
        if rows > self.rows || cols > self.cols {
            return Err(RegionError::InsufficientTableSize {
                row: rows.saturating_sub(1),
                col: cols.saturating_sub(1),
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .map(|cell| cell.to_string().len())
            .max()
            .unwrap_or(1);
        for n in 0..self.rows {
            for k in 0..self.cols {
                if k > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", self.at(n, k).to_string(), width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
