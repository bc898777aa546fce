// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Stirling numbers of the first kind.
//!
//! `c(n, k)` counts the permutations of n elements with exactly k cycles.
//! They are the coefficients of the rising factorial
//! `x(x+1)(x+2)...(x+n-1)`; the signed variant gives the coefficients of
//! the falling factorial `x(x-1)(x-2)...(x-n+1)`.
//!
//! ```text
//!        k=0  k=1  k=2  k=3  k=4
//!   n=0    1    0    0    0    0
//!   n=1    0    1    0    0    0
//!   n=2    0    1    1    0    0
//!   n=3    0    2    3    1    0
//!   n=4    0    6   11    6    1
//! ```
//!
//! See <https://en.wikipedia.org/wiki/Stirling_numbers_of_the_first_kind>.

use num_bigint::BigInt;
use tracing::debug;

use super::{StirlingKind, Table};
use crate::error::Result;

/// Build an `rows × cols` table of first-kind Stirling numbers.
///
/// # Algorithm
///
/// Start from a zeroed grid with `table[0][0] = 1`, then for each row n
/// and each column k ≥ 1:
///
/// ```text
/// unsigned: table[n+1][k] =  n * table[n][k] + table[n][k-1]
/// signed:   table[n+1][k] = -n * table[n][k] + table[n][k-1]
/// ```
///
/// Column 0 is never written, so `table[n][0] == 0` for every n > 0, and
/// cells above the diagonal stay zero.
///
/// # Errors
///
/// `InvalidDimension` if either size is zero.
pub fn build(rows: usize, cols: usize, signed: bool) -> Result<Table> {
    let mut table = Table::seeded(StirlingKind::First, signed, rows, cols)?;

    for n in 0..rows - 1 {
        let coefficient = if signed {
            -BigInt::from(n)
        } else {
            BigInt::from(n)
        };
        for k in 1..cols {
            let next = &coefficient * table.at(n, k) + table.at(n, k - 1);
            table.set(n + 1, k, next);
        }
    }

    debug!(rows, cols, signed, "built first-kind Stirling table");
    Ok(table)
}
