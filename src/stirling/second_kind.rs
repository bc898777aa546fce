// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Stirling numbers of the second kind.
//!
//! `S(n, k)` counts the ways to partition n labeled objects into exactly k
//! non-empty, unlabeled blocks.
//!
//! See <https://en.wikipedia.org/wiki/Stirling_numbers_of_the_second_kind>.

use num_bigint::BigInt;
use tracing::debug;

use super::{StirlingKind, Table};
use crate::error::Result;

/// Build an `rows × cols` table of second-kind Stirling numbers.
///
/// Same seeding as the first kind; the recurrence multiplies by the column
/// rather than the row:
///
/// ```text
/// table[n+1][k] = k * table[n][k] + table[n][k-1]
/// ```
///
/// # Errors
///
/// `InvalidDimension` if either size is zero.
pub fn build(rows: usize, cols: usize) -> Result<Table> {
    let mut table = Table::seeded(StirlingKind::Second, false, rows, cols)?;

    for n in 0..rows - 1 {
        for k in 1..cols {
            let next = BigInt::from(k) * table.at(n, k) + table.at(n, k - 1);
            table.set(n + 1, k, next);
        }
    }

    debug!(rows, cols, "built second-kind Stirling table");
    Ok(table)
}
