// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Region counts for M hyperplanes through the origin.
//!
//! I.J. Good and T.N. Tideman count the regions cut out by the pairwise
//! difference hyperplanes of M weight vectors in terms of a rank
//! parameter R and a partition size P. For a D-dimensional bottleneck the
//! counts of interest are at `R = P = D`:
//!
//! - `N(D, D, M)`: regions of a softmax layer with a bias term,
//! - `N(D, D, M) - B(D, D, M)`: regions without a bias term, which are
//!   the unbounded ones (OEIS A071223).
//!
//! Once `D >= M - 1` all `M!` rankings of the classes are realizable.
//!
//! # References
//!
//! - Good, I. J. and Tideman, T. N. (1977). "Stirling numbers and a
//!   geometric structure from voting theory." Journal of Combinatorial
//!   Theory, Series A 23(1).
//! - Smith, W. D. "Wilson order" write-up, <https://rangevoting.org/WilsonOrder.html>.
//! - <https://oeis.org/A071223>

pub mod counter;
pub mod query;
pub mod tables;

pub use counter::{factorial, RegionCounter, RegionCounts};
pub use query::{Domain, RegionQuery};
pub use tables::RegionTables;

use num_bigint::BigInt;

use crate::error::Result;
use crate::stirling::Table;

/// `N(r, p, m)` against caller-built tables.
pub fn total_regions(r: i64, p: i64, m: i64, first: &Table, second: &Table) -> Result<BigInt> {
    let query = RegionQuery::new(r, p, m)?;
    RegionCounter::new(first, second)?.total_regions(&query)
}

/// `B(r, p, m)` against caller-built tables.
pub fn bounded_regions(r: i64, p: i64, m: i64, first: &Table, second: &Table) -> Result<BigInt> {
    let query = RegionQuery::new(r, p, m)?;
    RegionCounter::new(first, second)?.bounded_regions(&query)
}

/// `N(r, p, m) - B(r, p, m)` against caller-built tables.
pub fn unbounded_regions(
    r: i64,
    p: i64,
    m: i64,
    first: &Table,
    second: &Table,
) -> Result<BigInt> {
    let query = RegionQuery::new(r, p, m)?;
    RegionCounter::new(first, second)?.unbounded_regions(&query)
}
