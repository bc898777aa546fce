// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use num_bigint::BigInt;
use softmax_regions::{build_first_kind_table, build_second_kind_table, Table};

/// Unbounded regions `N(D,D,M) - B(D,D,M)` for M = 1..=10 (rows) and
/// D = 1..=10 (columns), as listed in OEIS A071223.
pub const A071223: [[u64; 10]; 10] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [2, 2, 2, 2, 2, 2, 2, 2, 2, 2],
    [2, 6, 6, 6, 6, 6, 6, 6, 6, 6],
    [2, 12, 24, 24, 24, 24, 24, 24, 24, 24],
    [2, 20, 72, 120, 120, 120, 120, 120, 120, 120],
    [2, 30, 172, 480, 720, 720, 720, 720, 720, 720],
    [2, 42, 352, 1512, 3600, 5040, 5040, 5040, 5040, 5040],
    [2, 56, 646, 3976, 14184, 30240, 40320, 40320, 40320, 40320],
    [2, 72, 1094, 9144, 45992, 143712, 282240, 362880, 362880, 362880],
    [2, 90, 1742, 18990, 128288, 557640, 1575648, 2903040, 3628800, 3628800],
];

/// Total regions `N(D,D,M)`, same layout.
pub const TOTAL_REGIONS: [[u64; 10]; 10] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [2, 2, 2, 2, 2, 2, 2, 2, 2, 2],
    [4, 6, 6, 6, 6, 6, 6, 6, 6, 6],
    [7, 18, 24, 24, 24, 24, 24, 24, 24, 24],
    [11, 46, 96, 120, 120, 120, 120, 120, 120, 120],
    [16, 101, 326, 600, 720, 720, 720, 720, 720, 720],
    [22, 197, 932, 2556, 4320, 5040, 5040, 5040, 5040, 5040],
    [29, 351, 2311, 9080, 22212, 35280, 40320, 40320, 40320, 40320],
    [37, 583, 5119, 27568, 94852, 212976, 322560, 362880, 362880, 362880],
    [46, 916, 10366, 73639, 342964, 1066644, 2239344, 3265920, 3628800, 3628800],
];

/// Unsigned first-kind and second-kind tables of the given square size.
pub fn square_tables(size: usize) -> (Table, Table) {
    (
        build_first_kind_table(size, size, false).unwrap(),
        build_second_kind_table(size, size).unwrap(),
    )
}

pub fn big(value: u64) -> BigInt {
    BigInt::from(value)
}
