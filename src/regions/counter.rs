// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Good & Tideman's region-counting equations.

use num_bigint::BigInt;
use num_traits::{One, Zero};
use tracing::trace;

use super::query::{Domain, RegionQuery};
use crate::error::{RegionError, Result};
use crate::stirling::{StirlingKind, Table};

/// All three counts for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionCounts {
    pub total: BigInt,
    pub bounded: BigInt,
    pub unbounded: BigInt,
}

/// Evaluates N(R, P, M) and B(R, P, M) against borrowed Stirling tables.
///
/// The counter holds no state of its own. It is `Copy`, and it can be
/// shared between threads as long as the tables outlive it.
#[derive(Debug, Clone, Copy)]
pub struct RegionCounter<'a> {
    /// Unsigned first-kind table, read through [`RegionCounter::cycles`].
    first: &'a Table,
    /// Second-kind table, read through [`RegionCounter::parcels`].
    second: &'a Table,
}

impl<'a> RegionCounter<'a> {
    /// Wrap a first-kind and a second-kind table.
    ///
    /// # Errors
    ///
    /// - `WrongTableKind` if the tables are not first-kind and second-kind,
    ///   in that order.
    /// - `SignedFirstKindTable` if the first-kind table is signed.
    pub fn new(first: &'a Table, second: &'a Table) -> Result<Self> {
        if first.kind() != StirlingKind::First {
            return Err(RegionError::WrongTableKind {
                expected: StirlingKind::First,
                found: first.kind(),
            });
        }
        if second.kind() != StirlingKind::Second {
            return Err(RegionError::WrongTableKind {
                expected: StirlingKind::Second,
                found: second.kind(),
            });
        }
        if first.is_signed() {
            return Err(RegionError::SignedFirstKindTable);
        }
        Ok(Self::from_tables(first, second))
    }

    /// Caller guarantees the kinds; used by [`super::RegionTables`].
    pub(crate) fn from_tables(first: &'a Table, second: &'a Table) -> Self {
        Self { first, second }
    }

    /// Total number of regions, Good & Tideman equation (1).
    ///
    /// ```text
    /// N(R, P, M) = T(M, P-R) * sum_{v=0..R} S(M-P+R, v)   if 0 <= R <= P <= M-1
    ///            = M!                                      otherwise
    /// ```
    pub fn total_regions(&self, query: &RegionQuery) -> Result<BigInt> {
        self.ensure_covers(query)?;
        match query.domain() {
            Domain::Interior => {
                let (r, p, m) = (query.rank(), query.partition(), query.classes());
                let shifted = m - p + r;
                let mut sum = BigInt::zero();
                for nu in 0..=r {
                    sum += self.cycles(shifted, nu)?;
                }
                Ok(self.parcels(m, p - r)? * sum)
            }
            Domain::Saturated => Ok(factorial(query.classes())),
        }
    }

    /// Number of bounded regions, Good & Tideman equation (2).
    ///
    /// ```text
    /// B(R, P, M) = T(M, P-R) * sum_{v=0..R} (-1)^(P-v) S(M-P+R, v)   if 0 <= R <= P <= M-1
    ///            = 0                                                otherwise
    /// ```
    ///
    /// The result is negative for some R < P; it is reported as computed.
    pub fn bounded_regions(&self, query: &RegionQuery) -> Result<BigInt> {
        self.ensure_covers(query)?;
        match query.domain() {
            Domain::Interior => {
                let (r, p, m) = (query.rank(), query.partition(), query.classes());
                let shifted = m - p + r;
                let mut sum = BigInt::zero();
                for nu in 0..=r {
                    let term = self.cycles(shifted, nu)?;
                    // (-1)^(P-v) by parity
                    if (p - nu) % 2 == 0 {
                        sum += term;
                    } else {
                        sum -= term;
                    }
                }
                Ok(self.parcels(m, p - r)? * sum)
            }
            Domain::Saturated => Ok(BigInt::zero()),
        }
    }

    /// `total_regions - bounded_regions`.
    pub fn unbounded_regions(&self, query: &RegionQuery) -> Result<BigInt> {
        Ok(self.total_regions(query)? - self.bounded_regions(query)?)
    }

    /// Total, bounded and unbounded counts in one call.
    pub fn regions(&self, query: &RegionQuery) -> Result<RegionCounts> {
        let total = self.total_regions(query)?;
        let bounded = self.bounded_regions(query)?;
        let unbounded = &total - &bounded;
        trace!(
            r = query.rank(),
            p = query.partition(),
            m = query.classes(),
            %total,
            %bounded,
            "evaluated region counts"
        );
        Ok(RegionCounts {
            total,
            bounded,
            unbounded,
        })
    }

    /// Every lookup for M classes lands in rows and columns `0..=M`.
    fn ensure_covers(&self, query: &RegionQuery) -> Result<()> {
        let needed = query.classes() + 1;
        self.first.ensure_covers(needed, needed)?;
        self.second.ensure_covers(needed, needed)
    }

    /// `T(m, n)`, Good & Tideman equation (6): m objects into m - n
    /// indistinguishable parcels.
    ///
    /// Reads `second[m][m - n]`.
    fn parcels(&self, m: usize, n: usize) -> Result<&'a BigInt> {
        debug_assert!(n <= m);
        self.second.lookup(m, m - n)
    }

    /// `S(m, n)`, Good & Tideman equation (5).
    ///
    /// Good & Tideman take `S(m, n)` as the coefficient of `x^n` in
    /// `(1+x)(1+2x)...(1+(m-1)x)`, which lists the Wikipedia coefficients
    /// of `x(x+1)...(x+m-1)` in reverse order:
    ///
    /// ```text
    ///   Wikipedia, table[m][k]         Good & Tideman, S(m, n)
    ///        k=0  1   2  3  4               n=0  1   2  3  4
    ///   m=3    0  2   3  1  0          m=3    1  3   2  0  0
    ///   m=4    0  6  11  6  1          m=4    1  6  11  6  0
    /// ```
    ///
    /// Hence `S(m, n)` reads `first[m][m - n]`, not `first[m][n]`.
    fn cycles(&self, m: usize, n: usize) -> Result<&'a BigInt> {
        debug_assert!(n <= m);
        self.first.lookup(m, m - n)
    }
}

/// `m!`, exactly.
pub fn factorial(m: usize) -> BigInt {
    (2..=m).fold(BigInt::one(), |acc, k| acc * BigInt::from(k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stirling::{build_first_kind_table, build_second_kind_table};

    fn tables(size: usize) -> (Table, Table) {
        (
            build_first_kind_table(size, size, false).unwrap(),
            build_second_kind_table(size, size).unwrap(),
        )
    }

    fn query(r: i64, p: i64, m: i64) -> RegionQuery {
        RegionQuery::new(r, p, m).unwrap()
    }

    #[test]
    fn test_one_line_two_classes() {
        // T(2,0) = 1, S(2,0) = S(2,1) = 1: N = 2, B = -1 + 1 = 0.
        let (first, second) = tables(3);
        let counter = RegionCounter::new(&first, &second).unwrap();
        let q = query(1, 1, 2);
        assert_eq!(counter.total_regions(&q).unwrap(), BigInt::from(2));
        assert_eq!(counter.bounded_regions(&q).unwrap(), BigInt::zero());
        assert_eq!(counter.unbounded_regions(&q).unwrap(), BigInt::from(2));
    }

    #[test]
    fn test_interior_values() {
        let (first, second) = tables(11);
        let counter = RegionCounter::new(&first, &second).unwrap();
        let cases: [(i64, i64, i64, i64, i64); 6] = [
            // (R, P, M, N, B)
            (0, 0, 1, 1, 1),
            (1, 1, 3, 4, 2),
            (2, 2, 4, 18, 6),
            (0, 2, 5, 25, 25),
            (3, 5, 7, 13440, 3360),
            (1, 2, 4, 24, -12),
        ];
        for (r, p, m, total, bounded) in cases {
            let q = query(r, p, m);
            assert_eq!(q.domain(), Domain::Interior);
            assert_eq!(
                counter.total_regions(&q).unwrap(),
                BigInt::from(total),
                "N({}, {}, {})",
                r,
                p,
                m
            );
            assert_eq!(
                counter.bounded_regions(&q).unwrap(),
                BigInt::from(bounded),
                "B({}, {}, {})",
                r,
                p,
                m
            );
        }
    }

    #[test]
    fn test_saturated_domain_is_factorial() {
        let (first, second) = tables(11);
        let counter = RegionCounter::new(&first, &second).unwrap();
        for (r, p, m) in [(1, 1, 1), (5, 5, 5), (9, 9, 6), (4, 3, 10), (2, 0, 3)] {
            let q = query(r, p, m);
            assert_eq!(q.domain(), Domain::Saturated);
            assert_eq!(counter.total_regions(&q).unwrap(), factorial(m as usize));
            assert!(counter.bounded_regions(&q).unwrap().is_zero());
        }
    }

    #[test]
    fn test_counts_are_consistent() {
        let (first, second) = tables(9);
        let counter = RegionCounter::new(&first, &second).unwrap();
        for m in 1..=8 {
            for p in 0..=9 {
                for r in 0..=9 {
                    let q = query(r, p, m);
                    let counts = counter.regions(&q).unwrap();
                    assert_eq!(counts.total, &counts.bounded + &counts.unbounded);
                    assert_eq!(counts.total, counter.total_regions(&q).unwrap());
                    assert_eq!(counts.bounded, counter.bounded_regions(&q).unwrap());
                }
            }
        }
    }

    #[test]
    fn test_repeated_calls_agree() {
        let (first, second) = tables(8);
        let counter = RegionCounter::new(&first, &second).unwrap();
        let q = query(3, 4, 7);
        let once = counter.total_regions(&q).unwrap();
        let twice = counter.total_regions(&q).unwrap();
        assert_eq!(once, twice);
        assert_eq!(first, build_first_kind_table(8, 8, false).unwrap());
    }

    #[test]
    fn test_undersized_tables_fail_in_both_domains() {
        let (first, second) = tables(4);
        let counter = RegionCounter::new(&first, &second).unwrap();
        // M = 4 needs 5 rows.
        let interior = query(1, 1, 4);
        let saturated = query(6, 6, 4);
        for q in [interior, saturated] {
            assert!(matches!(
                counter.total_regions(&q),
                Err(RegionError::InsufficientTableSize { rows: 4, cols: 4, .. })
            ));
            assert!(matches!(
                counter.bounded_regions(&q),
                Err(RegionError::InsufficientTableSize { .. })
            ));
        }
        assert!(counter.total_regions(&query(1, 1, 3)).is_ok());
    }

    #[test]
    fn test_table_validation() {
        let (first, second) = tables(4);
        let signed = build_first_kind_table(4, 4, true).unwrap();
        assert_eq!(
            RegionCounter::new(&signed, &second).unwrap_err(),
            RegionError::SignedFirstKindTable
        );
        assert_eq!(
            RegionCounter::new(&second, &first).unwrap_err(),
            RegionError::WrongTableKind {
                expected: StirlingKind::First,
                found: StirlingKind::Second,
            }
        );
        assert_eq!(
            RegionCounter::new(&first, &first).unwrap_err(),
            RegionError::WrongTableKind {
                expected: StirlingKind::Second,
                found: StirlingKind::First,
            }
        );
    }

    #[test]
    fn test_factorial_is_exact() {
        assert_eq!(factorial(0), BigInt::one());
        assert_eq!(factorial(1), BigInt::one());
        assert_eq!(factorial(5), BigInt::from(120));
        assert_eq!(
            factorial(25).to_string(),
            "15511210043330985984000000"
        );
    }
}
