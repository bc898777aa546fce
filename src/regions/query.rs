// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Region-count queries and their domain.

use crate::error::{RegionError, Result};

/// Which branch of the region formulas a query takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// `0 <= R <= P <= M - 1`: the Stirling-number formulas apply.
    Interior,
    /// Anything else: every ranking of the M classes is realizable.
    Saturated,
}

/// An immutable (R, P, M) triple.
///
/// R is the rank parameter, P the partition size and M the number of
/// classes. For a bottleneck of dimension D the caller asks for
/// `R = P = D`, see [`RegionQuery::bottleneck`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionQuery {
    rank: usize,
    partition: usize,
    classes: usize,
}

impl RegionQuery {
    /// Validate and build a query.
    ///
    /// # Errors
    ///
    /// `InvalidQuery` if R or P is negative or M is less than one.
    pub fn new(r: i64, p: i64, m: i64) -> Result<Self> {
        let invalid = || RegionError::InvalidQuery { r, p, m };
        if r < 0 || p < 0 || m < 1 {
            return Err(invalid());
        }
        Ok(Self {
            rank: usize::try_from(r).map_err(|_| invalid())?,
            partition: usize::try_from(p).map_err(|_| invalid())?,
            classes: usize::try_from(m).map_err(|_| invalid())?,
        })
    }

    /// The query for M classes behind a D-dimensional bottleneck.
    pub fn bottleneck(dim: usize, classes: usize) -> Result<Self> {
        if classes == 0 {
            return Err(RegionError::InvalidQuery {
                r: dim as i64,
                p: dim as i64,
                m: 0,
            });
        }
        Ok(Self {
            rank: dim,
            partition: dim,
            classes,
        })
    }

    /// R
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// P
    pub fn partition(&self) -> usize {
        self.partition
    }

    /// M
    pub fn classes(&self) -> usize {
        self.classes
    }

    /// Interior iff `R <= P <= M - 1`. R and P are non-negative by
    /// construction and M is at least one.
    pub fn domain(&self) -> Domain {
        if self.rank <= self.partition && self.partition < self.classes {
            Domain::Interior
        } else {
            Domain::Saturated
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_inputs_rejected() {
        assert_eq!(
            RegionQuery::new(-1, 0, 3),
            Err(RegionError::InvalidQuery { r: -1, p: 0, m: 3 })
        );
        assert_eq!(
            RegionQuery::new(0, -2, 3),
            Err(RegionError::InvalidQuery { r: 0, p: -2, m: 3 })
        );
        assert_eq!(
            RegionQuery::new(0, 0, 0),
            Err(RegionError::InvalidQuery { r: 0, p: 0, m: 0 })
        );
        assert!(RegionQuery::bottleneck(3, 0).is_err());
    }

    #[test]
    fn test_accessors() {
        let query = RegionQuery::new(1, 2, 5).unwrap();
        assert_eq!(query.rank(), 1);
        assert_eq!(query.partition(), 2);
        assert_eq!(query.classes(), 5);
        assert_eq!(
            RegionQuery::bottleneck(4, 7).unwrap(),
            RegionQuery::new(4, 4, 7).unwrap()
        );
    }

    #[test]
    fn test_domain_boundary() {
        let domain = |r, p, m| RegionQuery::new(r, p, m).unwrap().domain();
        assert_eq!(domain(0, 0, 1), Domain::Interior);
        assert_eq!(domain(1, 1, 2), Domain::Interior);
        assert_eq!(domain(1, 3, 4), Domain::Interior);
        // P = M - 1 is the last interior partition size.
        assert_eq!(domain(3, 3, 4), Domain::Interior);
        assert_eq!(domain(4, 4, 4), Domain::Saturated);
        assert_eq!(domain(1, 1, 1), Domain::Saturated);
        // R > P
        assert_eq!(domain(3, 2, 10), Domain::Saturated);
    }
}
