// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dense grids of region counts.
//!
//! A grid has one row per class count `M = 1..=classes` and one column per
//! bottleneck dimension `D = 1..=dims`. Each cell is the chosen count at
//! `R = P = D`.
//!
//! Rows are independent and only read the shared tables, so they can be
//! evaluated on the rayon pool without any locking.

pub mod statistics;

pub use statistics::{Counters, GridStatistics};

use std::fmt;

use num_bigint::BigInt;
use rayon::prelude::*;
use tracing::debug;

use crate::config::GridConfig;
use crate::error::Result;
use crate::regions::{RegionCounter, RegionQuery, RegionTables};

/// Which count a grid holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountKind {
    /// `N(D, D, M)`: softmax layer with a bias term.
    Total,
    /// `B(D, D, M)`.
    Bounded,
    /// `N - B`: softmax layer without a bias term.
    Unbounded,
}

impl fmt::Display for CountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CountKind::Total => "total",
            CountKind::Bounded => "bounded",
            CountKind::Unbounded => "unbounded",
        };
        f.write_str(name)
    }
}

/// A `classes × dims` grid of one kind of count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionGrid {
    kind: CountKind,
    classes: usize,
    dims: usize,
    cells: Vec<BigInt>,
    statistics: GridStatistics,
}

impl RegionGrid {
    /// Evaluate every (M, D) cell of `config` against `tables`.
    ///
    /// # Errors
    ///
    /// - `InvalidDimension` if the config describes an empty grid.
    /// - `InsufficientTableSize` if `tables` were built for fewer classes
    ///   than `config.classes`.
    pub fn evaluate(tables: &RegionTables, config: &GridConfig, kind: CountKind) -> Result<Self> {
        config.validate()?;
        let counter = tables.counter();
        let dims = config.dims;

        debug!(
            classes = config.classes,
            dims,
            %kind,
            parallel = config.parallel,
            "evaluating region grid"
        );

        let rows: Vec<(Vec<BigInt>, GridStatistics)> = if config.parallel {
            (1..=config.classes)
                .into_par_iter()
                .map(|classes| evaluate_row(&counter, classes, dims, kind))
                .collect::<Result<_>>()?
        } else {
            (1..=config.classes)
                .map(|classes| evaluate_row(&counter, classes, dims, kind))
                .collect::<Result<_>>()?
        };

        let mut cells = Vec::with_capacity(config.classes * dims);
        let mut statistics = GridStatistics::new();
        for (row, row_statistics) in rows {
            cells.extend(row);
            statistics.merge(&row_statistics);
        }

        debug!(%kind, "region grid complete: {}", statistics);

        Ok(Self {
            kind,
            classes: config.classes,
            dims,
            cells,
            statistics,
        })
    }

    pub fn kind(&self) -> CountKind {
        self.kind
    }

    /// Number of rows; class counts run `1..=classes()`.
    pub fn classes(&self) -> usize {
        self.classes
    }

    /// Number of columns; dimensions run `1..=dims()`.
    pub fn dims(&self) -> usize {
        self.dims
    }

    pub fn statistics(&self) -> &GridStatistics {
        &self.statistics
    }

    /// The cell for `classes` classes at dimension `dim`, both 1-based.
    pub fn get(&self, classes: usize, dim: usize) -> Option<&BigInt> {
        self.row(classes)?.get(dim.checked_sub(1)?)
    }

    /// The row for `classes` classes (1-based).
    pub fn row(&self, classes: usize) -> Option<&[BigInt]> {
        if classes == 0 || classes > self.classes {
            return None;
        }
        let start = (classes - 1) * self.dims;
        Some(&self.cells[start..start + self.dims])
    }

    /// `(class count, row)` pairs in order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &[BigInt])> + '_ {
        self.cells
            .chunks(self.dims)
            .enumerate()
            .map(|(i, row)| (i + 1, row))
    }
}

fn evaluate_row(
    counter: &RegionCounter<'_>,
    classes: usize,
    dims: usize,
    kind: CountKind,
) -> Result<(Vec<BigInt>, GridStatistics)> {
    let mut statistics = GridStatistics::new();
    let mut row = Vec::with_capacity(dims);
    for dim in 1..=dims {
        let query = RegionQuery::bottleneck(dim, classes)?;
        statistics.increment_counter(query.domain().into());
        let value = match kind {
            CountKind::Total => counter.total_regions(&query)?,
            CountKind::Bounded => counter.bounded_regions(&query)?,
            CountKind::Unbounded => counter.unbounded_regions(&query)?,
        };
        row.push(value);
    }
    Ok((row, statistics))
}
