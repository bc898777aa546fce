// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Owned pair of Stirling tables sized for a class count.

use tracing::debug;

use super::RegionCounter;
use crate::error::{RegionError, Result};
use crate::stirling::{build_first_kind_table, build_second_kind_table, Table};

/// Unsigned first-kind and second-kind tables, built once.
///
/// Every query with at most `max_classes` classes can be answered from
/// these tables. Build a new instance to go larger; tables never grow.
#[derive(Debug, Clone)]
pub struct RegionTables {
    max_classes: usize,
    first: Table,
    second: Table,
}

impl RegionTables {
    /// Build `(max_classes + 1) × (max_classes + 1)` tables.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if `max_classes` is zero.
    pub fn for_classes(max_classes: usize) -> Result<Self> {
        if max_classes == 0 {
            return Err(RegionError::InvalidDimension { rows: 0, cols: 0 });
        }
        let size = max_classes + 1;
        let first = build_first_kind_table(size, size, false)?;
        let second = build_second_kind_table(size, size)?;
        debug!(max_classes, size, "region tables ready");
        Ok(Self {
            max_classes,
            first,
            second,
        })
    }

    pub fn max_classes(&self) -> usize {
        self.max_classes
    }

    pub fn first_kind(&self) -> &Table {
        &self.first
    }

    pub fn second_kind(&self) -> &Table {
        &self.second
    }

    /// A counter borrowing these tables.
    pub fn counter(&self) -> RegionCounter<'_> {
        RegionCounter::from_tables(&self.first, &self.second)
    }
}
