// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Grid evaluation settings.

use crate::error::{RegionError, Result};

/// Class counts used by the published tables.
pub const DEFAULT_CLASSES: usize = 10;

/// Bottleneck dimensions used by the published tables.
pub const DEFAULT_DIMS: usize = 10;

/// Which class counts and dimensions to evaluate, and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    /// Rows are class counts `1..=classes`.
    pub classes: usize,
    /// Columns are dimensions `1..=dims`.
    pub dims: usize,
    /// Evaluate rows on the rayon thread pool.
    pub parallel: bool,
}

impl GridConfig {
    pub fn new(classes: usize, dims: usize) -> Self {
        Self {
            classes,
            dims,
            parallel: false,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// # Errors
    ///
    /// `InvalidDimension` if the grid would have no rows or no columns.
    pub fn validate(&self) -> Result<()> {
        if self.classes == 0 || self.dims == 0 {
            return Err(RegionError::InvalidDimension {
                rows: self.classes,
                cols: self.dims,
            });
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CLASSES, DEFAULT_DIMS)
    }
}
