// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counts how grid cells were evaluated. Each worker keeps its own
//! statistics and they are merged once the grid is complete.

use std::fmt;

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

use crate::regions::Domain;

#[derive(EnumCountMacro, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Cells answered by the Stirling-number formulas.
    InteriorCells,
    /// Cells answered by `M!` / zero.
    SaturatedCells,
}

impl From<Domain> for Counters {
    fn from(domain: Domain) -> Self {
        match domain {
            Domain::Interior => Counters::InteriorCells,
            Domain::Saturated => Counters::SaturatedCells,
        }
    }
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GridStatistics {
    stats: [u64; COUNT],
}

impl GridStatistics {
    pub fn new() -> Self {
        GridStatistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Number of cells evaluated.
    pub fn cells(&self) -> u64 {
        self.stats.iter().sum()
    }

    /// Add another worker's counts into this one.
    pub fn merge(&mut self, other: &GridStatistics) {
        for (mine, theirs) in self.stats.iter_mut().zip(other.stats.iter()) {
            *mine += theirs;
        }
    }
}

impl fmt::Display for GridStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} cells ({} interior, {} saturated)",
            self.cells(),
            self.get(Counters::InteriorCells),
            self.get(Counters::SaturatedCells)
        )
    }
}
