// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Precomputed Stirling number tables.
//!
//! Both kinds are filled row by row with the recurrences given on
//! Wikipedia, indexed by (objects, parts). The region formulas read them
//! through a complementary index, see [`crate::regions`].
//!
//! Tables are immutable once built and can be shared by reference across
//! threads.

pub mod first_kind;
pub mod second_kind;
pub mod table;

pub use table::Table;

use strum_macros::Display;

/// Which Stirling recurrence filled a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum StirlingKind {
    /// Permutations of n elements with exactly k cycles.
    #[strum(serialize = "first-kind")]
    First,
    /// Partitions of n labeled elements into exactly k non-empty blocks.
    #[strum(serialize = "second-kind")]
    Second,
}

pub use first_kind::build as build_first_kind_table;
pub use second_kind::build as build_second_kind_table;
