// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact region counts for bottlenecked softmax layers.
//!
//! A softmax layer with M classes behind a D-dimensional linear bottleneck
//! can only realize some of the M! rankings of its classes. This crate
//! counts them exactly, using Good & Tideman's closed-form equations over
//! Stirling numbers.
//!
//! # Architecture
//!
//! ## Tier 1: Tables (Immutable)
//!
//! Built once per maximum class count and shared by reference:
//! - Unsigned Stirling numbers of the first kind
//! - Stirling numbers of the second kind
//!
//! ## Tier 2: Queries (Pure)
//!
//! - [`RegionCounter`] evaluates total, bounded and unbounded counts for an
//!   (R, P, M) triple, borrowing the tables
//! - [`RegionGrid`] drives the counter over all (M, D) pairs, optionally in
//!   parallel
//! - [`report`] renders a grid as plain text or LaTeX
//!
//! All arithmetic uses arbitrary-precision integers: `15!` already
//! overflows 64 bits.
//!
//! # Example
//!
//! ```
//! use softmax_regions::{RegionQuery, RegionTables};
//!
//! let tables = RegionTables::for_classes(4).unwrap();
//! let counter = tables.counter();
//! let query = RegionQuery::bottleneck(2, 4).unwrap();
//! assert_eq!(counter.unbounded_regions(&query).unwrap().to_string(), "12");
//! ```
//!
//! # References
//!
//! - Good, I. J. and Tideman, T. N. (1977). "Stirling numbers and a
//!   geometric structure from voting theory."
//! - <https://oeis.org/A071223>

pub mod cli;
pub mod config;
pub mod error;
pub mod grid;
pub mod regions;
pub mod report;
pub mod stirling;

// Re-export commonly used types
pub use config::GridConfig;
pub use error::{RegionError, Result};
pub use grid::{CountKind, RegionGrid};
pub use regions::{
    bounded_regions, total_regions, unbounded_regions, RegionCounter, RegionCounts, RegionQuery,
    RegionTables,
};
pub use report::{ReportFormat, ReportFormatter};
pub use stirling::{build_first_kind_table, build_second_kind_table, StirlingKind, Table};
