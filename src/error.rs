// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for table construction and region counting.
//!
//! Every failure is detected before any arithmetic runs and is returned to
//! the caller unchanged.

use thiserror::Error;

use crate::stirling::StirlingKind;

/// Errors that can occur while building tables or evaluating queries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegionError {
    /// A table was requested with zero rows or zero columns.
    #[error("Invalid table dimension {rows} x {cols} (both must be at least 1)")]
    InvalidDimension { rows: usize, cols: usize },

    /// A formula lookup falls outside the table that was built.
    #[error("Lookup ({row}, {col}) exceeds table of size {rows} x {cols}")]
    InsufficientTableSize {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Negative rank or partition size, or fewer than one class.
    #[error("Invalid query R={r}, P={p}, M={m} (need R >= 0, P >= 0, M >= 1)")]
    InvalidQuery { r: i64, p: i64, m: i64 },

    /// The region formulas need the unsigned first-kind coefficients.
    #[error("First-kind table is signed; region counting needs unsigned coefficients")]
    SignedFirstKindTable,

    /// A table of the wrong kind was passed where another was expected.
    #[error("Expected a {expected} table, got a {found} table")]
    WrongTableKind {
        expected: StirlingKind,
        found: StirlingKind,
    },
}

pub type Result<T> = std::result::Result<T, RegionError>;
