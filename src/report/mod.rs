// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rendering region grids as tables.
//!
//! Every format writes one row per class count and one column per
//! dimension, with 1-based headers.

pub mod latex;
pub mod text;

pub use latex::LatexReport;
pub use text::TextReport;

use std::fmt;

use crate::grid::RegionGrid;

/// Writes a grid in some table format.
pub trait ReportFormatter {
    fn render(&self, grid: &RegionGrid, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Render into a fresh string.
    fn render_to_string(&self, grid: &RegionGrid) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.render(grid, &mut out);
        out
    }
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportFormat {
    Text,
    Latex,
}

impl ReportFormat {
    pub fn formatter(self) -> Box<dyn ReportFormatter> {
        match self {
            ReportFormat::Text => Box::new(TextReport),
            ReportFormat::Latex => Box::new(LatexReport),
        }
    }
}
