// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Plain, right-aligned text table.

use std::fmt;

use super::ReportFormatter;
use crate::grid::RegionGrid;

const CORNER: &str = "M\\D";

/// Plain text with a `M\D` corner, dimension headers across the top and
/// class counts down the left.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReport;

impl ReportFormatter for TextReport {
    fn render(&self, grid: &RegionGrid, out: &mut dyn fmt::Write) -> fmt::Result {
        let cells: Vec<Vec<String>> = grid
            .rows()
            .map(|(_, row)| row.iter().map(|v| v.to_string()).collect())
            .collect();

        let label_width = CORNER.len().max(grid.classes().to_string().len());
        let width = cells
            .iter()
            .flatten()
            .map(String::len)
            .chain(std::iter::once(grid.dims().to_string().len()))
            .max()
            .unwrap_or(1);

        write!(out, "{:>label_width$}", CORNER)?;
        for dim in 1..=grid.dims() {
            write!(out, " {:>width$}", dim)?;
        }
        writeln!(out)?;

        for (i, row) in cells.iter().enumerate() {
            write!(out, "{:>label_width$}", i + 1)?;
            for cell in row {
                write!(out, " {:>width$}", cell)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use crate::grid::CountKind;
    use crate::regions::RegionTables;

    #[test]
    fn test_small_grid() {
        let tables = RegionTables::for_classes(3).unwrap();
        let grid =
            RegionGrid::evaluate(&tables, &GridConfig::new(3, 2), CountKind::Unbounded).unwrap();
        assert_eq!(
            TextReport.render_to_string(&grid),
            "M\\D 1 2\n  1 1 1\n  2 2 2\n  3 2 6\n"
        );
    }

    #[test]
    fn test_columns_widen_for_large_values() {
        let tables = RegionTables::for_classes(5).unwrap();
        let grid = RegionGrid::evaluate(&tables, &GridConfig::new(5, 1), CountKind::Total).unwrap();
        // Column D=1 is 1, 2, 4, 7, 11.
        assert_eq!(
            TextReport.render_to_string(&grid),
            "M\\D  1\n  1  1\n  2  2\n  3  4\n  4  7\n  5 11\n"
        );
    }
}
