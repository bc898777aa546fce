// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! LaTeX `tabular` layout used in the paper.
//!
//! Needs `booktabs`, `multirow` and `graphicx` in the preamble.

use std::fmt;

use super::ReportFormatter;
use crate::grid::{CountKind, RegionGrid};

const FEASIBLE: &str = "When $d \\geq |C| - 1$ all permutations corresponding to ways of ranking $|C|$ classes are feasible.";

/// A `table` float with dimension headers, a rotated class-count label
/// and a caption chosen by the grid's [`CountKind`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LatexReport;

impl LatexReport {
    fn caption(kind: CountKind) -> String {
        match kind {
            CountKind::Unbounded => format!(
                "Number of permutation regions defined by a bottlenecked softmax layer with no bias term. {}",
                FEASIBLE
            ),
            CountKind::Total => format!(
                "Number of permutation regions defined by a bottlenecked softmax layer including a bias term. {}",
                FEASIBLE
            ),
            CountKind::Bounded => "Number of bounded permutation regions defined by a bottlenecked softmax layer including a bias term. No region is bounded when $d \\geq |C| - 1$.".to_string(),
        }
    }

    fn label(kind: CountKind) -> &'static str {
        match kind {
            CountKind::Unbounded => "tab:numregions-nobias",
            CountKind::Total => "tab:numregions-bias",
            CountKind::Bounded => "tab:numregions-bounded",
        }
    }
}

impl ReportFormatter for LatexReport {
    fn render(&self, grid: &RegionGrid, out: &mut dyn fmt::Write) -> fmt::Result {
        let dims = grid.dims();
        let header: Vec<String> = (1..=dims).map(|d| d.to_string()).collect();

        writeln!(out, "\\begin{{table}}[h!]")?;
        writeln!(out, "\\scalebox{{0.66}}{{")?;
        writeln!(out, "\\begin{{tabular}}{{cl| {} }}", "l".repeat(dims))?;
        writeln!(out, "\\toprule")?;
        writeln!(out, "\\multicolumn{{2}}{{c}}{{}} % remove vertical lines in this cell")?;
        writeln!(
            out,
            "        & \\multicolumn{{ {} }}{{c}}{{\\textsc{{Bottleneck dimensionality $d$}}}}  \\\\",
            dims
        )?;
        writeln!(out, "\\multicolumn{{2}}{{c}}{{}} % remove vertical lines in this cell")?;
        writeln!(out, " & {} \\\\", header.join(" & "))?;
        writeln!(out, "\\midrule")?;
        writeln!(
            out,
            "\\multirow{{ {} }}{{*}}{{\\rotatebox[origin=c]{{90}}{{\\textsc{{Number classes $|C|$}}}}}}",
            grid.classes() + 1
        )?;

        for (classes, row) in grid.rows() {
            let values: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(out, "\t& {} & {}\\\\", classes, values.join(" & "))?;
        }

        writeln!(out, "\\bottomrule")?;
        writeln!(out, "\\end{{tabular}}")?;
        writeln!(out, "}}")?;
        writeln!(out, "\\caption{{{}}}", Self::caption(grid.kind()))?;
        writeln!(out, "\\label{{{}}}", Self::label(grid.kind()))?;
        writeln!(out, "\\end{{table}}")
    }
}
