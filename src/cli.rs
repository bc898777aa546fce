// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line interface for the `regions` binary.

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use crate::config::{GridConfig, DEFAULT_CLASSES, DEFAULT_DIMS};
use crate::grid::{CountKind, RegionGrid};
use crate::regions::RegionTables;
use crate::report::ReportFormat;

/// Print region counts for bottlenecked softmax layers.
#[derive(Parser, Debug)]
#[command(name = "regions")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Largest number of classes (one table row per class count)
    #[arg(short = 'm', long = "classes", default_value_t = DEFAULT_CLASSES)]
    pub classes: usize,

    /// Largest bottleneck dimension (one table column per dimension)
    #[arg(short = 'd', long = "dims", default_value_t = DEFAULT_DIMS)]
    pub dims: usize,

    /// Which counts to print
    #[arg(short = 'k', long = "kind", value_enum, default_value_t = KindArg::All)]
    pub kind: KindArg,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t = FormatArg::Latex)]
    pub format: FormatArg,

    /// Evaluate table rows in parallel
    #[arg(long = "parallel")]
    pub parallel: bool,

    /// Log how many cells fell in each domain
    #[arg(long = "stats")]
    pub stats: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Total,
    Bounded,
    Unbounded,
    /// Unbounded (no bias) then total (with bias)
    All,
}

impl KindArg {
    pub fn kinds(self) -> Vec<CountKind> {
        match self {
            KindArg::Total => vec![CountKind::Total],
            KindArg::Bounded => vec![CountKind::Bounded],
            KindArg::Unbounded => vec![CountKind::Unbounded],
            KindArg::All => vec![CountKind::Unbounded, CountKind::Total],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Latex,
}

impl From<FormatArg> for ReportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Latex => ReportFormat::Latex,
        }
    }
}

impl Cli {
    pub fn grid_config(&self) -> GridConfig {
        GridConfig::new(self.classes, self.dims).with_parallel(self.parallel)
    }
}

/// Build the tables once, then evaluate and print each requested grid.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let config = cli.grid_config();
    config.validate().context("Invalid grid size")?;

    let tables = RegionTables::for_classes(config.classes)
        .context("Failed to build Stirling tables")?;
    let formatter = ReportFormat::from(cli.format).formatter();

    for (i, kind) in cli.kind.kinds().into_iter().enumerate() {
        let grid = RegionGrid::evaluate(&tables, &config, kind)
            .with_context(|| format!("Failed to evaluate {} grid", kind))?;
        if cli.stats {
            info!(%kind, "{}", grid.statistics());
        }
        if i > 0 {
            writeln!(out)?;
        }
        write!(out, "{}", formatter.render_to_string(&grid))?;
    }
    out.flush()?;
    Ok(())
}
