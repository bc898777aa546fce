// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `regions` binary: print region-count tables.

use anyhow::Result;
use clap::Parser;

use softmax_regions::cli::{run, Cli};

fn main() -> Result<()> {
    // Logs go to stderr; the tables go to stdout.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("softmax_regions=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)
}
