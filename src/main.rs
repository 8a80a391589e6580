//! CLI entry point for the Celtic knot generator

use clap::Parser;
use knotweave::io::cli::{Cli, KnotRunner};

fn main() -> knotweave::Result<()> {
    let cli = Cli::parse();
    let runner = KnotRunner::new(cli);
    runner.run()
}
