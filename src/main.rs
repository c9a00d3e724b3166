//! CLI entry point for checking and rendering the palette tables

use clap::Parser;
use palettemath::io::cli::{Cli, Runner};
use palettemath::io::logging::init_logging;

fn main() -> palettemath::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet)?;
    Runner::new(cli).run()
}
