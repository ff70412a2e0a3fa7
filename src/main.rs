//! CLI entry point for unique-solution jigsaw generation

use clap::Parser;
use uniquetile::io::cli::{BatchProcessor, Cli};

fn main() -> uniquetile::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut processor = BatchProcessor::new(cli);
    processor.process()
}
