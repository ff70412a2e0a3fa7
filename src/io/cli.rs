//! Command-line interface for batch puzzle generation

use crate::algorithm::executor::{Generation, GeneratorConfig, PuzzleGenerator};
use crate::algorithm::selection::RandomSelector;
use crate::io::configuration::{
    DEFAULT_COUNT, DEFAULT_EVALUATION_BASE, DEFAULT_SEED, DEFAULT_SIZE, OUTPUT_PREFIX,
};
use crate::io::error::{AlgorithmError, Result};
use crate::io::image::export_layout_as_png;
use crate::io::progress::ProgressManager;
use crate::io::render::render_generation;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "uniquetile")]
#[command(
    author,
    version,
    about = "Generate jigsaw dissections of a square grid with exactly one solution"
)]
/// Command-line arguments for the puzzle generation tool
pub struct Cli {
    /// Grid edge length (6, 7 or 8)
    #[arg(short = 'n', long, default_value_t = DEFAULT_SIZE)]
    pub size: usize,

    /// Random seed for reproducible generation; puzzle k of a batch uses seed + k
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Base of the pair scoring function; larger values favour smaller pieces
    #[arg(short, long, default_value_t = DEFAULT_EVALUATION_BASE)]
    pub base: f64,

    /// Directory for PNG renderings of each solved layout
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Seed used for the puzzle at `index` within the batch
    pub const fn puzzle_seed(&self, index: usize) -> u64 {
        self.seed.wrapping_add(index as u64)
    }

    /// Generator configuration shared by every puzzle in the batch
    ///
    /// The size is checked when a generator is created from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the scoring base is not greater than zero
    pub fn generator_config(&self) -> Result<GeneratorConfig> {
        let mut config = GeneratorConfig::new(self.size);
        config.set_evaluation_base(self.base)?;
        Ok(config)
    }
}

/// Orchestrates batch generation with progress tracking
pub struct BatchProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchProcessor {
    /// Create a new batch processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate the batch, writing text renderings to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, generation or output fails
    pub fn process(&mut self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.process_into(&mut out)
    }

    /// Generate the batch, writing text renderings to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, generation or output fails
    pub fn process_into(&mut self, out: &mut impl Write) -> Result<()> {
        let config = self.cli.generator_config()?;
        config.merge_target()?;

        if self.cli.count == 0 {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        for index in 0..self.cli.count {
            let seed = self.cli.puzzle_seed(index);
            let generation = self.generate_puzzle(index, config, seed)?;

            write!(out, "{}", render_generation(&generation))
                .and_then(|()| writeln!(out))
                .map_err(|e| AlgorithmError::FileSystem {
                    path: PathBuf::from("<output>"),
                    operation: "write puzzle",
                    source: e,
                })?;

            if let Some(dir) = &self.cli.output {
                export_layout_as_png(
                    &generation.layout,
                    &generation
                        .puzzle
                        .pieces
                        .iter()
                        .map(|piece| piece.color)
                        .collect::<Vec<_>>(),
                    &Self::get_output_path(dir, self.cli.size, seed),
                )?;
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn generate_puzzle(
        &mut self,
        index: usize,
        config: GeneratorConfig,
        seed: u64,
    ) -> Result<Generation> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_puzzle(index, config.size, seed);
        }

        let mut generator = PuzzleGenerator::new(config, RandomSelector::new(seed))?;
        while generator.execute_step()? {
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_merges(index, generator.merges(), generator.phase());
            }
        }

        let generation = generator.run()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_puzzle(index, generation.outcome);
        }

        Ok(generation)
    }

    /// Path of the PNG written for a puzzle
    pub fn get_output_path(dir: &Path, size: usize, seed: u64) -> PathBuf {
        dir.join(format!("{OUTPUT_PREFIX}_{size}x{size}_{seed}.png"))
    }
}
