use crate::{
    algorithm::adjacency::compute_adjacent_pairs,
    algorithm::coloring::assign_colors,
    algorithm::formulation::has_unique_solution,
    algorithm::selection::{
        EvaluationBase, RandomSelector, RandomSource, score_pairs, select_pair_by_score,
    },
    io::configuration::{MAX_GRID_DIMENSION, UNCONDITIONAL_MERGES},
    io::error::{AlgorithmError, Result, invalid_configuration},
    spatial::{Cell, GeneratorState, PieceId, Puzzle},
};
use log::{debug, info, warn};

/// Merges performed before uniqueness checking starts, for the tuned sizes
pub fn unconditional_merge_count(size: usize) -> Option<usize> {
    UNCONDITIONAL_MERGES
        .iter()
        .find(|&&(tuned, _)| tuned == size)
        .map(|&(_, merges)| merges)
}

/// Parameters of a single generation run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Grid edge length
    pub size: usize,
    /// Base of the pair scoring function
    pub evaluation_base: EvaluationBase,
    /// Overrides the tuned unconditional merge count, enabling other sizes
    pub unconditional_merges: Option<usize>,
}

impl GeneratorConfig {
    /// Configuration for `size` with the default base and tuned merge count
    pub fn new(size: usize) -> Self {
        Self {
            size,
            evaluation_base: EvaluationBase::default(),
            unconditional_merges: None,
        }
    }

    /// Current scoring base
    pub const fn evaluation_base(&self) -> f64 {
        self.evaluation_base.value()
    }

    /// Replace the scoring base
    ///
    /// # Errors
    ///
    /// Returns an invalid configuration error if `base` is not greater than
    /// zero; the previous base is kept
    pub fn set_evaluation_base(&mut self, base: f64) -> Result<()> {
        self.evaluation_base = EvaluationBase::new(base)?;
        Ok(())
    }

    /// Number of unchecked merges to perform
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The size is zero or exceeds the grid dimension limit
    /// - The size has no tuned merge count and no override is set
    pub fn merge_target(&self) -> Result<usize> {
        if self.size == 0 || self.size > MAX_GRID_DIMENSION {
            return Err(invalid_configuration(
                "size",
                &self.size,
                &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
            ));
        }

        self.unconditional_merges
            .or_else(|| unconditional_merge_count(self.size))
            .ok_or(AlgorithmError::UnsupportedSize { size: self.size })
    }
}

/// Lifecycle of a generation run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Created, no merge performed yet
    Initial,
    /// Merging without checking uniqueness
    Unconditional,
    /// Merging with a uniqueness check after every merge
    Conditional,
    /// Stopped on a state with exactly one tiling
    Finalized,
    /// Ran out of adjacent pairs before reaching uniqueness
    Exhausted,
}

impl Phase {
    /// Whether no further steps will run
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Finalized | Self::Exhausted)
    }
}

/// Result of a completed generation run
#[derive(Debug, Clone)]
pub struct Generation {
    /// Coloured puzzle with normalised pieces
    pub puzzle: Puzzle,
    /// Final partition with pieces at their solved positions
    pub layout: GeneratorState,
    /// `Finalized` for a unique puzzle, `Exhausted` for a best-effort one
    pub outcome: Phase,
    /// Merges performed across both phases
    pub merges: usize,
    /// Uniqueness checks run during the conditional phase
    pub uniqueness_checks: usize,
}

impl Generation {
    /// Whether the puzzle is known to have exactly one solution
    pub fn is_unique(&self) -> bool {
        self.outcome == Phase::Finalized
    }

    /// Bounding box corner of each piece in the generated solution
    ///
    /// Adding a piece's origin to its normalised cells restores its solved
    /// position on the board.
    pub fn solution_origins(&self) -> Vec<(PieceId, Cell)> {
        self.layout
            .pieces
            .iter()
            .filter_map(|piece| piece.min_corner().map(|corner| (piece.id, corner)))
            .collect()
    }
}

/// Two-phase piece merge engine
///
/// Starts from one piece per cell and repeatedly merges a randomly chosen
/// adjacent pair, weighted towards small pieces. The first merges run
/// unchecked to pre-fragment the grid; every later merge is followed by an
/// exact-cover uniqueness check and generation stops at the first state
/// whose pieces tile the grid in exactly one way.
pub struct PuzzleGenerator<R: RandomSource> {
    config: GeneratorConfig,
    merge_target: usize,
    state: GeneratorState,
    phase: Phase,
    random: R,
    unconditional_done: usize,
    merges: usize,
    uniqueness_checks: usize,
}

impl<R: RandomSource> PuzzleGenerator<R> {
    /// Create a generator in the `Initial` phase
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration's size is unsupported
    pub fn new(config: GeneratorConfig, random: R) -> Result<Self> {
        let merge_target = config.merge_target()?;

        Ok(Self {
            config,
            merge_target,
            state: GeneratorState::new(config.size),
            phase: Phase::Initial,
            random,
            unconditional_done: 0,
            merges: 0,
            uniqueness_checks: 0,
        })
    }

    /// Current lifecycle phase
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Current partition
    pub const fn state(&self) -> &GeneratorState {
        &self.state
    }

    /// Run configuration
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Merges performed so far
    pub const fn merges(&self) -> usize {
        self.merges
    }

    /// Uniqueness checks performed so far
    pub const fn uniqueness_checks(&self) -> usize {
        self.uniqueness_checks
    }

    /// Advance by one merge or one phase transition
    ///
    /// Returns `false` once the run has reached a terminal phase.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The random source yields a value outside `[0, 1)`
    /// - The exact-cover formulation violates its own column layout
    pub fn execute_step(&mut self) -> Result<bool> {
        match self.phase {
            Phase::Initial => {
                self.enter(Phase::Unconditional);
                Ok(true)
            }
            Phase::Unconditional => {
                if self.unconditional_done >= self.merge_target || !self.merge_step()? {
                    self.enter(Phase::Conditional);
                } else {
                    self.unconditional_done += 1;
                }
                Ok(true)
            }
            Phase::Conditional => {
                if !self.merge_step()? {
                    warn!(
                        "No adjacent pieces left on {0}x{0} grid after {1} merges; \
                         returning a puzzle without a uniqueness guarantee",
                        self.config.size, self.merges
                    );
                    self.enter(Phase::Exhausted);
                    return Ok(false);
                }

                self.uniqueness_checks += 1;
                if has_unique_solution(&self.state)? {
                    info!(
                        "Unique {0}x{0} tiling with {1} pieces after {2} merges",
                        self.config.size,
                        self.state.piece_count(),
                        self.merges
                    );
                    self.enter(Phase::Finalized);
                    return Ok(false);
                }
                Ok(true)
            }
            Phase::Finalized | Phase::Exhausted => Ok(false),
        }
    }

    /// Drive the run to a terminal phase and build the puzzle
    ///
    /// # Errors
    ///
    /// Returns an error if any step fails or the final partition is broken
    pub fn run(mut self) -> Result<Generation> {
        while self.execute_step()? {}
        self.finish()
    }

    /// Colour and normalise the current partition
    fn finish(mut self) -> Result<Generation> {
        self.state.check_partition()?;

        let colors = assign_colors(self.state.piece_count(), &mut self.random);
        let puzzle = Puzzle::from_state(&self.state, &colors)?;

        Ok(Generation {
            puzzle,
            layout: self.state,
            outcome: self.phase,
            merges: self.merges,
            uniqueness_checks: self.uniqueness_checks,
        })
    }

    /// Merge one weighted-random adjacent pair; `false` when none remain
    fn merge_step(&mut self) -> Result<bool> {
        let pairs = compute_adjacent_pairs(&self.state);
        if pairs.is_empty() {
            return Ok(false);
        }

        let scores = score_pairs(&self.state, &pairs, self.config.evaluation_base);
        let (i, j) = select_pair_by_score(&pairs, &scores, self.random.next_unit())?;
        self.state.merge(i, j)?;
        self.merges += 1;

        Ok(true)
    }

    fn enter(&mut self, phase: Phase) {
        debug!(
            "{:?} -> {phase:?} ({} pieces, {} merges)",
            self.phase,
            self.state.piece_count(),
            self.merges
        );
        self.phase = phase;
    }
}

/// Generate a puzzle of the given size with an OS-seeded random source
///
/// Only sizes 6, 7 and 8 are supported here; use [`generate_puzzle_with`]
/// and an explicit merge count for other sizes.
///
/// # Errors
///
/// Returns an unsupported size error for other sizes
pub fn generate_puzzle(size: usize) -> Result<Puzzle> {
    generate_puzzle_with(GeneratorConfig::new(size), RandomSelector::from_entropy())
        .map(|generation| generation.puzzle)
}

/// Generate a puzzle with explicit configuration and random source
///
/// # Errors
///
/// Returns an error if the configuration is invalid or generation fails
pub fn generate_puzzle_with<R: RandomSource>(
    config: GeneratorConfig,
    random: R,
) -> Result<Generation> {
    PuzzleGenerator::new(config, random)?.run()
}
