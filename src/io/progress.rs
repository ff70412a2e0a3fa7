//! Multi-puzzle progress tracking with automatic batching for large runs

use crate::algorithm::executor::Phase;
use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Display state of one puzzle: label, merges so far, merge ceiling, phase note
#[derive(Clone, Debug, Default)]
struct PuzzleState {
    label: String,
    merges: usize,
    max_merges: usize,
    note: String,
}

/// Coordinates progress display for batch generation
///
/// Shows one merge bar per puzzle for small batches and adds a single batch
/// bar once the puzzle count exceeds the number of individual bars.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    puzzle_bars: Vec<ProgressBar>,
    puzzle_count: usize,
    puzzle_states: Vec<PuzzleState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Puzzles: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            puzzle_bars: Vec::new(),
            puzzle_count: 0,
            puzzle_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on puzzle count
    pub fn initialize(&mut self, puzzle_count: usize) {
        self.puzzle_count = puzzle_count;

        if puzzle_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(puzzle_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = puzzle_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(0);
            pb.set_style(PROGRESS_STYLE.clone());
            self.puzzle_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Number of puzzles announced to `initialize`
    pub const fn puzzle_count(&self) -> usize {
        self.puzzle_count
    }

    /// Configure a bar for a new puzzle
    ///
    /// A `size` x `size` grid allows at most `size`² - 1 merges.
    pub fn start_puzzle(&mut self, index: usize, size: usize, seed: u64) {
        if index >= self.puzzle_states.len() {
            self.puzzle_states.resize(index + 1, PuzzleState::default());
        }
        if let Some(state) = self.puzzle_states.get_mut(index) {
            *state = PuzzleState {
                label: format!("{size}x{size} seed {seed}"),
                merges: 0,
                max_merges: (size * size).saturating_sub(1),
                note: String::new(),
            };
        }
        self.update_bars();
    }

    /// Report merges performed and the current phase
    pub fn update_merges(&mut self, index: usize, merges: usize, phase: Phase) {
        if let Some(state) = self.puzzle_states.get_mut(index) {
            state.merges = merges;
            state.note = format!("{phase:?}");
        }
        self.update_bars();
    }

    /// Mark a puzzle as completed and update batch progress
    pub fn complete_puzzle(&mut self, index: usize, outcome: Phase) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.puzzle_states.get_mut(index) {
            let mark = if outcome == Phase::Finalized { '✓' } else { '!' };
            state.label = format!("{mark} {}", state.label);
            state.note = format!("{outcome:?}");
            state.max_merges = state.merges;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All puzzles generated");
        }
        let _ = self.multi_progress.clear();
    }

    /// Update all progress bars to show the last N active puzzles
    fn update_bars(&self) {
        let active: Vec<&PuzzleState> = self
            .puzzle_states
            .iter()
            .filter(|state| !state.label.is_empty())
            .collect();

        let start_idx = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, state) in visible.iter().enumerate() {
            if let Some(bar) = self.puzzle_bars.get(bar_idx) {
                bar.set_length(state.max_merges as u64);
                bar.set_position(state.merges as u64);
                bar.set_message(format!("{} merges {}", state.merges, state.note));
                bar.set_prefix(state.label.clone());
            }
        }

        for bar_idx in visible.len()..self.puzzle_bars.len() {
            if let Some(bar) = self.puzzle_bars.get(bar_idx) {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}
