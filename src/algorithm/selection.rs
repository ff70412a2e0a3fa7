use crate::{
    io::configuration::DEFAULT_EVALUATION_BASE,
    io::error::{Result, computation_error, invalid_configuration},
    spatial::{GeneratorPiece, GeneratorState},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Base of the exponential pair score
///
/// Larger bases favour absorbing small fragments more aggressively, giving
/// puzzles with more, finer pieces; bases near `e` soften the size bias.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvaluationBase(f64);

impl EvaluationBase {
    /// Validate and wrap a base
    ///
    /// # Errors
    ///
    /// Returns an invalid configuration error if `base` is not a finite
    /// value greater than zero. Out-of-range values are never clamped.
    pub fn new(base: f64) -> Result<Self> {
        if !base.is_finite() || base <= 0.0 {
            return Err(invalid_configuration(
                "evaluation_base",
                &base,
                &"must be a finite value greater than zero",
            ));
        }
        Ok(Self(base))
    }

    /// The wrapped base
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Default for EvaluationBase {
    fn default() -> Self {
        Self(DEFAULT_EVALUATION_BASE)
    }
}

/// Score a candidate merge as `base^-|a| + base^-|b|`
///
/// For bases above one each term shrinks as its piece grows, so pairs
/// involving small pieces are preferred.
pub fn pair_score(a: &GeneratorPiece, b: &GeneratorPiece, base: EvaluationBase) -> f64 {
    let term = |piece: &GeneratorPiece| base.value().powf(-(piece.len() as f64));
    term(a) + term(b)
}

/// Score every pair of piece indices, scaled so the best pair scores one
///
/// Scores are computed as logarithms and shifted by the largest before
/// exponentiating, so every finite positive base yields finite weights in
/// `[0, 1]` with the same ratios as [`pair_score`]. Pairs referring to
/// missing pieces score zero.
pub fn score_pairs(
    state: &GeneratorState,
    pairs: &[(usize, usize)],
    base: EvaluationBase,
) -> Vec<f64> {
    let ln_base = base.value().ln();
    let log_term = |piece: &GeneratorPiece| -(piece.len() as f64) * ln_base;

    let log_scores: Vec<Option<f64>> = pairs
        .iter()
        .map(|&(i, j)| match (state.pieces.get(i), state.pieces.get(j)) {
            (Some(a), Some(b)) => Some(log_sum_exp(log_term(a), log_term(b))),
            _ => None,
        })
        .collect();

    let peak = log_scores
        .iter()
        .flatten()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    log_scores
        .into_iter()
        .map(|log_score| log_score.map_or(0.0, |log_score| (log_score - peak).exp()))
        .collect()
}

/// `ln(e^x + e^y)` without overflowing for large arguments
fn log_sum_exp(x: f64, y: f64) -> f64 {
    let (high, low) = if x >= y { (x, y) } else { (y, x) };
    high + (low - high).exp().ln_1p()
}

/// Source of uniform random values in `[0, 1)`
///
/// Every stochastic choice in generation draws from one of these, so a
/// seeded or scripted source makes a run fully reproducible.
pub trait RandomSource {
    /// Draw the next value in `[0, 1)`
    fn next_unit(&mut self) -> f64;
}

/// Seeded random selector for reproducible stochastic choices
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a selector seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for RandomSelector {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Pick a pair by cumulative-probability roulette
///
/// Scores are normalised to sum to one; the first pair whose cumulative
/// probability reaches `random_value` wins. Rounding that leaves the final
/// cumulative value below `random_value` falls back to the last pair, as
/// does a score total that is zero, infinite or NaN.
///
/// # Errors
///
/// Returns an error if:
/// - `random_value` is NaN or outside `[0, 1)`
/// - `pairs` is empty or its length differs from `scores`
pub fn select_pair_by_score(
    pairs: &[(usize, usize)],
    scores: &[f64],
    random_value: f64,
) -> Result<(usize, usize)> {
    if !(0.0..1.0).contains(&random_value) {
        return Err(computation_error(
            "select_pair_by_score",
            &format!("random value {random_value} is outside [0, 1)"),
        ));
    }
    if pairs.is_empty() || pairs.len() != scores.len() {
        return Err(invalid_configuration(
            "pairs",
            &pairs.len(),
            &format!("expected a non-empty list matching {} scores", scores.len()),
        ));
    }

    let total: f64 = scores.iter().sum();
    if total.is_finite() && total > 0.0 {
        let mut cumulative = 0.0;
        for (&pair, &score) in pairs.iter().zip(scores) {
            cumulative += score / total;
            if cumulative >= random_value {
                return Ok(pair);
            }
        }
    }

    pairs
        .last()
        .copied()
        .ok_or_else(|| computation_error("select_pair_by_score", &"no pairs to select from"))
}
