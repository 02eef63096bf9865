//! Random grid initialisation.
//!
//! Deterministic for a given seed: [`Grid::random`] draws from a ChaCha8
//! stream seeded with [`GridConfig::seed`].

use crate::config::GridConfig;
use crate::grid::Grid;
use loam_core::{ConfigError, StateId};
use loam_rule::RuleSet;
use log::debug;
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The per-cell state distribution of a rule set.
///
/// Uniform over all states, or proportional to each state's weight when
/// the rule set is weighted. Zero-weight states are never drawn.
#[derive(Clone, Debug)]
pub enum StateDraw {
    /// Uniform over `[0, n)`.
    Uniform(u32),
    /// Proportional to the rule set's weights.
    ///
    /// Sums are taken in `u64`, so no combination of `u32` weights overflows.
    Weighted(WeightedIndex<u64>),
}

impl StateDraw {
    /// Build the distribution described by `rules`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroTotalWeight`] if weighted and no weight is
    /// positive, [`ConfigError::InvalidWeights`] for any other rejection.
    /// Rule sets from [`RuleSet::builder`] never trigger either.
    pub fn new(rules: &RuleSet) -> Result<Self, ConfigError> {
        if rules.is_weighted() {
            if rules.total_weight() == 0 {
                return Err(ConfigError::ZeroTotalWeight);
            }
            WeightedIndex::new(rules.weights().map(u64::from))
                .map(Self::Weighted)
                .map_err(|e| ConfigError::InvalidWeights {
                    reason: e.to_string(),
                })
        } else {
            Ok(Self::Uniform(rules.state_count() as u32))
        }
    }
}

impl Distribution<StateId> for StateDraw {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> StateId {
        match self {
            Self::Uniform(n) => StateId(rng.random_range(0..*n)),
            Self::Weighted(w) => StateId(w.sample(rng) as u32),
        }
    }
}

impl Grid {
    /// A randomly initialised grid, seeded from `config.seed`.
    pub fn random(config: &GridConfig, rules: &RuleSet) -> Result<Self, ConfigError> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::random_with(config, rules, &mut rng)
    }

    /// A randomly initialised grid drawing from a caller-supplied RNG.
    pub fn random_with<R: Rng + ?Sized>(
        config: &GridConfig,
        rules: &RuleSet,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let draw = StateDraw::new(rules)?;
        let cells: Vec<StateId> = (0..config.cell_count())
            .map(|_| draw.sample(rng))
            .collect();
        debug!(
            "initialised {}x{} grid for '{}' ({} draw)",
            config.width,
            config.height,
            rules.name(),
            if rules.is_weighted() { "weighted" } else { "uniform" },
        );
        Ok(Self::from_parts(config, cells))
    }
}
