//! Benchmark profiles for the Loam cellular-automaton engine.
//!
//! - [`reference_profile`]: 128x128 torus (16K cells)
//! - [`stress_profile`]: 512x512 torus (~262K cells)
//! - [`random_grid`]: a seeded grid for any profile and rule set

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use loam_engine::{Grid, GridConfig};
use loam_rule::RuleSet;

/// Reference profile: 128x128 looping grid, one worker.
pub fn reference_profile(seed: u64) -> GridConfig {
    GridConfig::new(128, 128, true).with_seed(seed)
}

/// Stress profile: 512x512 looping grid, one worker per available core.
pub fn stress_profile(seed: u64) -> GridConfig {
    GridConfig::new(512, 512, true)
        .with_seed(seed)
        .with_workers(None)
}

/// A randomly initialised grid for `config` under `rules`.
///
/// # Panics
///
/// If `config` is invalid. The profiles above never are.
pub fn random_grid(config: &GridConfig, rules: &RuleSet) -> Grid {
    Grid::random(config, rules).expect("benchmark profile must be valid")
}
