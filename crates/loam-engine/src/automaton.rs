//! Lockstep driver for a rule set and its grid.
//!
//! [`Automaton`] owns the current generation and a scratch grid of the
//! same shape. Each [`step()`](Automaton::step) computes the next
//! generation into the scratch grid and swaps the two, so no allocation
//! happens after construction.
//!
//! # Ownership model
//!
//! The rule set is held behind an [`Arc`] and is read-only for the
//! automaton's lifetime. With more than one worker the automaton owns a
//! dedicated rayon pool, built once and shared by clones.
//! [`step()`](Automaton::step) returns a borrow of the new generation, so
//! the caller cannot step again while still holding it.

use crate::config::GridConfig;
use crate::grid::Grid;
use crate::view::GridView;
use loam_core::ConfigError;
use loam_rule::RuleSet;
use log::{info, trace};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::Arc;

const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Automaton>();
        assert_send::<Generations>();
    }
};

// ── Automaton ───────────────────────────────────────────────────

/// A rule set stepping a grid forward one generation at a time.
#[derive(Clone, Debug)]
pub struct Automaton {
    rules: Arc<RuleSet>,
    current: Grid,
    scratch: Grid,
    generation: u64,
    workers: usize,
    pool: Option<Arc<ThreadPool>>,
}

/// A stepping pool for `workers` threads, or `None` for serial stepping.
fn build_pool(workers: usize) -> Result<Option<Arc<ThreadPool>>, ConfigError> {
    if workers <= 1 {
        return Ok(None);
    }
    ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("loam-step-{i}"))
        .build()
        .map(|pool| Some(Arc::new(pool)))
        .map_err(|e| ConfigError::WorkerPool {
            workers,
            reason: e.to_string(),
        })
}

impl Automaton {
    /// Build a randomly initialised automaton.
    ///
    /// The grid is drawn from `config.seed`, and stepping uses
    /// [`GridConfig::resolved_workers`] threads.
    ///
    /// # Errors
    ///
    /// Any [`GridConfig::validate`] failure, or
    /// [`ConfigError::WorkerPool`] if the stepping pool cannot start.
    pub fn new(config: &GridConfig, rules: impl Into<Arc<RuleSet>>) -> Result<Self, ConfigError> {
        let rules = rules.into();
        let current = Grid::random(config, &rules)?;
        let workers = config.resolved_workers();
        let pool = build_pool(workers)?;
        info!(
            "automaton '{}': {}x{} {} grid, {} {} states, {} worker(s)",
            rules.name(),
            config.width,
            config.height,
            if config.loop_edges { "looping" } else { "bounded" },
            rules.state_count(),
            rules.topology(),
            workers,
        );
        Ok(Self::assemble(rules, current, workers, pool))
    }

    /// Build an automaton around an existing grid, stepped on one thread.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InitialCellOutOfRange`] if a cell is not a state of
    /// `rules`.
    pub fn with_grid(grid: Grid, rules: impl Into<Arc<RuleSet>>) -> Result<Self, ConfigError> {
        let rules = rules.into();
        grid.check_states(&rules)?;
        Ok(Self::assemble(rules, grid, 1, None))
    }

    fn assemble(
        rules: Arc<RuleSet>,
        current: Grid,
        workers: usize,
        pool: Option<Arc<ThreadPool>>,
    ) -> Self {
        let scratch = current.clone();
        Self {
            rules,
            current,
            scratch,
            generation: 0,
            workers,
            pool,
        }
    }

    /// Set the number of stepping threads (at least one), rebuilding the
    /// pool.
    ///
    /// # Errors
    ///
    /// [`ConfigError::WorkerPool`] if the new pool cannot start; the
    /// previous setting is kept.
    pub fn set_workers(&mut self, workers: usize) -> Result<(), ConfigError> {
        let workers = workers.max(1);
        if workers != self.workers {
            self.pool = build_pool(workers)?;
            self.workers = workers;
        }
        Ok(())
    }

    /// Number of stepping threads.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Advance one generation and return it.
    pub fn step(&mut self) -> &Grid {
        match &self.pool {
            Some(pool) => {
                let (current, rules, scratch) = (&self.current, &*self.rules, &mut self.scratch);
                pool.install(|| current.step_parallel_into(rules, scratch));
            }
            None => self.current.step_into(&self.rules, &mut self.scratch),
        }
        std::mem::swap(&mut self.current, &mut self.scratch);
        self.generation += 1;
        trace!("generation {}", self.generation);
        &self.current
    }

    /// Advance `n` generations and return the last.
    pub fn advance(&mut self, n: u64) -> &Grid {
        for _ in 0..n {
            self.step();
        }
        &self.current
    }

    /// Redraw the grid from `seed` and restart the generation counter.
    ///
    /// The grid keeps its shape and edge behaviour.
    pub fn reset(&mut self, seed: u64) -> Result<&Grid, ConfigError> {
        let config = GridConfig::new(
            self.current.width(),
            self.current.height(),
            self.current.is_loop(),
        )
        .with_seed(seed);
        self.current = Grid::random(&config, &self.rules)?;
        self.generation = 0;
        Ok(&self.current)
    }

    /// Generations computed since construction or the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The current generation.
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// The rule set.
    pub fn rules(&self) -> &Arc<RuleSet> {
        &self.rules
    }

    /// Renderer view of the current generation.
    pub fn view(&self) -> GridView<'_> {
        GridView::new(&self.current, &self.rules)
    }

    /// Consume the automaton, returning the current generation.
    pub fn into_grid(self) -> Grid {
        self.current
    }

    /// The generations following the current one, as an iterator.
    pub fn generations(&self) -> Generations {
        Generations::new(self.current.clone(), Arc::clone(&self.rules))
    }
}

// ── Generations ─────────────────────────────────────────────────

/// Infinite iterator over successive generations.
///
/// The first item is the generation after the starting grid.
#[derive(Clone, Debug)]
pub struct Generations {
    rules: Arc<RuleSet>,
    current: Grid,
    scratch: Grid,
}

impl Generations {
    pub(crate) fn new(start: Grid, rules: Arc<RuleSet>) -> Self {
        let scratch = start.clone();
        Self {
            rules,
            current: start,
            scratch,
        }
    }
}

impl Iterator for Generations {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        self.current.step_into(&self.rules, &mut self.scratch);
        std::mem::swap(&mut self.current, &mut self.scratch);
        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
