//! The public search entry points.

use std::fmt;

use meetpath_core::{Occupancy, Point};

use crate::bestfirst::BestFirst;
use crate::error::PathError;
use crate::frontier::{Advance, Contact, Expansion};
use crate::shell::ShellGrowth;
use crate::tags::{Side, TagStore};
use crate::traceback;

/// How the two frontiers grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Alternate full shells from each side. Every step costs 1, so the
    /// path has the fewest possible steps.
    #[default]
    UniformCost,
    /// Pop the globally cheapest candidate by cost plus octile estimate to
    /// the opposite root. Diagonal steps cost √2.
    ///
    /// The search stops at the first contact between the frontiers, so the
    /// path is usually but not always the cheapest under octile cost. Use
    /// [`UniformCost`](Self::UniformCost) when the fewest steps must be
    /// guaranteed.
    BestFirst,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UniformCost => f.write_str("uniform-cost"),
            Self::BestFirst => f.write_str("best-first"),
        }
    }
}

/// Search settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub strategy: Strategy,
    /// Give up with [`PathError::StepLimit`] after this many steps. A step
    /// is one shell pass (uniform-cost) or one queue pop (best-first).
    /// `None` searches until the frontiers meet or run out.
    pub max_steps: Option<usize>,
}

impl SearchConfig {
    /// Default settings with the given strategy.
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }
}

/// Counters from the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Expansion steps performed.
    pub steps: usize,
    /// Cells owned by the start frontier, root included.
    pub claimed_a: usize,
    /// Cells owned by the end frontier, root included.
    pub claimed_b: usize,
}

/// Bidirectional path search over an [`Occupancy`] grid.
///
/// A `Bidir` carries only settings and the statistics of its last run. All
/// scratch state (tag store, shells, open list) belongs to a single call of
/// [`path`](Self::path) and is released before it returns, whatever the
/// outcome. The grid is only read, so one grid can serve many concurrent
/// searches.
#[derive(Debug, Clone, Default)]
pub struct Bidir {
    config: SearchConfig,
    stats: SearchStats,
}

impl Bidir {
    /// Create a search with the given settings.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// The settings in use.
    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Statistics of the most recent call to [`path`](Self::path).
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Find a path of passable cells from `from` to `to`.
    ///
    /// On success the path starts at `from`, ends at `to`, and consecutive
    /// points are 8-adjacent. `from == to` yields `[from]`.
    pub fn path(
        &mut self,
        grid: &Occupancy,
        from: Point,
        to: Point,
    ) -> Result<Vec<Point>, PathError> {
        self.stats = SearchStats::default();

        for p in [from, to] {
            if !grid.passable(p) {
                return Err(PathError::InvalidEndpoint(p));
            }
        }
        if from == to {
            return Ok(vec![from]);
        }

        log::debug!(
            "{} search {from} -> {to} on {}x{} grid",
            self.config.strategy,
            grid.width(),
            grid.height()
        );

        let mut tags = TagStore::new(grid, from, to)?;
        let outcome = match self.config.strategy {
            Strategy::UniformCost => {
                let growth = ShellGrowth::new(&tags)?;
                self.drive(&mut tags, growth)
            }
            Strategy::BestFirst => {
                let bf = BestFirst::new(&tags)?;
                self.drive(&mut tags, bf)
            }
        };
        self.stats.claimed_a = tags.claimed(Side::A);
        self.stats.claimed_b = tags.claimed(Side::B);

        let result = outcome.and_then(|contact| traceback::splice(&tags, contact, from));
        match &result {
            Ok(path) => log::debug!(
                "found path of {} cells in {} steps ({} + {} cells claimed)",
                path.len(),
                self.stats.steps,
                self.stats.claimed_a,
                self.stats.claimed_b
            ),
            Err(e) => log::debug!("search failed after {} steps: {e}", self.stats.steps),
        }
        result
    }

    /// Run `exp` until the frontiers meet, run out, or the step budget is
    /// spent.
    fn drive<E: Expansion>(
        &mut self,
        tags: &mut TagStore,
        mut exp: E,
    ) -> Result<Contact, PathError> {
        loop {
            if let Some(max) = self.config.max_steps {
                if self.stats.steps >= max {
                    log::warn!("step budget of {max} exhausted");
                    return Err(PathError::StepLimit(max));
                }
            }
            self.stats.steps += 1;

            match exp.advance(tags)? {
                Advance::Continue => {}
                Advance::Contact(c) => return Ok(c),
                Advance::Exhausted => return Err(PathError::NoPathFound),
            }
        }
    }
}

/// Find a uniform-cost (fewest steps) path from `from` to `to`.
pub fn find_path(grid: &Occupancy, from: Point, to: Point) -> Result<Vec<Point>, PathError> {
    Bidir::default().path(grid, from, to)
}

/// Find a path from `from` to `to` with explicit settings.
pub fn find_path_with(
    grid: &Occupancy,
    from: Point,
    to: Point,
    config: &SearchConfig,
) -> Result<Vec<Point>, PathError> {
    Bidir::new(*config).path(grid, from, to)
}
