//! Bidirectional path search on 8-connected occupancy grids.
//!
//! Two frontiers grow at once, one from each endpoint, over a shared byte
//! per cell that records passability, which frontier owns the cell and the
//! step back toward that frontier's root. When the frontiers touch, the two
//! backpointer chains are spliced into a single path.
//!
//! Two growth disciplines are available through [`Strategy`]:
//!
//! - **Uniform cost** ([`Strategy::UniformCost`], the default) alternates
//!   whole shells from each side and returns a path with the fewest steps.
//! - **Best first** ([`Strategy::BestFirst`]) pops the globally cheapest
//!   candidate by cost so far plus [`octile`] distance to the opposite
//!   root, with diagonal steps costing √2.
//!
//! ```
//! use meetpath_core::{Occupancy, Point};
//! use meetpath_paths::find_path;
//!
//! let grid = Occupancy::parse("..#\n..#\n...").unwrap();
//! let path = find_path(&grid, Point::new(0, 0), Point::new(2, 2)).unwrap();
//! assert_eq!(path.first(), Some(&Point::new(0, 0)));
//! assert_eq!(path.last(), Some(&Point::new(2, 2)));
//! ```
//!
//! [`Components`] answers reachability questions for many pairs at once
//! using the same 8-connectivity.

mod bestfirst;
mod cc;
mod distance;
mod error;
mod frontier;
mod queue;
mod search;
mod shell;
mod tags;
mod traceback;

pub use cc::Components;
pub use distance::{chebyshev, manhattan, octile, path_cost, step_cost};
pub use error::PathError;
pub use search::{Bidir, SearchConfig, SearchStats, Strategy, find_path, find_path_with};
