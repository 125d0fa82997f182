//! A discrete cellular-automaton simulator, generalized over dimensionality
//! and neighborhood shape.
//!
//! Two grid representations share one contract:
//!
//! - [`DenseGrid`] — a bounded rectangular 2D grid where every in-bounds
//!   cell has an explicit state. It supports two neighborhood strategies:
//!   the eight adjacent cells, or the first seat visible along each of the
//!   eight compass directions. Simulations on it run to a fixed point.
//! - [`SparseGrid`] — an unbounded N-dimensional grid storing only the
//!   active cells. Simulations on it run a fixed number of generations.
//!
//! Transition rules are data, not code: a birth set and a survival set of
//! neighbor counts, written in B/S notation (e.g. `B3/S23`). A seating-style
//! automaton is the rule `B0/S0123`; Conway's Life is `B3/S23`.
//!
//! The usual entry point is [`Config`]:
//!
//! ```
//! use casim_lib::Config;
//!
//! let summary = Config::new(3).run(".#.\n..#\n###").unwrap();
//! assert_eq!(summary.population, 112);
//! ```

mod config;
mod dense;
mod error;
mod grid;
mod rule;
mod sparse;
mod state;

pub use config::{Config, Outcome, Summary};
pub use dense::{DenseGrid, Neighborhood};
pub use error::Error;
pub use grid::Grid;
pub use rule::Rule;
pub use sparse::{moore, moore_with_center, Coord, SparseGrid};
pub use state::State;
