//! The unbounded N-dimensional grid.

use crate::{error::Error, grid::Grid, rule::Rule, state::State};
use std::collections::HashSet;

/// The coordinates of a cell: one integer per axis, compared and hashed
/// structurally. Coordinates are unbounded; there is no grid extent.
pub type Coord<const D: usize> = [i64; D];

/// Yields the `3^D` coordinates within Chebyshev distance 1 of `coord`,
/// including `coord` itself.
pub fn moore_with_center<const D: usize>(coord: Coord<D>) -> impl Iterator<Item = Coord<D>> {
    (0..3usize.pow(D as u32)).map(move |index| {
        let mut neighbor = coord;
        let mut index = index;
        for axis in neighbor.iter_mut() {
            *axis += (index % 3) as i64 - 1;
            index /= 3;
        }
        neighbor
    })
}

/// Yields the `3^D - 1` neighbors of `coord`, the center excluded.
pub fn moore<const D: usize>(coord: Coord<D>) -> impl Iterator<Item = Coord<D>> {
    moore_with_center(coord).filter(move |&neighbor| neighbor != coord)
}

/// An unbounded D-dimensional grid storing only the active cells.
///
/// A coordinate absent from the set reads as [`State::Inactive`], and a
/// cell transitioning to inactive is removed rather than stored, so the
/// size of the representation is proportional to the number of active
/// cells, not to the coordinate space.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SparseGrid<const D: usize> {
    active: HashSet<Coord<D>>,
}

impl<const D: usize> SparseGrid<D> {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self {
            active: HashSet::new(),
        }
    }

    /// Parses a two-dimensional pattern block (`.` inactive, `#` active),
    /// placing the cell in row `y`, column `x` at `[x, y, 0, ...]`. The
    /// remaining axes start as a singleton slice at the origin.
    pub fn from_pattern(input: &str) -> Result<Self, Error> {
        if D < 2 {
            return Err(Error::Dimension(D));
        }
        let mut grid = Self::new();
        for (y, line) in input.trim().lines().enumerate() {
            for (x, ch) in line.trim().chars().enumerate() {
                match ch {
                    '#' => {
                        let mut coord = [0; D];
                        coord[0] = x as i64;
                        coord[1] = y as i64;
                        grid.active.insert(coord);
                    }
                    '.' => {}
                    _ => return Err(Error::UnexpectedChar(y, ch)),
                }
            }
        }
        Ok(grid)
    }

    /// Coordinates of all active cells, in no particular order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coord<D>> + '_ {
        self.active.iter().copied()
    }

    /// Number of active cells among the Moore neighbors of `coord`.
    pub fn active_neighbors(&self, coord: Coord<D>) -> u8 {
        moore(coord)
            .filter(|neighbor| self.active.contains(neighbor))
            .count() as u8
    }

    /// Applies one synchronous generation and returns the new grid together
    /// with whether any cell changed.
    ///
    /// The cells considered are the active set and every Moore neighbor of
    /// an active cell: an inactive cell farther away has no active neighbor
    /// and cannot activate. All decisions read the same snapshot of `self`.
    pub fn step(&self, rule: &Rule) -> (Self, bool) {
        let mut candidates = HashSet::new();
        for &coord in &self.active {
            candidates.extend(moore_with_center(coord));
        }
        let mut next = Self::new();
        for coord in candidates {
            let state = self.get(coord);
            if rule.next_state(state, self.active_neighbors(coord)) == State::Active {
                next.active.insert(coord);
            }
        }
        let changed = next.active != self.active;
        (next, changed)
    }

    /// Runs exactly `generations` steps, unconditionally.
    ///
    /// The coordinate space is unbounded, so no fixed point is expected and
    /// none is checked for.
    pub fn run(mut self, rule: &Rule, generations: usize) -> Self {
        for _ in 0..generations {
            self = self.step(rule).0;
        }
        self
    }
}

impl<const D: usize> Grid for SparseGrid<D> {
    type Coord = Coord<D>;

    fn get(&self, coord: Self::Coord) -> State {
        if self.active.contains(&coord) {
            State::Active
        } else {
            State::Inactive
        }
    }

    /// Only [`State::Active`] is stored; setting any other state removes
    /// the coordinate.
    fn set(&mut self, coord: Self::Coord, state: State) {
        if state == State::Active {
            self.active.insert(coord);
        } else {
            self.active.remove(&coord);
        }
    }

    fn population(&self) -> usize {
        self.active.len()
    }
}
