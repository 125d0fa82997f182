//! The bounded two-dimensional grid.

use crate::{config::Outcome, error::Error, grid::Grid, rule::Rule, state::State};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The eight compass directions, as `(row, column)` offsets.
const DIRECTIONS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// How the bounded grid finds the neighbors of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Neighborhood {
    /// The cells within Chebyshev distance 1, clipped to the grid bounds:
    /// 8 for an interior cell, 5 on an edge, 3 in a corner.
    #[default]
    Adjacent,
    /// For each of the eight compass directions, the first non-floor cell
    /// visible along a ray from the cell. A ray that leaves the grid
    /// contributes nothing.
    Visible,
}

/// A bounded rectangular grid with an explicit state for every in-bounds
/// cell, stored in row-major order.
///
/// Parsed from a rectangular character block: `.` is floor, `L` an empty
/// seat, `#` an occupied seat. [`Display`] renders the same alphabet back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseGrid {
    width: usize,
    height: usize,
    cells: Vec<State>,
}

impl DenseGrid {
    /// Width of the grid.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid.
    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, (row, col): (usize, usize)) -> usize {
        row * self.width + col
    }

    fn in_bounds(&self, row: i64, col: i64) -> bool {
        row >= 0 && row < self.height as i64 && col >= 0 && col < self.width as i64
    }

    /// All in-bounds coordinates, in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| (row, col)))
    }

    /// The coordinates within Chebyshev distance 1 of `coord`, the cell
    /// itself excluded, clipped to the grid bounds.
    pub fn adjacent(&self, coord: (usize, usize)) -> Vec<(usize, usize)> {
        let (row, col) = (coord.0 as i64, coord.1 as i64);
        DIRECTIONS
            .iter()
            .filter_map(|&(dr, dc)| {
                let (r, c) = (row + dr, col + dc);
                if self.in_bounds(r, c) {
                    Some((r as usize, c as usize))
                } else {
                    None
                }
            })
            .collect()
    }

    /// Walks outward from `coord` in direction `dir`, one step at a time,
    /// and returns the state of the first non-floor cell found.
    ///
    /// The starting cell is excluded. Returns `None` if the ray leaves the
    /// grid without finding a seat; the boundary never wraps.
    pub fn visible(&self, coord: (usize, usize), dir: (i64, i64)) -> Option<State> {
        let (mut row, mut col) = (coord.0 as i64, coord.1 as i64);
        loop {
            row += dir.0;
            col += dir.1;
            if !self.in_bounds(row, col) {
                return None;
            }
            let state = self.cells[self.index((row as usize, col as usize))];
            if state != State::Floor {
                return Some(state);
            }
        }
    }

    /// Number of active neighbors of `coord` under the given neighborhood.
    pub fn active_neighbors(&self, coord: (usize, usize), neighborhood: Neighborhood) -> u8 {
        match neighborhood {
            Neighborhood::Adjacent => self
                .adjacent(coord)
                .into_iter()
                .filter(|&n| self.get(n) == State::Active)
                .count() as u8,
            Neighborhood::Visible => DIRECTIONS
                .iter()
                .filter(|&&dir| self.visible(coord, dir) == Some(State::Active))
                .count() as u8,
        }
    }

    /// Applies one synchronous generation and returns the new grid together
    /// with whether any cell changed.
    ///
    /// Every cell is decided from the same snapshot of `self`; no cell sees
    /// another cell's updated state within the same step.
    pub fn step(&self, neighborhood: Neighborhood, rule: &Rule) -> (Self, bool) {
        let mut next = self.clone();
        let mut changed = false;
        for coord in self.coordinates() {
            let state = self.get(coord);
            let after = rule.next_state(state, self.active_neighbors(coord, neighborhood));
            if after != state {
                changed = true;
                let index = next.index(coord);
                next.cells[index] = after;
            }
        }
        (next, changed)
    }

    /// Steps until a fixed point, or until the optional generation limit is
    /// reached.
    ///
    /// The state space is finite, so a fixed point is eventually reached for
    /// the rules used here, but no bound on the iteration count is assumed.
    /// Returns the final grid, the number of generations applied, and how
    /// the simulation ended.
    pub fn settle(
        mut self,
        neighborhood: Neighborhood,
        rule: &Rule,
        limit: Option<usize>,
    ) -> (Self, usize, Outcome) {
        let mut generations = 0;
        loop {
            if limit.map_or(false, |max| generations >= max) {
                return (self, generations, Outcome::GenerationLimit);
            }
            let (next, changed) = self.step(neighborhood, rule);
            if !changed {
                return (self, generations, Outcome::Converged);
            }
            self = next;
            generations += 1;
        }
    }
}

impl Grid for DenseGrid {
    type Coord = (usize, usize);

    /// Out-of-bounds coordinates read as [`State::Floor`], so they never
    /// contribute to a neighbor count.
    fn get(&self, coord: Self::Coord) -> State {
        if coord.0 < self.height && coord.1 < self.width {
            self.cells[self.index(coord)]
        } else {
            State::Floor
        }
    }

    fn set(&mut self, coord: Self::Coord, state: State) {
        if coord.0 < self.height && coord.1 < self.width {
            let index = self.index(coord);
            self.cells[index] = state;
        }
    }

    fn population(&self) -> usize {
        self.cells.iter().filter(|&&s| s == State::Active).count()
    }
}

impl FromStr for DenseGrid {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut width = 0;
        let mut height = 0;
        let mut cells = Vec::new();
        for (row, line) in input.trim().lines().enumerate() {
            let line = line.trim();
            let mut row_width = 0;
            for ch in line.chars() {
                let state = match ch {
                    '.' => State::Floor,
                    'L' => State::Inactive,
                    '#' => State::Active,
                    _ => return Err(Error::UnexpectedChar(row, ch)),
                };
                cells.push(state);
                row_width += 1;
            }
            if row == 0 {
                width = row_width;
            } else if row_width != width {
                return Err(Error::RaggedRow(row, row_width, width));
            }
            height += 1;
        }
        if width == 0 || height == 0 {
            return Err(Error::EmptyGrid);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }
}

impl Display for DenseGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let ch = match self.cells[self.index((row, col))] {
                    State::Floor => '.',
                    State::Inactive => 'L',
                    State::Active => '#',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
