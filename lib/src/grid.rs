//! The contract shared by the two grid representations.

use crate::state::State;

/// The abstract contract of a grid: a total mapping from coordinates to
/// cell states.
///
/// Reads never fail: a coordinate outside the known region reads as the
/// representation's default state. This makes unbounded domains expressible
/// without an explicit extent.
pub trait Grid {
    /// The coordinate type addressing a cell.
    type Coord;

    /// Reads the state at a coordinate.
    fn get(&self, coord: Self::Coord) -> State;

    /// Writes the state at a coordinate.
    ///
    /// Writing outside the representable region is a no-op.
    fn set(&mut self, coord: Self::Coord, state: State);

    /// Number of cells currently in the [`State::Active`] state.
    fn population(&self) -> usize;
}
