//! Cell states.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a cell.
///
/// In the bounded seating automaton the three states are floor, an empty
/// seat, and an occupied seat. In the unbounded automaton only
/// [`Inactive`](State::Inactive) and [`Active`](State::Active) occur.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// Permanently inert. A floor cell never transitions.
    Floor,
    /// The default state: an empty seat, or a dead cube.
    #[default]
    Inactive,
    /// The counted state: an occupied seat, or an active cube.
    Active,
}
