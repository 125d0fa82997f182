//! Transition rules.
//!
//! A rule is data, not code: a set of neighbor counts at which an inactive
//! cell activates (birth), and a set at which an active cell survives.
//! This covers both rule families the simulator is used with:
//!
//! - Conway's Life, `B3/S23`;
//! - the seating automaton, where an empty seat fills iff it has no
//!   occupied neighbor and an occupied seat empties once `crowd` or more
//!   neighbors are occupied — `B0/S0123` for a crowd threshold of 4.

use crate::{error::Error, state::State};
use ca_rules::ParseLife;
use std::str::FromStr;

/// A totalistic transition rule.
///
/// Rules can be parsed from B/S notation:
///
/// ```
/// use casim_lib::Rule;
///
/// let rule: Rule = "B3/S23".parse().unwrap();
/// assert_eq!(rule, Rule::life());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    /// Neighbor counts at which an inactive cell becomes active.
    birth: Vec<u8>,
    /// Neighbor counts at which an active cell stays active.
    survival: Vec<u8>,
}

impl Rule {
    /// Constructs a new rule from the birth and survival counts.
    pub fn new(birth: Vec<u8>, survival: Vec<u8>) -> Self {
        Self { birth, survival }
    }

    /// Conway's Game of Life, `B3/S23`.
    pub fn life() -> Self {
        Self::new(vec![3], vec![2, 3])
    }

    /// The seating rule with the given crowd threshold.
    ///
    /// An empty seat becomes occupied iff none of its neighbors are
    /// occupied; an occupied seat becomes empty iff at least `crowd` of
    /// its neighbors are occupied. The threshold is 4 for the adjacent
    /// neighborhood and 5 for the visible one.
    pub fn seating(crowd: u8) -> Self {
        Self::new(vec![0], (0..crowd).collect())
    }

    /// Decides the next state of one cell from its current state and the
    /// number of active neighbors.
    ///
    /// Total for every state and count; [`State::Floor`] never transitions.
    pub fn next_state(&self, state: State, active_neighbors: u8) -> State {
        match state {
            State::Floor => State::Floor,
            State::Inactive => {
                if self.birth.contains(&active_neighbors) {
                    State::Active
                } else {
                    State::Inactive
                }
            }
            State::Active => {
                if self.survival.contains(&active_neighbors) {
                    State::Active
                } else {
                    State::Inactive
                }
            }
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::life()
    }
}

/// A parser for the rule.
impl ParseLife for Rule {
    fn from_bs(b: Vec<u8>, s: Vec<u8>) -> Self {
        Self::new(b, s)
    }
}

impl FromStr for Rule {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        ParseLife::parse_rule(input).map_err(Error::ParseRule)
    }
}
