//! Simulation configuration.

use crate::{
    dense::{DenseGrid, Neighborhood},
    error::Error,
    grid::Grid,
    rule::Rule,
    sparse::SparseGrid,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of generations a sparse simulation runs when none is configured.
const DEFAULT_GENERATIONS: usize = 6;

/// How a simulation ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// A step changed nothing; the grid is at a fixed point.
    Converged,
    /// The configured number of generations was reached.
    GenerationLimit,
}

/// The result of a finished simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Summary {
    /// Number of active cells in the final grid.
    pub population: usize,
    /// Number of generations applied.
    pub generations: usize,
    /// How the simulation ended.
    pub outcome: Outcome,
}

/// Simulation configuration.
///
/// The simulation will be run from this configuration:
///
/// ```
/// use casim_lib::{Config, Neighborhood};
///
/// let config = Config::new(2)
///     .set_rule_string("B0/S0123")
///     .set_neighborhood(Neighborhood::Adjacent);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// The rule string, in B/S notation.
    pub rule_string: String,

    /// Number of grid dimensions.
    ///
    /// 2 selects the bounded grid; 3 and 4 select the unbounded one.
    pub dimension: usize,

    /// Neighborhood strategy of the bounded grid.
    ///
    /// Ignored for dimensions above 2, where the neighborhood is always
    /// the full Moore neighborhood.
    pub neighborhood: Neighborhood,

    /// Number of generations to run.
    ///
    /// For the bounded grid this is an optional cap on top of the
    /// fixed-point check; `None` runs until convergence. For the unbounded
    /// grid `None` means 6 generations.
    pub generations: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rule_string: String::from("B3/S23"),
            dimension: 3,
            neighborhood: Neighborhood::default(),
            generations: None,
        }
    }
}

impl Config {
    /// Sets up a new configuration with the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            ..Self::default()
        }
    }

    /// Sets the rule string.
    pub fn set_rule_string<S: ToString>(mut self, rule_string: S) -> Self {
        self.rule_string = rule_string.to_string();
        self
    }

    /// Sets the dimension.
    pub fn set_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Sets the neighborhood strategy of the bounded grid.
    pub fn set_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    /// Sets the number of generations to run.
    pub fn set_generations<T: Into<Option<usize>>>(mut self, generations: T) -> Self {
        self.generations = generations.into();
        self
    }

    /// Parses the input grid and runs the simulation to completion.
    ///
    /// Returns an error if the rule string or the grid is invalid, or if
    /// the dimension is unsupported.
    pub fn run(&self, input: &str) -> Result<Summary, Error> {
        let rule: Rule = self.rule_string.parse()?;
        match self.dimension {
            2 => {
                let grid: DenseGrid = input.parse()?;
                let (grid, generations, outcome) =
                    grid.settle(self.neighborhood, &rule, self.generations);
                Ok(Summary {
                    population: grid.population(),
                    generations,
                    outcome,
                })
            }
            3 => self.run_sparse::<3>(input, &rule),
            4 => self.run_sparse::<4>(input, &rule),
            d => Err(Error::Dimension(d)),
        }
    }

    fn run_sparse<const D: usize>(&self, input: &str, rule: &Rule) -> Result<Summary, Error> {
        let generations = self.generations.unwrap_or(DEFAULT_GENERATIONS);
        let grid = SparseGrid::<D>::from_pattern(input)?.run(rule, generations);
        Ok(Summary {
            population: grid.population(),
            generations,
            outcome: Outcome::GenerationLimit,
        })
    }
}
