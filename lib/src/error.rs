//! All kinds of errors in this crate.

use ca_rules::ParseRuleError;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Unrecognized character {1:?} in row {0}.
    UnexpectedChar(usize, char),
    /// Row {0} is {1} cells wide, expected {2}.
    RaggedRow(usize, usize, usize),
    /// The input grid is empty.
    EmptyGrid,
    /// Invalid rule: {0}.
    ParseRule(#[from] ParseRuleError),
    /// Unsupported dimension: {0}. Supported dimensions are 2, 3 and 4.
    Dimension(usize),
}
