// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::pattern::Pattern;
use thiserror::Error;

/// Invalid input supplied while constructing a logic function or naming its variables.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("a logic function needs at least one variable")]
    NoVariables,

    #[error("{count} variables requested, but at most {max} are supported")]
    TooManyVariables { count: usize, max: usize },

    #[error("minterm {index} is out of range for {num_vars} variables")]
    IndexOutOfRange { index: u64, num_vars: usize },

    #[error("invalid character {ch:?} at position {position} of the truth table (expected '0' or '1')")]
    InvalidCharacter { ch: char, position: usize },

    #[error("truth table length {len} is not a power of two greater than 1")]
    TruthTableLength { len: usize },
}

/// A string could not be parsed as a [`Pattern`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvalidPattern {
    #[error("pattern is empty")]
    Empty,

    #[error("pattern has {len} symbols, but at most {max} are supported", max = Pattern::MAX_WIDTH)]
    TooWide { len: usize },

    #[error("invalid symbol {ch:?} at position {position} (expected '0', '1' or '-')")]
    Symbol { ch: char, position: usize },
}

/// An internal consistency fault detected during minimization.
///
/// These can only occur if the patterns handed to the generator or the selector violate
/// their contracts, so they are never retried.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MinimizeError {
    #[error("pattern {pattern} has width {actual}, expected {expected}")]
    WidthMismatch {
        pattern: Pattern,
        expected: usize,
        actual: usize,
    },

    #[error("minterm {minterm} is not covered by any prime implicant")]
    UncoveredMinterm { minterm: Pattern },
}

impl MinimizeError {
    pub(crate) fn check_width(expected: usize, pattern: &Pattern) -> Result<(), Self> {
        if pattern.width() == expected {
            Ok(())
        } else {
            Err(Self::WidthMismatch {
                pattern: *pattern,
                expected,
                actual: pattern.width(),
            })
        }
    }
}
