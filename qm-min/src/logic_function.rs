// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    cover::Cover,
    errors::{InputError, MinimizeError},
    pattern::Pattern,
    primes::PrimeImplicants,
};
use indexmap::IndexSet;
use once_cell::unsync::OnceCell;

/// A single-output Boolean function, described by the minterms on which it is true.
///
/// Minterms keep the order they were discovered in: list order for
/// [`from_minterms`](Self::from_minterms) and ascending index for
/// [`from_truth_table`](Self::from_truth_table). That order decides which implicants the cover
/// selector considers first.
#[derive(Clone, Debug)]
pub struct LogicFunction {
    num_vars: usize,
    minterms: Vec<Pattern>,
    primes: OnceCell<PrimeImplicants>,
}

impl LogicFunction {
    /// Creates a function of `num_vars` variables that is true exactly at `indices`.
    ///
    /// Repeated indices are ignored after their first occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// use qm_min::{logic_function::LogicFunction, pattern::VariableNames};
    ///
    /// let function = LogicFunction::from_minterms(4, [2, 3, 5, 6, 9]).unwrap();
    /// let cover = function.minimize().unwrap();
    /// let names = VariableNames::letters(4).unwrap();
    ///
    /// assert_eq!(
    ///     cover.algebraic_display(&names).unwrap().to_string(),
    ///     "( A'B'C ) ∨ ( A'BC'D ) ∨ ( A'CD' ) ∨ ( AB'C'D )",
    /// );
    /// ```
    pub fn from_minterms(
        num_vars: usize,
        indices: impl IntoIterator<Item = u64>,
    ) -> Result<Self, InputError> {
        check_num_vars(num_vars)?;

        let mut seen = IndexSet::new();
        for index in indices {
            if num_vars < Pattern::MAX_WIDTH && index >> num_vars != 0 {
                return Err(InputError::IndexOutOfRange { index, num_vars });
            }
            seen.insert(index);
        }

        Ok(Self::new_unchecked(num_vars, seen))
    }

    /// Creates a function from its truth table.
    ///
    /// Character `i` of `table` is the value of the function at input `i`, so the table must
    /// consist of `0` and `1` and its length must be a power of two of at least 2.
    ///
    /// ```
    /// use qm_min::logic_function::LogicFunction;
    ///
    /// let function = LogicFunction::from_truth_table("0110").unwrap();
    /// assert_eq!(function.num_vars(), 2);
    /// assert_eq!(function.minterm_indices().collect::<Vec<_>>(), [1, 2]);
    /// ```
    pub fn from_truth_table(table: &str) -> Result<Self, InputError> {
        let mut indices = Vec::new();
        let mut len = 0usize;
        for (position, ch) in table.chars().enumerate() {
            match ch {
                '0' => {}
                '1' => indices.push(position as u64),
                _ => return Err(InputError::InvalidCharacter { ch, position }),
            }
            len += 1;
        }

        if len < 2 || !len.is_power_of_two() {
            return Err(InputError::TruthTableLength { len });
        }
        let num_vars = len.trailing_zeros() as usize;
        check_num_vars(num_vars)?;

        Ok(Self::new_unchecked(num_vars, indices))
    }

    fn new_unchecked(num_vars: usize, indices: impl IntoIterator<Item = u64>) -> Self {
        let minterms = indices
            .into_iter()
            .map(|index| Pattern::from_index(index, num_vars))
            .collect();
        Self {
            num_vars,
            minterms,
            primes: OnceCell::new(),
        }
    }

    #[inline]
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Returns the minterms as wildcard-free patterns, in discovery order.
    #[inline]
    pub fn minterms(&self) -> &[Pattern] {
        &self.minterms
    }

    pub fn minterm_indices(&self) -> impl Iterator<Item = u64> + '_ {
        self.minterms.iter().filter_map(|minterm| minterm.index())
    }

    /// Returns the value of the function at `index`.
    pub fn evaluate(&self, index: u64) -> bool {
        self.minterms
            .iter()
            .any(|minterm| minterm.covers_index(index))
    }

    /// Returns the prime implicants, generating them on first use.
    pub fn prime_implicants(&self) -> Result<&PrimeImplicants, MinimizeError> {
        self.primes
            .get_or_try_init(|| PrimeImplicants::generate(self.num_vars, &self.minterms))
    }

    /// Minimizes the function into a sum of prime implicants.
    ///
    /// Errors only on internal consistency faults.
    pub fn minimize(&self) -> Result<Cover, MinimizeError> {
        let primes = self.prime_implicants()?;
        let cover = Cover::select(primes, &self.minterms)?;
        log::debug!(
            "{} minterms reduced to {} of {} prime implicants",
            self.minterms.len(),
            cover.len(),
            primes.len(),
        );
        Ok(cover)
    }
}

fn check_num_vars(num_vars: usize) -> Result<(), InputError> {
    if num_vars == 0 {
        Err(InputError::NoVariables)
    } else if num_vars > Pattern::MAX_WIDTH {
        Err(InputError::TooManyVariables {
            count: num_vars,
            max: Pattern::MAX_WIDTH,
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minterms() {
        let function = LogicFunction::from_minterms(3, [5, 1, 5, 7]).unwrap();
        assert_eq!(function.num_vars(), 3);
        assert_eq!(
            function.minterm_indices().collect::<Vec<_>>(),
            [5, 1, 7],
            "duplicates dropped, discovery order kept"
        );
        assert!(function.evaluate(1));
        assert!(!function.evaluate(2));

        assert_eq!(
            LogicFunction::from_minterms(3, [8]).unwrap_err(),
            InputError::IndexOutOfRange {
                index: 8,
                num_vars: 3
            }
        );
        assert_eq!(
            LogicFunction::from_minterms(0, []).unwrap_err(),
            InputError::NoVariables
        );
        assert_eq!(
            LogicFunction::from_minterms(65, []).unwrap_err(),
            InputError::TooManyVariables { count: 65, max: 64 }
        );
        assert!(LogicFunction::from_minterms(64, [u64::MAX]).is_ok());
    }

    #[test]
    fn test_from_truth_table() {
        let function = LogicFunction::from_truth_table("0011011001000000").unwrap();
        assert_eq!(function.num_vars(), 4);
        assert_eq!(
            function.minterm_indices().collect::<Vec<_>>(),
            [2, 3, 5, 6, 9]
        );

        assert_eq!(
            LogicFunction::from_truth_table("01a1").unwrap_err(),
            InputError::InvalidCharacter {
                ch: 'a',
                position: 2
            }
        );
        for table in ["", "1", "011", "010101", "0110011"] {
            assert_eq!(
                LogicFunction::from_truth_table(table).unwrap_err(),
                InputError::TruthTableLength { len: table.len() },
                "table {:?}",
                table
            );
        }
    }

    #[test]
    fn test_minimize() {
        let function = LogicFunction::from_minterms(2, [0]).unwrap();
        let cover = function.minimize().unwrap();
        assert_eq!(cover.implicants(), ["00".parse::<Pattern>().unwrap()]);

        let function = LogicFunction::from_truth_table("0000").unwrap();
        assert!(function.minimize().unwrap().is_empty());
        assert!(function.prime_implicants().unwrap().is_empty());

        let function = LogicFunction::from_truth_table("11111111").unwrap();
        let cover = function.minimize().unwrap();
        assert!(cover.is_tautology());
        assert_eq!(cover.len(), 1);
    }

    #[test]
    fn test_prime_implicants_cached() {
        let function = LogicFunction::from_minterms(3, [0, 1, 3]).unwrap();
        let first = function.prime_implicants().unwrap() as *const PrimeImplicants;
        let second = function.prime_implicants().unwrap() as *const PrimeImplicants;
        assert_eq!(first, second, "prime implicants are only generated once");
    }
}
