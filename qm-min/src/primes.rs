// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{errors::MinimizeError, pattern::Pattern};
use indexmap::IndexSet;
use itertools::Itertools;
use std::{collections::HashSet, slice};

/// The prime implicants of a function, in generation order.
///
/// Generation order is significant: the cover selector's fallback step picks the first prime
/// implicant in this order that covers a minterm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeImplicants {
    width: usize,
    patterns: Vec<Pattern>,
}

impl PrimeImplicants {
    /// Generates the prime implicants for a set of minterm patterns.
    ///
    /// Each generation merges every pair of patterns that [combine](Pattern::combine), and
    /// carries over the patterns that merged with nothing. Generations are repeated until one
    /// produces the same set of patterns it started with.
    ///
    /// Within a generation, merged patterns come first in pair order, followed by the
    /// survivors in their previous order. Duplicates keep their first position.
    pub fn generate<'a>(
        width: usize,
        minterms: impl IntoIterator<Item = &'a Pattern>,
    ) -> Result<Self, MinimizeError> {
        let mut current = IndexSet::new();
        for minterm in minterms {
            MinimizeError::check_width(width, minterm)?;
            current.insert(*minterm);
        }

        let mut generation = 0;
        loop {
            let (next, merge_count) = next_generation(&current);
            log::debug!(
                "generation {}: {} implicants, {} merges, {} carried into next",
                generation,
                current.len(),
                merge_count,
                next.len(),
            );
            // IndexSet equality ignores order.
            if next == current {
                break;
            }
            current = next;
            generation += 1;
        }

        Ok(Self {
            width,
            patterns: current.into_iter().collect(),
        })
    }

    #[cfg(test)]
    pub(crate) fn from_parts(width: usize, patterns: Vec<Pattern>) -> Self {
        Self { width, patterns }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn contains(&self, pattern: &Pattern) -> bool {
        self.patterns.contains(pattern)
    }
}

impl<'a> IntoIterator for &'a PrimeImplicants {
    type Item = &'a Pattern;
    type IntoIter = slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn next_generation(current: &IndexSet<Pattern>) -> (IndexSet<Pattern>, usize) {
    let mut next = IndexSet::with_capacity(current.len());
    let mut merged = HashSet::new();
    let mut merge_count = 0;

    for (a, b) in current.iter().tuple_combinations() {
        if let Some(combined) = a.combine(b) {
            log::trace!("merged {} and {} into {}", a, b, combined);
            next.insert(combined);
            merged.insert(*a);
            merged.insert(*b);
            merge_count += 1;
        }
    }

    next.extend(current.iter().filter(|pattern| !merged.contains(*pattern)));
    (next, merge_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic_function::LogicFunction;
    use proptest::prelude::*;

    fn patterns(strs: &[&str]) -> Vec<Pattern> {
        strs.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn minterms(indices: &[u64], width: usize) -> Vec<Pattern> {
        indices
            .iter()
            .map(|&index| Pattern::from_index(index, width))
            .collect()
    }

    #[test]
    fn test_basic() {
        let primes = PrimeImplicants::generate(4, &minterms(&[2, 3, 5, 6, 9], 4)).unwrap();
        // 0010 merges with 0011 and 0110; 0101 and 1001 have no partner.
        assert_eq!(
            primes.as_slice(),
            patterns(&["001-", "0-10", "0101", "1001"]),
            "generation order is merges first, then survivors"
        );
    }

    #[test]
    fn test_multiple_generations() {
        let primes =
            PrimeImplicants::generate(4, &minterms(&[4, 8, 10, 11, 12, 15], 4)).unwrap();
        let mut actual: Vec<_> = primes.iter().map(|p| p.to_string()).collect();
        actual.sort();
        assert_eq!(actual, ["-100", "1-00", "1-11", "10-0", "101-"]);

        let primes = PrimeImplicants::generate(3, &minterms(&[0, 1, 2, 3, 4, 5, 6, 7], 3)).unwrap();
        assert_eq!(primes.as_slice(), [Pattern::universe(3)]);
    }

    #[test]
    fn test_edge_cases() {
        let single = PrimeImplicants::generate(2, &minterms(&[0], 2)).unwrap();
        assert_eq!(single.as_slice(), patterns(&["00"]));

        let empty = PrimeImplicants::generate(3, std::iter::empty()).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.width(), 3);

        let duplicates = PrimeImplicants::generate(2, &minterms(&[1, 1, 3], 2)).unwrap();
        assert_eq!(duplicates.as_slice(), patterns(&["-1"]));
    }

    #[test]
    fn test_width_mismatch() {
        let input = patterns(&["010", "0110"]);
        assert_eq!(
            PrimeImplicants::generate(3, &input),
            Err(MinimizeError::WidthMismatch {
                pattern: input[1],
                expected: 3,
                actual: 4,
            })
        );
    }

    proptest! {
        #[test]
        fn proptest_fixed_point(function: LogicFunction) {
            let primes = function.prime_implicants().unwrap();
            let regenerated = PrimeImplicants::generate(primes.width(), primes).unwrap();
            prop_assert_eq!(&regenerated, primes, "prime implicants are a fixed point");

            for (a, b) in primes.iter().tuple_combinations() {
                prop_assert_eq!(a.combine(b), None, "{} and {} merge", a, b);
            }
        }

        #[test]
        fn proptest_primes_are_implicants(function: LogicFunction) {
            let primes = function.prime_implicants().unwrap();
            for prime in primes {
                for index in prime.minterm_indices() {
                    prop_assert!(
                        function.evaluate(index),
                        "prime {} covers {} outside the on-set",
                        prime,
                        index,
                    );
                }
            }
            for minterm in function.minterms() {
                prop_assert!(
                    primes.iter().any(|prime| prime.covers(minterm)),
                    "minterm {} is covered",
                    minterm,
                );
            }
        }
    }
}
