// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{cover::Cover, errors::MinimizeError, pattern::Pattern, primes::PrimeImplicants};
use bitvec::prelude::*;
use indexmap::IndexSet;

impl Cover {
    /// Selects implicants from `primes` that together cover every minterm.
    ///
    /// First, every prime implicant that is the only one covering some minterm is selected
    /// (minterms are visited in the given order). Then each minterm not covered by an
    /// essential implicant picks the first prime implicant, in generation order, that covers
    /// it. Fallback picks do not mark minterms, so a later minterm may add its own pick even if
    /// an earlier pick already covers it.
    ///
    /// This is a greedy heuristic: the result always covers every minterm but is not
    /// guaranteed to have the fewest implicants.
    ///
    /// Returns an error if a minterm has a different width from the prime implicants, or if a
    /// minterm is not covered by any prime implicant.
    pub fn select(primes: &PrimeImplicants, minterms: &[Pattern]) -> Result<Self, MinimizeError> {
        let width = primes.width();
        for prime in primes {
            MinimizeError::check_width(width, prime)?;
        }
        for minterm in minterms {
            MinimizeError::check_width(width, minterm)?;
        }

        let mut covered = bitvec![0; minterms.len()];
        let mut selected = IndexSet::new();

        for minterm in minterms {
            let mut count = 0;
            let mut last = None;
            for prime in primes {
                if prime.covers(minterm) {
                    count += 1;
                    last = Some(prime);
                }
            }

            match last {
                None => return Err(MinimizeError::UncoveredMinterm { minterm: *minterm }),
                Some(essential) if count == 1 => {
                    if selected.insert(*essential) {
                        log::debug!("{} is essential for {}", essential, minterm);
                        mark_covered(essential, minterms, &mut covered);
                    }
                }
                Some(_) => {}
            }
        }

        for ix in 0..minterms.len() {
            if covered[ix] {
                continue;
            }
            let minterm = &minterms[ix];
            let pick = primes
                .iter()
                .find(|prime| prime.covers(minterm))
                .ok_or(MinimizeError::UncoveredMinterm { minterm: *minterm })?;
            log::debug!("{} picked to cover {}", pick, minterm);
            selected.insert(*pick);
        }

        Ok(Self::from_selected(width, selected))
    }
}

fn mark_covered(implicant: &Pattern, minterms: &[Pattern], covered: &mut BitSlice) {
    for (ix, minterm) in minterms.iter().enumerate() {
        if implicant.covers(minterm) {
            covered.set(ix, true);
        }
    }
}
