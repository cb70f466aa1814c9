// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    cover::{CoverAlgebraicDisplay, CoverMatrixDisplay},
    errors::InputError,
    pattern::{Pattern, VariableNames},
};
use indexmap::IndexSet;
use std::{collections::BTreeSet, slice};

/// An ordered, duplicate-free list of implicants whose sum is the minimized function.
#[derive(Clone, PartialEq, Eq)]
pub struct Cover {
    width: usize,
    implicants: Vec<Pattern>,
}

impl Cover {
    /// Creates a cover over `width` variables, dropping duplicate implicants.
    ///
    /// Panics if an implicant does not have width `width`.
    pub fn new(width: usize, implicants: impl IntoIterator<Item = Pattern>) -> Self {
        let implicants: IndexSet<_> = implicants.into_iter().collect();
        for implicant in &implicants {
            assert_eq!(
                implicant.width(),
                width,
                "implicant {} must have width {}",
                implicant,
                width
            );
        }
        Self {
            width,
            implicants: implicants.into_iter().collect(),
        }
    }

    #[inline]
    pub(super) fn from_selected(width: usize, implicants: IndexSet<Pattern>) -> Self {
        Self {
            width,
            implicants: implicants.into_iter().collect(),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn implicants(&self) -> &[Pattern] {
        &self.implicants
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Pattern> {
        self.implicants.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.implicants.len()
    }

    /// An empty cover is the constant false function.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.implicants.is_empty()
    }

    /// Returns true if the cover contains the all-wildcard implicant.
    pub fn is_tautology(&self) -> bool {
        self.implicants.contains(&Pattern::universe(self.width))
    }

    /// Evaluates the sum of products at a minterm index.
    pub fn evaluate(&self, index: u64) -> bool {
        self.implicants
            .iter()
            .any(|implicant| implicant.covers_index(index))
    }

    /// Returns the union of the minterms covered by every implicant.
    pub fn covered_indices(&self) -> BTreeSet<u64> {
        self.implicants
            .iter()
            .flat_map(|implicant| implicant.minterm_indices())
            .collect()
    }

    #[inline]
    pub fn matrix_display(&self) -> CoverMatrixDisplay<'_> {
        CoverMatrixDisplay::new(self)
    }

    #[inline]
    pub fn algebraic_display<'a>(
        &'a self,
        names: &'a VariableNames,
    ) -> Result<CoverAlgebraicDisplay<'a>, InputError> {
        CoverAlgebraicDisplay::new(self, names)
    }
}

impl<'a> IntoIterator for &'a Cover {
    type Item = &'a Pattern;
    type IntoIter = slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
