// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::{InputError, InvalidPattern};
use std::{fmt, iter::FusedIterator, str::FromStr};

/// A single position of a [`Pattern`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    Zero,
    One,
    /// The position was merged out: either value matches.
    DontCare,
}

impl Symbol {
    /// Returns the character used for this symbol in the `01-` notation.
    pub fn as_char(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
            Self::DontCare => '-',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0' => Some(Self::Zero),
            '1' => Some(Self::One),
            '-' => Some(Self::DontCare),
            _ => None,
        }
    }
}

/// A fixed-width sequence of `0`, `1` and `-` symbols.
///
/// Position 0 is the leftmost symbol and corresponds to the most significant bit of a minterm
/// index, so `Pattern::from_index(6, 4)` displays as `0110`.
///
/// Internally a pattern is a pair of masks over the low `width` bits: `care` has a bit set for
/// every position that is not a wildcard, and `bits` holds the values of those positions. Bits
/// outside `care` are always zero, so derived equality and hashing compare symbol sequences.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern {
    width: u8,
    care: u64,
    bits: u64,
}

impl Pattern {
    /// The maximum number of variables a pattern can describe.
    pub const MAX_WIDTH: usize = 64;

    /// Returns the wildcard-free pattern for a minterm index.
    ///
    /// Panics if `width` is not in `1..=MAX_WIDTH` or `index` does not fit in `width` bits.
    pub fn from_index(index: u64, width: usize) -> Self {
        assert!(
            (1..=Self::MAX_WIDTH).contains(&width),
            "width {} must be in range 1..={}",
            width,
            Self::MAX_WIDTH
        );
        let care = width_mask(width);
        assert!(
            index & !care == 0,
            "index {} does not fit in {} bits",
            index,
            width
        );
        Self {
            width: width as u8,
            care,
            bits: index,
        }
    }

    /// Returns the pattern consisting only of wildcards, which covers every input.
    pub fn universe(width: usize) -> Self {
        assert!(
            (1..=Self::MAX_WIDTH).contains(&width),
            "width {} must be in range 1..={}",
            width,
            Self::MAX_WIDTH
        );
        Self {
            width: width as u8,
            care: 0,
            bits: 0,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn symbol(&self, pos: usize) -> Symbol {
        assert!(
            pos < self.width(),
            "position {} must be in range 0..{}",
            pos,
            self.width()
        );
        let bit = self.bit_for(pos);
        if self.care & bit == 0 {
            Symbol::DontCare
        } else if self.bits & bit == 0 {
            Symbol::Zero
        } else {
            Symbol::One
        }
    }

    /// Iterates over the symbols from left to right.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        (0..self.width()).map(move |pos| self.symbol(pos))
    }

    /// Returns true if this pattern has no wildcards.
    #[inline]
    pub fn is_minterm(&self) -> bool {
        self.care == width_mask(self.width())
    }

    #[inline]
    pub fn wildcard_count(&self) -> usize {
        self.width() - self.care.count_ones() as usize
    }

    /// Returns the minterm index, or `None` if this pattern has wildcards.
    pub fn index(&self) -> Option<u64> {
        self.is_minterm().then(|| self.bits)
    }

    /// Merges two patterns that differ in exactly one position.
    ///
    /// Both patterns must have the same width and wildcards in the same positions. The
    /// differing position becomes a wildcard in the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use qm_min::pattern::Pattern;
    ///
    /// let a: Pattern = "0110".parse().unwrap();
    /// let b: Pattern = "0111".parse().unwrap();
    /// let c: Pattern = "0000".parse().unwrap();
    ///
    /// assert_eq!(a.combine(&b), Some("011-".parse().unwrap()));
    /// assert_eq!(c.combine(&b), None);
    /// ```
    pub fn combine(&self, other: &Pattern) -> Option<Pattern> {
        if self.width != other.width || self.care != other.care {
            return None;
        }
        let difference = self.bits ^ other.bits;
        if difference.count_ones() != 1 {
            return None;
        }
        Some(Pattern {
            width: self.width,
            care: self.care & !difference,
            bits: self.bits & !difference,
        })
    }

    /// Returns true if every input matched by `other` is also matched by `self`.
    ///
    /// For a wildcard-free `other` this is the usual "implicant covers minterm" check: every
    /// non-wildcard symbol of `self` equals the corresponding symbol of `other`.
    pub fn covers(&self, other: &Pattern) -> bool {
        self.width == other.width
            && self.care & !other.care == 0
            && (self.bits ^ other.bits) & self.care == 0
    }

    #[inline]
    pub fn covers_index(&self, index: u64) -> bool {
        index & !width_mask(self.width()) == 0 && (index ^ self.bits) & self.care == 0
    }

    /// Iterates over the indices of all minterms this pattern covers, in ascending order.
    pub fn minterm_indices(&self) -> MintermIndices {
        MintermIndices {
            base: self.bits,
            free: !self.care & width_mask(self.width()),
            next: Some(0),
        }
    }

    #[inline]
    pub fn algebraic_display<'a>(
        &'a self,
        names: &'a VariableNames,
    ) -> Result<PatternAlgebraicDisplay<'a>, InputError> {
        names.check(self.width())?;
        Ok(PatternAlgebraicDisplay {
            pattern: self,
            names,
        })
    }

    #[inline]
    fn bit_for(&self, pos: usize) -> u64 {
        1 << (self.width() - 1 - pos)
    }
}

#[inline]
fn width_mask(width: usize) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1 << width) - 1
    }
}

impl FromStr for Pattern {
    type Err = InvalidPattern;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len == 0 {
            return Err(InvalidPattern::Empty);
        }
        if len > Self::MAX_WIDTH {
            return Err(InvalidPattern::TooWide { len });
        }

        let mut care = 0;
        let mut bits = 0;
        for (position, ch) in s.chars().enumerate() {
            care <<= 1;
            bits <<= 1;
            match Symbol::from_char(ch) {
                Some(Symbol::Zero) => care |= 1,
                Some(Symbol::One) => {
                    care |= 1;
                    bits |= 1;
                }
                Some(Symbol::DontCare) => {}
                None => return Err(InvalidPattern::Symbol { ch, position }),
            }
        }

        Ok(Self {
            width: len as u8,
            care,
            bits,
        })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for symbol in self.symbols() {
            write!(f, "{}", symbol.as_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Pattern")
            .field(&format_args!("{}", self))
            .finish()
    }
}

/// Iterator returned by [`Pattern::minterm_indices`].
#[derive(Clone, Debug)]
pub struct MintermIndices {
    base: u64,
    free: u64,
    next: Option<u64>,
}

impl Iterator for MintermIndices {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        // Walk the submasks of `free` in ascending order.
        let sub = self.next?;
        self.next = if sub == self.free {
            None
        } else {
            Some(sub.wrapping_sub(self.free) & self.free)
        };
        Some(self.base | sub)
    }
}

impl FusedIterator for MintermIndices {}

/// Names used for variables when rendering patterns as products of literals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableNames {
    names: Vec<String>,
}

impl VariableNames {
    /// The number of variables that can be named with single letters.
    pub const LETTER_BUDGET: usize = 26;

    /// Names `count` variables `A`, `B`, `C`, ...
    pub fn letters(count: usize) -> Result<Self, InputError> {
        if count > Self::LETTER_BUDGET {
            return Err(InputError::TooManyVariables {
                count,
                max: Self::LETTER_BUDGET,
            });
        }
        let names = ('A'..='Z').take(count).map(String::from).collect();
        Ok(Self { names })
    }

    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, ix: usize) -> Option<&str> {
        self.names.get(ix).map(String::as_str)
    }

    /// Checks that there is a name for each of `width` variables.
    pub fn check(&self, width: usize) -> Result<(), InputError> {
        if width > self.len() {
            Err(InputError::TooManyVariables {
                count: width,
                max: self.len(),
            })
        } else {
            Ok(())
        }
    }
}

/// Displays a pattern as a product of literals, e.g. `0-1` as `A'C`.
///
/// A `0` renders as the negated literal (name followed by `'`), a `1` as the plain literal and
/// a `-` is omitted. A pattern made only of wildcards renders as the constant `1`.
#[derive(Clone, Debug)]
pub struct PatternAlgebraicDisplay<'a> {
    pattern: &'a Pattern,
    names: &'a VariableNames,
}

impl<'a> fmt::Display for PatternAlgebraicDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.pattern.care == 0 {
            return write!(f, "1");
        }
        for (ix, symbol) in self.pattern.symbols().enumerate() {
            // Checked against the pattern width on construction.
            let name = self.names.name(ix).ok_or(fmt::Error)?;
            match symbol {
                Symbol::One => write!(f, "{}", name)?,
                Symbol::Zero => write!(f, "{}'", name)?,
                Symbol::DontCare => {}
            }
        }
        Ok(())
    }
}
