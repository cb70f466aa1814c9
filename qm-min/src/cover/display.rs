// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    cover::Cover,
    errors::InputError,
    pattern::{Pattern, VariableNames},
};
use itertools::{Itertools, Position};
use std::{borrow::Cow, fmt};

impl fmt::Debug for Cover {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Cover")
            .field(&format_args!(
                "{}",
                self.matrix_display().with_separator(" + ", false)
            ))
            .finish()
    }
}

/// Displays a cover as one `01-` pattern per implicant.
///
/// An empty cover displays as the constant `0`.
#[derive(Clone, Debug)]
pub struct CoverMatrixDisplay<'a> {
    cover: &'a Cover,
    separator: (Cow<'a, str>, bool),
}

impl<'a> CoverMatrixDisplay<'a> {
    pub fn new(cover: &'a Cover) -> Self {
        Self {
            cover,
            separator: (Cow::Borrowed("\n"), true),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<Cow<'a, str>>, print_last: bool) -> Self {
        self.separator = (separator.into(), print_last);
        self
    }
}

impl<'a> fmt::Display for CoverMatrixDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (separator, print_last) = &self.separator;
        if self.cover.is_empty() {
            write!(f, "0")?;
            if *print_last {
                write!(f, "{}", separator)?;
            }
            return Ok(());
        }
        let implicant_count = self.cover.len();
        for (ix, implicant) in self.cover.iter().enumerate() {
            write!(f, "{}", implicant)?;
            if *print_last || ix < implicant_count - 1 {
                write!(f, "{}", separator)?;
            }
        }
        Ok(())
    }
}

/// Displays a cover as a sum of products, e.g. `( A'B ) ∨ ( CD' )`.
///
/// An empty cover displays as the constant `0`.
#[derive(Clone, Debug)]
pub struct CoverAlgebraicDisplay<'a> {
    cover: &'a Cover,
    names: &'a VariableNames,
    separator: Cow<'a, str>,
    parentheses: bool,
}

impl<'a> CoverAlgebraicDisplay<'a> {
    /// Fails if `names` has fewer names than the cover has variables.
    pub fn new(cover: &'a Cover, names: &'a VariableNames) -> Result<Self, InputError> {
        names.check(cover.width())?;
        Ok(Self {
            cover,
            names,
            separator: Cow::Borrowed(" ∨ "),
            parentheses: true,
        })
    }

    pub fn with_separator(mut self, separator: impl Into<Cow<'a, str>>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Whether to wrap each product in `( ... )`.
    pub fn with_parentheses(mut self, parentheses: bool) -> Self {
        self.parentheses = parentheses;
        self
    }

    fn write_product(&self, f: &mut fmt::Formatter, implicant: &Pattern) -> fmt::Result {
        let product = implicant.algebraic_display(self.names).map_err(|_| fmt::Error)?;
        if self.parentheses && implicant.wildcard_count() < implicant.width() {
            write!(f, "( {} )", product)
        } else {
            write!(f, "{}", product)
        }
    }
}

impl<'a> fmt::Display for CoverAlgebraicDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.cover.is_empty() {
            return write!(f, "0");
        }
        for elem in self.cover.iter().with_position() {
            match elem {
                Position::First(implicant) | Position::Middle(implicant) => {
                    self.write_product(f, implicant)?;
                    write!(f, "{}", self.separator)?;
                }
                Position::Last(implicant) | Position::Only(implicant) => {
                    self.write_product(f, implicant)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cover(width: usize, strs: &[&str]) -> Cover {
        Cover::new(width, strs.iter().map(|s| s.parse().unwrap()))
    }

    #[test]
    fn test_algebraic() {
        let names = VariableNames::letters(4).unwrap();
        let cover = cover(4, &["001-", "0101", "0-10", "1001"]);
        assert_eq!(
            cover.algebraic_display(&names).unwrap().to_string(),
            "( A'B'C ) ∨ ( A'BC'D ) ∨ ( A'CD' ) ∨ ( AB'C'D )"
        );
        assert_eq!(
            cover
                .algebraic_display(&names)
                .unwrap()
                .with_separator(" + ")
                .with_parentheses(false)
                .to_string(),
            "A'B'C + A'BC'D + A'CD' + AB'C'D"
        );
    }

    #[test]
    fn test_algebraic_constants() {
        let names = VariableNames::letters(3).unwrap();
        assert_eq!(
            Cover::new(3, []).algebraic_display(&names).unwrap().to_string(),
            "0"
        );
        assert_eq!(
            cover(3, &["---"]).algebraic_display(&names).unwrap().to_string(),
            "1"
        );
        assert_eq!(
            cover(2, &["1-"]).algebraic_display(&names).unwrap().to_string(),
            "( A )"
        );
    }

    #[test]
    fn test_algebraic_names_checked() {
        let names = VariableNames::letters(2).unwrap();
        assert_eq!(
            cover(3, &["01-"]).algebraic_display(&names).unwrap_err(),
            InputError::TooManyVariables { count: 3, max: 2 }
        );
    }

    #[test]
    fn test_matrix() {
        let cover = cover(3, &["01-", "1-0"]);
        assert_eq!(cover.matrix_display().to_string(), "01-\n1-0\n");
        assert_eq!(
            cover.matrix_display().with_separator(", ", false).to_string(),
            "01-, 1-0"
        );
        assert_eq!(format!("{:?}", cover), "Cover(01- + 1-0)");
        assert_eq!(Cover::new(3, []).matrix_display().to_string(), "0\n");
        assert_eq!(
            Cover::new(3, []).matrix_display().with_separator(", ", false).to_string(),
            "0"
        );
        assert_eq!(format!("{:?}", Cover::new(3, [])), "Cover(0)");
    }
}
