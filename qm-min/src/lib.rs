// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Two-level minimization of single-output Boolean functions with the Quine-McCluskey method.
//!
//! A [`LogicFunction`](logic_function::LogicFunction) is built from a list of minterms or a
//! truth table. Its [prime implicants](primes::PrimeImplicants) are generated by repeatedly
//! merging patterns that differ in one position, and a [`Cover`](cover::Cover) is then
//! selected from them: essential implicants first, then the first prime implicant in
//! generation order for each minterm that is still uncovered.

pub mod cover;
pub mod errors;
pub mod logic_function;
pub mod pattern;
pub mod primes;
#[cfg(any(test, feature = "proptest1"))]
mod proptest_helpers;
