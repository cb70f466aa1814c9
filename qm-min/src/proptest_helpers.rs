// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::logic_function::LogicFunction;
use proptest::prelude::*;

impl Arbitrary for LogicFunction {
    /// The maximum number of variables, 6 if not specified.
    type Parameters = Option<usize>;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(max_vars: Self::Parameters) -> Self::Strategy {
        let max_vars = max_vars.unwrap_or(6);
        // Generate a truth table, then shuffle the minterms so that discovery order varies.
        (1..=max_vars)
            .prop_flat_map(|num_vars| {
                prop::collection::vec(any::<bool>(), 1 << num_vars)
                    .prop_map(|table| {
                        table
                            .into_iter()
                            .enumerate()
                            .filter_map(|(index, value)| value.then(|| index as u64))
                            .collect::<Vec<_>>()
                    })
                    .prop_shuffle()
                    .prop_map(move |indices| {
                        LogicFunction::from_minterms(num_vars, indices)
                            .expect("indices are below 2^num_vars")
                    })
            })
            .boxed()
    }
}
