// Copyright (c) 2022-2023 Bolt Labs Holdings, Inc
//
// This source code is licensed under both the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree and the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree.

//! Fixed-size subsets of a candidate set.

use itertools::Itertools;

/// Lazily enumerate every `k`-element subset of `items`.
///
/// Subsets keep the input order of their elements and are produced in
/// lexicographic order of positions: every subset containing `items[0]`
/// comes before every subset without it, and the same rule applies
/// recursively to the remainder. Choosing zero elements yields one empty
/// subset; choosing more elements than there are yields nothing.
///
/// The returned iterator is `Clone`, so an enumeration can be restarted
/// from any point.
pub fn combinations<T>(items: &[T], k: usize) -> impl Iterator<Item = Vec<&T>> + Clone {
    items.iter().combinations(k)
}

/// Number of subsets [`combinations`] yields, `C(n, k)`.
pub fn combination_count(n: usize, k: usize) -> usize {
    num_integer::binomial(n, k)
}
