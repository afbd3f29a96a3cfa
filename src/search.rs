// Copyright (c) 2022-2023 Bolt Labs Holdings, Inc
//
// This source code is licensed under both the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree and the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree.

//! Search for a subset of shares that reconstructs a valid secret.
//!
//! Some shares may be corrupt. Every subset of exactly `k` shares is
//! interpolated at zero, in the order produced by
//! [`combinations`](crate::combinations::combinations), and the first one
//! whose value is an exact, strictly positive integer wins. That subset is
//! the *witness*.
//!
//! A run moves from idle to enumerating and ends in one of three states,
//! reported as a [`SearchOutcome`]:
//! - accepted, when a witness is found;
//! - exhausted, when every subset was rejected;
//! - fallback, when there are more shares than the configured exhaustive
//!   limit. The first `k` shares are then interpolated without any
//!   validation.

use crate::{
    combinations::combinations,
    config::RecoveryConfig,
    errors::Result,
    interpolate::{interpolate_at_zero, Point, RationalResult},
};
use num_bigint::BigInt;
use num_traits::Signed;
use tracing::{debug, info, instrument, trace, warn};

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// `witness` interpolates to the positive integer `secret`. `examined`
    /// counts the subsets tried, the witness included.
    Accepted {
        secret: BigInt,
        witness: Vec<Point>,
        examined: usize,
    },
    /// All `examined` subsets were rejected.
    Exhausted { examined: usize },
    /// The candidate set was too large to search. `secret` is the truncated
    /// quotient for the first `k` points and may be wrong, zero or negative.
    Fallback { secret: BigInt },
}

impl SearchOutcome {
    /// The recovered secret, if the search produced one.
    pub fn secret(&self) -> Option<&BigInt> {
        match self {
            SearchOutcome::Accepted { secret, .. } | SearchOutcome::Fallback { secret } => {
                Some(secret)
            }
            SearchOutcome::Exhausted { .. } => None,
        }
    }
}

/// Runs the subset search under a [`RecoveryConfig`].
#[derive(Debug, Clone, Default)]
pub struct SecretSearch {
    config: RecoveryConfig,
}

impl SecretSearch {
    pub fn new(config: RecoveryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RecoveryConfig {
        &self.config
    }

    /// Find the secret shared among `points` with reconstruction threshold
    /// `k`.
    ///
    /// Points with repeated x-coordinates are tolerated: subsets containing
    /// both of them are degenerate and simply rejected. The only error is a
    /// degenerate fallback interpolation.
    #[instrument(skip_all, err(Debug))]
    pub fn run(&self, points: &[Point], k: usize) -> Result<SearchOutcome> {
        if points.len() > self.config.exhaustive_limit() {
            warn!(
                "{} points exceed the exhaustive search limit of {}; interpolating the first {} without validation",
                points.len(),
                self.config.exhaustive_limit(),
                k
            );
            return self.fallback(points, k);
        }
        Ok(self.enumerate(points, k))
    }

    fn enumerate(&self, points: &[Point], k: usize) -> SearchOutcome {
        debug!(
            "Searching {} points for a {}-point witness",
            points.len(),
            k
        );
        let mut examined = 0;
        for subset in combinations(points, k) {
            examined += 1;
            let result = interpolate_at_zero(&subset);
            match acceptable_secret(&result) {
                Some(secret) => {
                    info!("Accepted subset {} with a positive integer secret", examined);
                    return SearchOutcome::Accepted {
                        secret,
                        witness: subset.into_iter().cloned().collect(),
                        examined,
                    };
                }
                None => trace!("Rejected subset {}", examined),
            }
        }
        info!("No acceptable subset among {} candidates", examined);
        SearchOutcome::Exhausted { examined }
    }

    fn fallback(&self, points: &[Point], k: usize) -> Result<SearchOutcome> {
        let first = &points[..k.min(points.len())];
        let secret = interpolate_at_zero(first).truncated_quotient()?;
        Ok(SearchOutcome::Fallback { secret })
    }
}

/// Search `points` with the default configuration.
pub fn find_secret(points: &[Point], k: usize) -> Result<SearchOutcome> {
    SecretSearch::default().run(points, k)
}

/// A subset is acceptable when its value at zero is an integer (no
/// remainder) and strictly positive. Degenerate results never are.
fn acceptable_secret(result: &RationalResult) -> Option<BigInt> {
    result
        .exact_quotient()
        .filter(|secret| secret.is_positive())
}
