// Copyright (c) 2022-2023 Bolt Labs Holdings, Inc
//
// This source code is licensed under both the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree and the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree.

//! Tunables for a recovery run.

/// Largest candidate set that is searched exhaustively. C(12, k) peaks at
/// 924 subsets, which is cheap even with unreduced fractions.
pub const DEFAULT_EXHAUSTIVE_LIMIT: usize = 12;

/// How the base decoder treats digit symbols that do not fit the declared
/// base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DigitPolicy {
    /// Accept any symbol. Letters and numerals keep their base-36 value even
    /// when it exceeds the base; anything else counts as `0`.
    #[default]
    Lenient,
    /// Reject unknown symbols, digits not below the base, and empty values.
    Strict,
}

/// Configuration for [`SecretSearch`](crate::SecretSearch) and
/// [`recover`](crate::recover).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryConfig {
    exhaustive_limit: usize,
    digit_policy: DigitPolicy,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            exhaustive_limit: DEFAULT_EXHAUSTIVE_LIMIT,
            digit_policy: DigitPolicy::default(),
        }
    }
}

impl RecoveryConfig {
    /// Sets the largest number of points that is still searched
    /// exhaustively. Larger inputs take the first-k fallback.
    pub fn with_exhaustive_limit(mut self, limit: usize) -> Self {
        self.exhaustive_limit = limit;
        self
    }

    pub fn with_digit_policy(mut self, policy: DigitPolicy) -> Self {
        self.digit_policy = policy;
        self
    }

    pub fn exhaustive_limit(&self) -> usize {
        self.exhaustive_limit
    }

    pub fn digit_policy(&self) -> DigitPolicy {
        self.digit_policy
    }
}
