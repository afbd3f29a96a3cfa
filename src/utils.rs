// Copyright (c) 2022-2023 Bolt Labs Holdings, Inc
//
// This source code is licensed under both the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree and the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree.

////////////////////////////
// Test Utility Functions //
////////////////////////////

/// Returns an rng to be used for testing, plus helpers for building shares
/// from random polynomials.
#[cfg(test)]
pub(crate) mod testing {
    use crate::Point;
    use num_bigint::{BigInt, BigUint, Sign};
    use num_traits::Zero;
    use rand::{
        rngs::{OsRng, StdRng},
        Rng, SeedableRng,
    };
    use tracing_subscriber::{
        filter::{LevelFilter, Targets},
        layer::SubscriberExt,
        util::SubscriberInitExt,
        EnvFilter, Layer,
    };

    /// Initialize any fields necessary for our tests. This should be called at
    /// the top of all our tests that need randomness.
    ///
    /// This will print the rng seed to stderr so that if a test fails, the
    /// failing seed can be recovered and used for debugging.
    pub(crate) fn init_testing() -> StdRng {
        let mut seeder = OsRng;
        let seed = seeder.gen();
        eprintln!(
            "To re-run test with the same randomness, use init_testing_with_seed() with the following seed:"
        );
        eprintln!("\t{seed:?}");
        StdRng::from_seed(seed)
    }

    /// A seeded version of [`init_testing`]. This function can be used when a
    /// test fails unexpectedly, and you want to reproduce the run using a
    /// specific RNG seed.
    ///
    /// **Additionally, turns on logging by default.** Avoid calling it from
    /// a normal unit test: tests that feed in bad shares on purpose would
    /// print error events while still passing.
    #[allow(unused)]
    pub(crate) fn init_testing_with_seed(seed: [u8; 32]) -> StdRng {
        let logging_level = EnvFilter::from_default_env()
            .max_level_hint()
            .unwrap_or(LevelFilter::DEBUG);

        // Only capture logging events from this crate.
        let targets = Targets::new().with_target("shamir_recover", logging_level);
        let stdout_layer = tracing_subscriber::fmt::layer()
            .pretty()
            .with_filter(targets);

        // It's okay if this fails. It just means logging has already been set up for
        // this thread.
        let _ = tracing_subscriber::registry().with(stdout_layer).try_init();

        StdRng::from_seed(seed)
    }

    /// Random integer with up to `bits` bits of magnitude and a random sign.
    pub(crate) fn random_bigint<R: Rng>(rng: &mut R, bits: usize) -> BigInt {
        let words = (bits + 31) / 32;
        let digits: Vec<u32> = (0..words).map(|_| rng.gen()).collect();
        let magnitude = BigUint::new(digits) >> (words * 32 - bits);
        let sign = if rng.gen() { Sign::Plus } else { Sign::Minus };
        BigInt::from_biguint(sign, magnitude)
    }

    /// Coefficients of a random polynomial with `t` terms, lowest degree
    /// first. The constant term is always strictly positive so it can be
    /// recovered by the search.
    pub(crate) fn generate_polynomial<R: Rng>(t: usize, rng: &mut R) -> Vec<BigInt> {
        let mut coefficients = Vec::with_capacity(t);
        for i in 0..t {
            let coefficient = random_bigint(rng, 96);
            if i == 0 {
                let constant = BigInt::from(coefficient.magnitude().clone());
                coefficients.push(if constant.is_zero() {
                    BigInt::from(1)
                } else {
                    constant
                });
            } else {
                coefficients.push(coefficient);
            }
        }
        coefficients
    }

    pub(crate) fn evaluate_polynomial(coefficients: &[BigInt], x: &BigInt) -> BigInt {
        coefficients
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, coef| acc * x + coef)
    }

    /// Shares of the polynomial at each of `xs`.
    pub(crate) fn sample_points(
        coefficients: &[BigInt],
        xs: impl IntoIterator<Item = i64>,
    ) -> Vec<Point> {
        xs.into_iter()
            .map(|x| {
                let x = BigInt::from(x);
                let y = evaluate_polynomial(coefficients, &x);
                Point::new(x, y)
            })
            .collect()
    }

    #[test]
    fn evaluates_known_polynomial() {
        // 1 + 2x + 3x^2 at x = 2
        let coefficients = [1, 2, 3].map(BigInt::from);
        assert_eq!(
            evaluate_polynomial(&coefficients, &BigInt::from(2)),
            BigInt::from(17)
        );
    }

    #[test]
    fn random_polynomial_has_positive_constant() {
        let mut rng = init_testing();
        for _ in 0..50 {
            let coefficients = generate_polynomial(4, &mut rng);
            assert_eq!(coefficients.len(), 4);
            assert!(coefficients[0] > BigInt::zero());
        }
    }
}
