// Copyright (c) 2022-2023 Bolt Labs Holdings, Inc
//
// This source code is licensed under both the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree and the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree.

//! Decoding of share values written in an arbitrary radix.
//!
//! Digits are `0`-`9` followed by the letters, so base 36 is the largest
//! supported radix. Letters are case-insensitive: `a` and `A` are both 10.

use crate::{
    config::DigitPolicy,
    errors::{CallerError, Result},
};
use num_bigint::BigInt;
use num_traits::Zero;
use std::ops::RangeInclusive;
use tracing::error;

/// Radixes accepted by [`decode`].
pub const SUPPORTED_BASES: RangeInclusive<u32> = 2..=36;

/// Decode `value` in `base` using the lenient digit policy.
///
/// This is the common entry point: every symbol is accepted, see
/// [`DigitPolicy::Lenient`].
pub fn decode(value: &str, base: u32) -> Result<BigInt> {
    decode_with_policy(value, base, DigitPolicy::Lenient)
}

/// Decode `value` in `base`, most significant digit first.
pub fn decode_with_policy(value: &str, base: u32, policy: DigitPolicy) -> Result<BigInt> {
    if !SUPPORTED_BASES.contains(&base) {
        error!("Cannot decode share value in unsupported base {}", base);
        Err(CallerError::InvalidBase(base))?
    }
    if value.is_empty() && policy == DigitPolicy::Strict {
        error!("Refusing to decode an empty share value");
        Err(CallerError::EmptyValue)?
    }

    let radix = BigInt::from(base);
    match policy {
        // One digit per UTF-16 code unit: a character outside the basic
        // multilingual plane is two unknown symbols, so it adds two zeros.
        DigitPolicy::Lenient => Ok(value
            .encode_utf16()
            .fold(BigInt::zero(), |acc, unit| acc * &radix + lenient_digit(unit))),
        DigitPolicy::Strict => value.chars().try_fold(BigInt::zero(), |acc, symbol| {
            let digit = strict_digit(symbol, base)?;
            Ok(acc * &radix + digit)
        }),
    }
}

// `to_digit(36)` covers 0-9, a-z and A-Z with the same values in either case.
fn lenient_digit(unit: u16) -> u32 {
    char::from_u32(u32::from(unit))
        .and_then(|symbol| symbol.to_digit(36))
        .unwrap_or(0)
}

fn strict_digit(symbol: char, base: u32) -> Result<u32> {
    match symbol.to_digit(36) {
        Some(digit) if digit < base => Ok(digit),
        _ => {
            error!("Symbol {:?} is not a digit in base {}", symbol, base);
            Err(CallerError::InvalidDigit {
                digit: symbol,
                base,
            }
            .into())
        }
    }
}
