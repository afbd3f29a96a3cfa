// Copyright (c) 2022-2023 Bolt Labs Holdings, Inc
//
// This source code is licensed under both the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree and the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree.

//! Recover the constant term of a polynomial from a redundant set of shares,
//! some of which may be corrupt.
//!
//! Each share is a point `(x, y)` on an unknown polynomial of degree
//! `k - 1`, with `y` written as a string in some base between 2 and 36. The
//! secret is the polynomial's value at zero. Recovery works in three steps:
//!
//! 1. [`decode`](decode::decode) turns every encoded value into an exact
//!    integer.
//! 2. [`SecretSearch`] walks every subset of `k` shares in a fixed order.
//! 3. For each subset, [`interpolate_at_zero`] computes `P(0)` as an exact,
//!    unreduced fraction. The first subset whose fraction is a positive
//!    integer is accepted.
//!
//! All arithmetic is on arbitrary-precision integers; nothing is ever
//! rounded, and there is no modular reduction.
//!
//! ```
//! use shamir_recover::{find_secret, Point};
//!
//! // Four shares: three on y = 2x + 5 and a corrupt one at x = 1.
//! let points = [Point::new(1, 2), Point::new(2, 9), Point::new(3, 11), Point::new(4, 13)];
//! let outcome = find_secret(&points, 3).unwrap();
//! assert_eq!(outcome.secret().map(|s| s.to_string()), Some("5".to_string()));
//! ```

pub mod combinations;
pub mod config;
pub mod decode;
pub mod errors;
pub mod input;
mod interpolate;
mod search;
mod utils;

pub use config::{DigitPolicy, RecoveryConfig};
pub use errors::{CallerError, InternalError, Result};
pub use input::{EncodedShare, Keys, ShareFile};
pub use interpolate::{interpolate_at_zero, Point, RationalResult};
pub use search::{find_secret, SearchOutcome, SecretSearch};
