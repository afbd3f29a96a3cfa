// Copyright (c) 2022-2023 Bolt Labs Holdings, Inc
//
// This source code is licensed under both the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree and the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree.

//! Error types for share decoding, interpolation and search.

use thiserror::Error;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, InternalError>;

/// Errors that can occur while recovering a secret.
#[derive(Clone, Eq, PartialEq, Error, Debug)]
pub enum InternalError {
    /// The calling application handed us something we cannot use.
    #[error("caller error: {0}")]
    CallingApplicationMistake(CallerError),
    /// Interpolation produced a zero denominator where a quotient was
    /// required. This only happens when two points share an x-coordinate.
    #[error("interpolation is degenerate (duplicate x-coordinates)")]
    DegenerateInterpolation,
}

/// Errors caused by the input handed to the library.
#[derive(Clone, Eq, PartialEq, Error, Debug)]
pub enum CallerError {
    #[error("could not read `{path}`: {reason}")]
    Io { path: String, reason: String },
    #[error("malformed share file: {0}")]
    MalformedInput(String),
    #[error("base {0} is outside the supported range 2..=36")]
    InvalidBase(u32),
    #[error("character {digit:?} is not a valid digit in base {base}")]
    InvalidDigit { digit: char, base: u32 },
    #[error("empty value string")]
    EmptyValue,
}

impl From<CallerError> for InternalError {
    fn from(err: CallerError) -> Self {
        InternalError::CallingApplicationMistake(err)
    }
}
