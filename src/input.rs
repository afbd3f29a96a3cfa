// Copyright (c) 2022-2023 Bolt Labs Holdings, Inc
//
// This source code is licensed under both the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree and the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree.

//! Loading shares from a JSON share file.
//!
//! A share file looks like this:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": 10, "value": "12" },
//!     "6": { "base": "4", "value": "213" }
//! }
//! ```
//!
//! Every key other than `keys` is the x-coordinate of a share, and its
//! `value` is the y-coordinate written in `base`.

use crate::{
    config::{DigitPolicy, RecoveryConfig},
    decode::decode_with_policy,
    errors::{CallerError, Result},
    interpolate::Point,
    search::{SearchOutcome, SecretSearch},
};
use num_bigint::BigInt;
use serde::Deserialize;
use std::{collections::BTreeMap, path::Path};
use tracing::{debug, error, instrument, warn};

/// The declared share counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Keys {
    /// Number of shares issued.
    pub n: usize,
    /// Number of shares needed to reconstruct, the polynomial degree plus
    /// one.
    pub k: usize,
}

#[derive(Deserialize)]
struct RawShareFile {
    keys: Keys,
    #[serde(flatten)]
    shares: BTreeMap<String, RawShare>,
}

#[derive(Deserialize)]
struct RawShare {
    base: RawBase,
    value: String,
}

/// The base may be written as a number or as a string holding one.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBase {
    Number(u64),
    Text(String),
}

impl RawBase {
    fn parse(&self, key: &str) -> Result<u32> {
        let base = match self {
            RawBase::Number(base) => u32::try_from(*base).ok(),
            RawBase::Text(text) => text.trim().parse::<u32>().ok(),
        };
        base.ok_or_else(|| {
            error!("Share {} has a base that is not a small unsigned integer", key);
            CallerError::MalformedInput(format!("share `{key}` has an invalid base"))
                .into()
        })
    }
}

/// One share as written in the file, before its value is decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedShare {
    x: BigInt,
    base: u32,
    value: String,
}

impl EncodedShare {
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Decode the value into a [`Point`].
    pub fn decode(&self, policy: DigitPolicy) -> Result<Point> {
        let y = decode_with_policy(&self.value, self.base, policy)?;
        Ok(Point::new(self.x.clone(), y))
    }
}

/// A parsed share file. Shares are ordered by ascending x-coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareFile {
    keys: Keys,
    shares: Vec<EncodedShare>,
}

impl ShareFile {
    /// Read and parse the share file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|err| {
            error!("Could not read share file {}: {}", path.display(), err);
            CallerError::Io {
                path: path.display().to_string(),
                reason: err.to_string(),
            }
        })?;
        Self::from_json_str(&json)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawShareFile = serde_json::from_str(json).map_err(|err| {
            error!("Share file is not valid: {}", err);
            CallerError::MalformedInput(err.to_string())
        })?;

        let mut shares = raw
            .shares
            .iter()
            .map(|(key, share)| -> Result<EncodedShare> {
                let x = key.trim().parse::<BigInt>().map_err(|_| {
                    error!("Share key {:?} is not an integer", key);
                    CallerError::MalformedInput(format!("share key `{key}` is not an integer"))
                })?;
                Ok(EncodedShare {
                    x,
                    base: share.base.parse(key)?,
                    value: share.value.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        shares.sort_by(|a, b| a.x.cmp(&b.x));

        if let Some(pair) = shares.windows(2).find(|pair| pair[0].x == pair[1].x) {
            error!("Two shares claim the x-coordinate {}", pair[0].x);
            Err(CallerError::MalformedInput(format!(
                "duplicate x-coordinate {}",
                pair[0].x
            )))?
        }

        if raw.keys.n != shares.len() {
            warn!(
                "Share file declares n = {} but contains {} shares",
                raw.keys.n,
                shares.len()
            );
        }
        debug!(
            "Loaded {} shares with threshold k = {}",
            shares.len(),
            raw.keys.k
        );

        Ok(Self {
            keys: raw.keys,
            shares,
        })
    }

    pub fn keys(&self) -> Keys {
        self.keys
    }

    pub fn shares(&self) -> &[EncodedShare] {
        &self.shares
    }

    /// Decode every share once.
    pub fn decode_points(&self, policy: DigitPolicy) -> Result<Vec<Point>> {
        self.shares
            .iter()
            .map(|share| share.decode(policy))
            .collect()
    }

    /// Decode the shares and search for the secret.
    #[instrument(skip_all, err(Debug))]
    pub fn recover(&self, config: &RecoveryConfig) -> Result<SearchOutcome> {
        let points = self.decode_points(config.digit_policy())?;
        SecretSearch::new(config.clone()).run(&points, self.keys.k)
    }
}
