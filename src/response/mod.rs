// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for thermostat JSON payloads.
//!
//! Each response type corresponds to one endpoint of the local API. Fields
//! that only some firmware versions report are `Option`s so a missing value
//! is never mistaken for a real reading.

mod alerts;
mod api;
mod info;
mod outcome;
mod runtimes;
mod sensors;

pub use alerts::{Alert, AlertsResponse};
pub use api::ApiInfo;
pub use info::InfoResponse;
pub use outcome::CommandOutcome;
pub use runtimes::{RuntimeRecord, RuntimesResponse};
pub use sensors::{SensorReading, SensorsResponse};

use serde::de::{Deserializer, Error as _};
use serde::Deserialize;
use serde_json::Value;

/// Decodes a `0`/`1` (or JSON boolean) flag.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Bool(value) => Ok(value),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(D::Error::custom(format!("expected 0 or 1, found {n}"))),
        },
        other => Err(D::Error::custom(format!("expected 0 or 1, found {other}"))),
    }
}

/// Like [`flag`], for fields that may be missing. Use with `#[serde(default)]`.
pub(crate) fn optional_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    flag(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Flags {
        #[serde(deserialize_with = "flag")]
        required: bool,
        #[serde(default, deserialize_with = "optional_flag")]
        optional: Option<bool>,
    }

    #[test]
    fn flag_accepts_integers_and_booleans() {
        let flags: Flags = serde_json::from_str(r#"{"required": 1, "optional": false}"#).unwrap();
        assert!(flags.required);
        assert_eq!(flags.optional, Some(false));
    }

    #[test]
    fn optional_flag_missing_is_none() {
        let flags: Flags = serde_json::from_str(r#"{"required": 0}"#).unwrap();
        assert!(!flags.required);
        assert_eq!(flags.optional, None);
    }

    #[test]
    fn flag_rejects_other_values() {
        assert!(serde_json::from_str::<Flags>(r#"{"required": 2}"#).is_err());
        assert!(serde_json::from_str::<Flags>(r#"{"required": "on"}"#).is_err());
    }
}
