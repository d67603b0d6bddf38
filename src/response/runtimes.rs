// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `/query/runtimes` response parsing.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Response from `GET /query/runtimes`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimesResponse {
    #[serde(default)]
    runtimes: Vec<RuntimeRecord>,
}

impl RuntimesResponse {
    /// Consumes the response, returning records oldest first.
    #[must_use]
    pub fn into_records(self) -> Vec<RuntimeRecord> {
        self.runtimes
    }
}

/// Minutes each equipment stage ran during one day.
///
/// The device appends one record every 24 hours; the last record is the most
/// recent. Stages the equipment does not have are omitted by the firmware.
///
/// # Examples
///
/// ```
/// use colortouch_lib::response::RuntimeRecord;
///
/// let json = r#"{"ts": 1700006400, "heat1": 95, "cool1": 0}"#;
/// let record: RuntimeRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(record.heat1, Some(95));
/// assert_eq!(record.aux1, None);
/// assert!(record.timestamp().is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RuntimeRecord {
    /// Start of the day this record covers, as Unix seconds.
    pub ts: i64,

    /// First heat stage.
    #[serde(default)]
    pub heat1: Option<u32>,

    /// Second heat stage.
    #[serde(default)]
    pub heat2: Option<u32>,

    /// First cool stage.
    #[serde(default)]
    pub cool1: Option<u32>,

    /// Second cool stage.
    #[serde(default)]
    pub cool2: Option<u32>,

    /// First auxiliary heat stage.
    #[serde(default)]
    pub aux1: Option<u32>,

    /// Second auxiliary heat stage.
    #[serde(default)]
    pub aux2: Option<u32>,

    /// Free cooling.
    #[serde(default)]
    pub fc: Option<u32>,
}

impl RuntimeRecord {
    /// Returns the record timestamp, or `None` if it is out of range.
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.ts, 0)
    }

    /// Total heating minutes across all heat and auxiliary stages.
    ///
    /// Saturates at `u32::MAX`.
    #[must_use]
    pub fn total_heating(&self) -> u32 {
        saturating_total([self.heat1, self.heat2, self.aux1, self.aux2])
    }

    /// Total cooling minutes across both cool stages and free cooling.
    ///
    /// Saturates at `u32::MAX`.
    #[must_use]
    pub fn total_cooling(&self) -> u32 {
        saturating_total([self.cool1, self.cool2, self.fc])
    }
}

fn saturating_total<const N: usize>(minutes: [Option<u32>; N]) -> u32 {
    minutes
        .into_iter()
        .flatten()
        .fold(0, u32::saturating_add)
}
