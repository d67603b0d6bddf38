// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! API root response parsing.

use serde::Deserialize;

/// Response from `GET /`, describing the device and its API level.
///
/// # Examples
///
/// ```
/// use colortouch_lib::response::ApiInfo;
///
/// let json = r#"{"api_ver": 5, "type": "residential", "model": "COLORTOUCH", "firmware": "5.28"}"#;
/// let info: ApiInfo = serde_json::from_str(json).unwrap();
/// assert_eq!(info.api_version, 5);
/// assert_eq!(info.device_type, "residential");
/// assert!(info.is_supported());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiInfo {
    /// Version of the local API the firmware implements.
    #[serde(rename = "api_ver")]
    pub api_version: u32,

    /// Device class, e.g. `residential` or `commercial`.
    #[serde(rename = "type")]
    pub device_type: String,

    /// Hardware model, on firmware that reports it.
    #[serde(default)]
    pub model: Option<String>,

    /// Firmware version string, on firmware that reports it.
    #[serde(default)]
    pub firmware: Option<String>,
}

impl ApiInfo {
    /// Oldest API version this library can talk to.
    pub const MIN_SUPPORTED_VERSION: u32 = 3;

    /// Returns `true` if the device API is recent enough.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.api_version >= Self::MIN_SUPPORTED_VERSION
    }
}
