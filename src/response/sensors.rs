// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `/query/sensors` response parsing.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// Response from `GET /query/sensors`.
///
/// The first sensor is the thermostat's own (indoor) sensor, the second the
/// outdoor sensor when one is installed.
///
/// # Examples
///
/// ```
/// use colortouch_lib::response::SensorsResponse;
///
/// let json = r#"{"sensors": [{"name": "Thermostat", "temp": 71, "hum": 38}]}"#;
/// let response: SensorsResponse = serde_json::from_str(json).unwrap();
/// let sensors = response.into_readings();
/// assert_eq!(sensors[0].attribute("temp"), Some(71.0));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SensorsResponse {
    #[serde(default)]
    sensors: Option<Vec<SensorReading>>,
}

impl SensorsResponse {
    /// Consumes the response, returning the readings in device order.
    ///
    /// A `null` sensor list is treated as empty.
    #[must_use]
    pub fn into_readings(self) -> Vec<SensorReading> {
        self.sensors.unwrap_or_default()
    }
}

/// A single named sensor and its numeric attributes.
///
/// Any attribute may be missing; the T5800 series for instance reports no
/// humidity.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SensorReading {
    /// Sensor name, e.g. `Thermostat` or `Outdoor`.
    #[serde(default)]
    pub name: String,

    /// Temperature in the thermostat's units.
    #[serde(default)]
    pub temp: Option<f64>,

    /// Relative humidity in percent.
    #[serde(default)]
    pub hum: Option<f64>,

    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

impl SensorReading {
    /// Returns a numeric attribute by its wire name.
    ///
    /// Returns `None` if the attribute is missing or not a number.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<f64> {
        match name {
            "temp" => self.temp,
            "hum" => self.hum,
            _ => self.extra.get(name).and_then(Value::as_f64),
        }
    }
}
