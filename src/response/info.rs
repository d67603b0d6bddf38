// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `/query/info` response parsing.

use serde::Deserialize;

use super::{flag, optional_flag};
use crate::types::{FanMode, FanState, Humidity, Mode, RunState, SchedulePart, TemperatureUnits};

/// Response from `GET /query/info`.
///
/// Carries both the fields written back through `/control` and those written
/// through `/settings`. Humidity fields are missing on models without
/// humidity control (e.g. the T5800 series) and stay `None` in that case.
///
/// # Examples
///
/// ```
/// use colortouch_lib::response::InfoResponse;
/// use colortouch_lib::types::Mode;
///
/// let json = r#"{
///     "name": "Hallway", "mode": 3, "state": 0, "fan": 0, "fanstate": 0,
///     "tempunits": 0, "schedule": 1, "heattemp": 68, "cooltemp": 72,
///     "setpointdelta": 2
/// }"#;
/// let info: InfoResponse = serde_json::from_str(json).unwrap();
/// assert_eq!(info.mode, Mode::Auto);
/// assert!(info.schedule);
/// assert!(info.hum_setpoint.is_none());
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct InfoResponse {
    /// Thermostat name.
    pub name: String,

    /// Current mode.
    pub mode: Mode,

    /// Equipment run state.
    pub state: RunState,

    /// Fan setting.
    pub fan: FanMode,

    /// Fan activity.
    pub fanstate: FanState,

    /// Units used for every temperature.
    pub tempunits: TemperatureUnits,

    /// `true` when the programmed schedule is running, `false` on hold.
    #[serde(deserialize_with = "flag")]
    pub schedule: bool,

    /// Current schedule period.
    #[serde(default)]
    pub schedulepart: Option<SchedulePart>,

    /// Heat setpoint.
    pub heattemp: f64,

    /// Cool setpoint.
    pub cooltemp: f64,

    /// Minimum gap between heat and cool setpoints in auto mode.
    pub setpointdelta: f64,

    /// Lowest heat setpoint the device accepts.
    #[serde(default)]
    pub heattempmin: Option<f64>,

    /// Highest heat setpoint the device accepts.
    #[serde(default)]
    pub heattempmax: Option<f64>,

    /// Lowest cool setpoint the device accepts.
    #[serde(default)]
    pub cooltempmin: Option<f64>,

    /// Highest cool setpoint the device accepts.
    #[serde(default)]
    pub cooltempmax: Option<f64>,

    /// Humidifier setpoint.
    #[serde(default)]
    pub hum_setpoint: Option<Humidity>,

    /// Dehumidifier setpoint.
    #[serde(default)]
    pub dehum_setpoint: Option<Humidity>,

    /// Whether a humidifier is active.
    #[serde(default, deserialize_with = "optional_flag")]
    pub hum_active: Option<bool>,
}
