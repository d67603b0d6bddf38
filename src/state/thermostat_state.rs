// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Complete cached view of one thermostat.

use crate::response::{ApiInfo, SensorReading};

use super::{ControlState, SettingsState};

/// Index of the thermostat's own sensor.
const INDOOR_SENSOR: usize = 0;
/// Index of the outdoor sensor, when installed.
const OUTDOOR_SENSOR: usize = 1;

/// Everything known about a thermostat since it was last refreshed.
///
/// # Examples
///
/// ```
/// use colortouch_lib::state::ThermostatState;
///
/// let state = ThermostatState::new();
/// assert!(state.api_info().is_none());
/// assert!(state.control().mode().is_none());
/// assert_eq!(state.indoor_temperature(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThermostatState {
    pub(crate) api: Option<ApiInfo>,
    pub(crate) control: ControlState,
    pub(crate) settings: SettingsState,
    pub(crate) sensors: Vec<SensorReading>,
}

impl ThermostatState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the API information from the last successful login.
    #[must_use]
    pub fn api_info(&self) -> Option<&ApiInfo> {
        self.api.as_ref()
    }

    /// Gets the cached control fields.
    #[must_use]
    pub fn control(&self) -> &ControlState {
        &self.control
    }

    /// Gets the cached settings fields.
    #[must_use]
    pub fn settings(&self) -> &SettingsState {
        &self.settings
    }

    /// Gets every cached sensor reading in device order.
    #[must_use]
    pub fn sensors(&self) -> &[SensorReading] {
        &self.sensors
    }

    /// Gets one numeric attribute of one sensor.
    ///
    /// Returns `None` when the sensor does not exist or does not report
    /// the attribute.
    #[must_use]
    pub fn sensor_reading(&self, index: usize, attribute: &str) -> Option<f64> {
        self.sensors.get(index)?.attribute(attribute)
    }

    /// Gets the indoor temperature.
    #[must_use]
    pub fn indoor_temperature(&self) -> Option<f64> {
        self.sensor_reading(INDOOR_SENSOR, "temp")
    }

    /// Gets the indoor relative humidity.
    #[must_use]
    pub fn indoor_humidity(&self) -> Option<f64> {
        self.sensor_reading(INDOOR_SENSOR, "hum")
    }

    /// Gets the outdoor temperature.
    #[must_use]
    pub fn outdoor_temperature(&self) -> Option<f64> {
        self.sensor_reading(OUTDOOR_SENSOR, "temp")
    }

    /// Gets the outdoor relative humidity.
    #[must_use]
    pub fn outdoor_humidity(&self) -> Option<f64> {
        self.sensor_reading(OUTDOOR_SENSOR, "hum")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::SensorsResponse;

    fn with_sensors(json: &str) -> ThermostatState {
        ThermostatState {
            sensors: serde_json::from_str::<SensorsResponse>(json)
                .unwrap()
                .into_readings(),
            ..ThermostatState::default()
        }
    }

    #[test]
    fn indoor_only() {
        let state = with_sensors(r#"{"sensors": [{"name": "Thermostat", "temp": 70}]}"#);
        assert_eq!(state.indoor_temperature(), Some(70.0));
        assert_eq!(state.indoor_humidity(), None);
        assert_eq!(state.outdoor_temperature(), None);
    }

    #[test]
    fn indoor_and_outdoor() {
        let state = with_sensors(
            r#"{"sensors": [
                {"name": "Thermostat", "temp": 70, "hum": 44},
                {"name": "Outdoor", "temp": 31, "hum": 80}
            ]}"#,
        );
        assert_eq!(state.indoor_humidity(), Some(44.0));
        assert_eq!(state.outdoor_temperature(), Some(31.0));
        assert_eq!(state.outdoor_humidity(), Some(80.0));
        assert_eq!(state.sensor_reading(5, "temp"), None);
    }

    #[test]
    fn empty_state_reads_nothing() {
        let state = ThermostatState::new();
        assert!(state.sensors().is_empty());
        assert_eq!(state.sensor_reading(0, "temp"), None);
        assert_eq!(state.settings().temperature_units(), None);
    }
}
