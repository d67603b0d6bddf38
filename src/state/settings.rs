// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cached `/settings` fields.

use crate::command::SettingsCommand;
use crate::error::DeviceError;
use crate::response::InfoResponse;
use crate::types::{Humidity, SchedulePart, TemperatureUnits};

/// Last known values of the fields written through `/settings`.
///
/// Every field is `None` until the first successful info refresh. After a
/// refresh the humidity setpoints stay `None` on models that do not report
/// them, while `humidifier_active` becomes `Some(false)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsState {
    pub(crate) name: Option<String>,
    pub(crate) temperature_units: Option<TemperatureUnits>,
    pub(crate) schedule_active: Option<bool>,
    pub(crate) schedule_part: Option<SchedulePart>,
    pub(crate) humidity_setpoint: Option<Humidity>,
    pub(crate) dehumidify_setpoint: Option<Humidity>,
    pub(crate) humidifier_active: Option<bool>,
}

impl SettingsState {
    /// Gets the thermostat name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Gets the temperature units.
    #[must_use]
    pub fn temperature_units(&self) -> Option<TemperatureUnits> {
        self.temperature_units
    }

    /// Gets whether the programmed schedule is running.
    ///
    /// `Some(false)` means the thermostat is holding its setpoints.
    #[must_use]
    pub fn schedule_active(&self) -> Option<bool> {
        self.schedule_active
    }

    /// Returns `true` if the thermostat is known to be on temperature hold.
    #[must_use]
    pub fn is_on_hold(&self) -> bool {
        self.schedule_active == Some(false)
    }

    /// Gets the current schedule period.
    #[must_use]
    pub fn schedule_part(&self) -> Option<SchedulePart> {
        self.schedule_part
    }

    /// Gets the humidifier setpoint.
    #[must_use]
    pub fn humidity_setpoint(&self) -> Option<Humidity> {
        self.humidity_setpoint
    }

    /// Gets the dehumidifier setpoint.
    #[must_use]
    pub fn dehumidify_setpoint(&self) -> Option<Humidity> {
        self.dehumidify_setpoint
    }

    /// Gets whether a humidifier is active.
    #[must_use]
    pub fn humidifier_active(&self) -> Option<bool> {
        self.humidifier_active
    }

    /// Overwrites every field from an info response.
    pub(crate) fn apply_info(&mut self, info: &InfoResponse) {
        self.name = Some(info.name.clone());
        self.temperature_units = Some(info.tempunits);
        self.schedule_active = Some(info.schedule);
        self.schedule_part = info.schedulepart;
        self.humidity_setpoint = info.hum_setpoint;
        self.dehumidify_setpoint = info.dehum_setpoint;
        self.humidifier_active = Some(info.hum_active.unwrap_or(false));
    }

    /// Builds the `/settings` write from the cached fields.
    pub(crate) fn settings_command(&self) -> Result<SettingsCommand, DeviceError> {
        Ok(SettingsCommand {
            temperature_units: self
                .temperature_units
                .ok_or(DeviceError::StateUnknown("tempunits"))?,
            humidity_setpoint: self.humidity_setpoint,
            dehumidify_setpoint: self.dehumidify_setpoint,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(extra: &serde_json::Value) -> InfoResponse {
        let mut value = serde_json::json!({
            "name": "Den", "mode": 0, "state": 0, "fan": 0, "fanstate": 0,
            "tempunits": 0, "schedule": 0, "heattemp": 65, "cooltemp": 78,
            "setpointdelta": 3
        });
        for (key, field) in extra.as_object().unwrap() {
            value[key] = field.clone();
        }
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn apply_info_without_humidity() {
        let mut state = SettingsState::default();
        state.apply_info(&info(&serde_json::json!({})));

        assert_eq!(state.name(), Some("Den"));
        assert_eq!(state.temperature_units(), Some(TemperatureUnits::Fahrenheit));
        assert!(state.is_on_hold());
        assert_eq!(state.humidity_setpoint(), None);
        assert_eq!(state.dehumidify_setpoint(), None);
        assert_eq!(state.humidifier_active(), Some(false));
    }

    #[test]
    fn apply_info_clears_humidity_that_disappears() {
        let mut state = SettingsState::default();
        state.apply_info(&info(&serde_json::json!({"hum_setpoint": 30, "hum_active": 1})));
        assert_eq!(state.humidity_setpoint().map(|h| h.value()), Some(30));
        assert_eq!(state.humidifier_active(), Some(true));

        state.apply_info(&info(&serde_json::json!({})));
        assert_eq!(state.humidity_setpoint(), None);
    }

    #[test]
    fn settings_command_needs_units() {
        assert!(matches!(
            SettingsState::default().settings_command(),
            Err(DeviceError::StateUnknown("tempunits"))
        ));
    }

    #[test]
    fn unknown_state_is_not_hold() {
        assert!(!SettingsState::default().is_on_hold());
    }
}
