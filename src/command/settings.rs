// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `/settings` writes.

use super::{Command, FormBody};
use crate::types::{Humidity, TemperatureUnits};

/// Writes units and humidity setpoints.
///
/// The device ignores this write while its schedule is running, so it never
/// carries the `schedule` field; use [`ScheduleCommand`] for that.
///
/// Humidity setpoints the device never reported are left out of the body
/// rather than sent as placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsCommand {
    /// Temperature units.
    pub temperature_units: TemperatureUnits,
    /// Humidifier setpoint, if the device has one.
    pub humidity_setpoint: Option<Humidity>,
    /// Dehumidifier setpoint, if the device has one.
    pub dehumidify_setpoint: Option<Humidity>,
}

impl Command for SettingsCommand {
    fn path(&self) -> &'static str {
        "/settings"
    }

    fn form(&self) -> FormBody {
        FormBody::new()
            .field("tempunits", self.temperature_units.as_num())
            .optional_field("hum_setpoint", self.humidity_setpoint.map(|h| h.value()))
            .optional_field("dehum_setpoint", self.dehumidify_setpoint.map(|h| h.value()))
    }
}

/// Switches between the programmed schedule and temperature hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleCommand {
    /// `true` runs the schedule, `false` holds the current setpoints.
    pub active: bool,
}

impl Command for ScheduleCommand {
    fn path(&self) -> &'static str {
        "/settings"
    }

    fn form(&self) -> FormBody {
        FormBody::new().field("schedule", u8::from(self.active))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_with_humidity() {
        let cmd = SettingsCommand {
            temperature_units: TemperatureUnits::Celsius,
            humidity_setpoint: Some(Humidity::new(35).unwrap()),
            dehumidify_setpoint: Some(Humidity::new(60).unwrap()),
        };
        assert_eq!(
            cmd.form().encode(),
            "tempunits=1&hum_setpoint=35&dehum_setpoint=60"
        );
    }

    #[test]
    fn settings_without_humidity() {
        let cmd = SettingsCommand {
            temperature_units: TemperatureUnits::Fahrenheit,
            humidity_setpoint: None,
            dehumidify_setpoint: None,
        };
        assert_eq!(cmd.form().encode(), "tempunits=0");
    }

    #[test]
    fn schedule_is_sent_alone() {
        assert_eq!(ScheduleCommand { active: false }.form().encode(), "schedule=0");
        assert_eq!(ScheduleCommand { active: true }.form().encode(), "schedule=1");
        assert_eq!(ScheduleCommand { active: true }.path(), "/settings");
    }
}
