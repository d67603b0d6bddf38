// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cached `/control` fields.

use crate::command::ControlCommand;
use crate::error::{DeviceError, Error, ValueError};
use crate::response::InfoResponse;
use crate::types::{FanMode, FanState, Mode, RunState};

/// Last known values of the fields written through `/control`, plus the
/// read-only activity fields that come with them.
///
/// Every field is `None` until the first successful info refresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlState {
    pub(crate) mode: Option<Mode>,
    pub(crate) fan: Option<FanMode>,
    pub(crate) fan_state: Option<FanState>,
    pub(crate) run_state: Option<RunState>,
    pub(crate) heat_setpoint: Option<f64>,
    pub(crate) cool_setpoint: Option<f64>,
    pub(crate) setpoint_delta: Option<f64>,
    pub(crate) heat_setpoint_range: Option<(f64, f64)>,
    pub(crate) cool_setpoint_range: Option<(f64, f64)>,
}

impl ControlState {
    /// Gets the operating mode.
    #[must_use]
    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    /// Gets the fan setting.
    #[must_use]
    pub fn fan(&self) -> Option<FanMode> {
        self.fan
    }

    /// Gets whether the fan is running.
    #[must_use]
    pub fn fan_state(&self) -> Option<FanState> {
        self.fan_state
    }

    /// Gets what the equipment is doing.
    #[must_use]
    pub fn run_state(&self) -> Option<RunState> {
        self.run_state
    }

    /// Gets the heat setpoint.
    #[must_use]
    pub fn heat_setpoint(&self) -> Option<f64> {
        self.heat_setpoint
    }

    /// Gets the cool setpoint.
    #[must_use]
    pub fn cool_setpoint(&self) -> Option<f64> {
        self.cool_setpoint
    }

    /// Gets the minimum heat/cool gap enforced in auto mode.
    #[must_use]
    pub fn setpoint_delta(&self) -> Option<f64> {
        self.setpoint_delta
    }

    /// Gets the `(min, max)` heat setpoint range, if the firmware reports it.
    #[must_use]
    pub fn heat_setpoint_range(&self) -> Option<(f64, f64)> {
        self.heat_setpoint_range
    }

    /// Gets the `(min, max)` cool setpoint range, if the firmware reports it.
    #[must_use]
    pub fn cool_setpoint_range(&self) -> Option<(f64, f64)> {
        self.cool_setpoint_range
    }

    /// Returns the setpoint the current mode is driving toward.
    ///
    /// Heat mode targets the heat setpoint, cool mode the cool setpoint.
    /// Auto and off have no single target.
    #[must_use]
    pub fn target_temperature(&self) -> Option<f64> {
        match self.mode? {
            Mode::Heat => self.heat_setpoint,
            Mode::Cool => self.cool_setpoint,
            Mode::Auto | Mode::Off => None,
        }
    }

    /// Overwrites every field from an info response.
    pub(crate) fn apply_info(&mut self, info: &InfoResponse) {
        self.mode = Some(info.mode);
        self.fan = Some(info.fan);
        self.fan_state = Some(info.fanstate);
        self.run_state = Some(info.state);
        self.heat_setpoint = Some(info.heattemp);
        self.cool_setpoint = Some(info.cooltemp);
        self.setpoint_delta = Some(info.setpointdelta);
        self.heat_setpoint_range = info.heattempmin.zip(info.heattempmax);
        self.cool_setpoint_range = info.cooltempmin.zip(info.cooltempmax);
    }

    /// Checks a setpoint pair against the auto-mode delta.
    ///
    /// Outside auto mode any pair is accepted.
    pub(crate) fn validate_setpoints(&self, heat: f64, cool: f64) -> Result<(), Error> {
        if self.mode != Some(Mode::Auto) {
            return Ok(());
        }
        let delta = self
            .setpoint_delta
            .ok_or(DeviceError::StateUnknown("setpointdelta"))?;
        if heat + delta > cool {
            return Err(ValueError::SetpointDelta { heat, cool, delta }.into());
        }
        Ok(())
    }

    /// Builds the full `/control` write from the cached fields.
    pub(crate) fn control_command(&self) -> Result<ControlCommand, DeviceError> {
        Ok(ControlCommand {
            mode: self.mode.ok_or(DeviceError::StateUnknown("mode"))?,
            fan: self.fan.ok_or(DeviceError::StateUnknown("fan"))?,
            heat_setpoint: self
                .heat_setpoint
                .ok_or(DeviceError::StateUnknown("heattemp"))?,
            cool_setpoint: self
                .cool_setpoint
                .ok_or(DeviceError::StateUnknown("cooltemp"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auto_state() -> ControlState {
        ControlState {
            mode: Some(Mode::Auto),
            fan: Some(FanMode::Auto),
            heat_setpoint: Some(68.0),
            cool_setpoint: Some(72.0),
            setpoint_delta: Some(2.0),
            ..ControlState::default()
        }
    }

    #[test]
    fn auto_mode_enforces_delta() {
        let state = auto_state();
        assert!(state.validate_setpoints(68.0, 72.0).is_ok());
        assert!(state.validate_setpoints(70.0, 72.0).is_ok());
        assert!(matches!(
            state.validate_setpoints(70.0, 71.0),
            Err(Error::Value(ValueError::SetpointDelta { .. }))
        ));
    }

    #[test]
    fn other_modes_skip_delta() {
        let state = ControlState {
            mode: Some(Mode::Heat),
            ..auto_state()
        };
        assert!(state.validate_setpoints(72.0, 60.0).is_ok());
    }

    #[test]
    fn auto_mode_without_delta_is_unknown() {
        let state = ControlState {
            setpoint_delta: None,
            ..auto_state()
        };
        assert!(matches!(
            state.validate_setpoints(68.0, 72.0),
            Err(Error::Device(DeviceError::StateUnknown("setpointdelta")))
        ));
    }

    #[test]
    fn control_command_needs_every_field() {
        assert!(matches!(
            ControlState::default().control_command(),
            Err(DeviceError::StateUnknown("mode"))
        ));

        let state = ControlState {
            cool_setpoint: None,
            ..auto_state()
        };
        assert!(matches!(
            state.control_command(),
            Err(DeviceError::StateUnknown("cooltemp"))
        ));

        let cmd = auto_state().control_command().unwrap();
        assert_eq!(cmd.heat_setpoint, 68.0);
        assert_eq!(cmd.cool_setpoint, 72.0);
    }

    #[test]
    fn target_temperature_follows_mode() {
        let mut state = auto_state();
        assert_eq!(state.target_temperature(), None);
        state.mode = Some(Mode::Heat);
        assert_eq!(state.target_temperature(), Some(68.0));
        state.mode = Some(Mode::Cool);
        assert_eq!(state.target_temperature(), Some(72.0));
    }
}
