// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `/control` write.

use super::{Command, FormBody};
use crate::types::{FanMode, Mode};

/// Sets mode, fan and both setpoints in one request.
///
/// All four fields are mandatory on the wire, so this command has no
/// optional parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlCommand {
    /// Operating mode.
    pub mode: Mode,
    /// Fan setting.
    pub fan: FanMode,
    /// Heat setpoint, in the thermostat's units.
    pub heat_setpoint: f64,
    /// Cool setpoint, in the thermostat's units.
    pub cool_setpoint: f64,
}

impl Command for ControlCommand {
    fn path(&self) -> &'static str {
        "/control"
    }

    fn form(&self) -> FormBody {
        FormBody::new()
            .field("mode", self.mode.as_num())
            .field("fan", self.fan.as_num())
            .field("heattemp", self.heat_setpoint)
            .field("cooltemp", self.cool_setpoint)
    }
}
