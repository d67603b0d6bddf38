// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cached thermostat state.
//!
//! [`ThermostatState`] holds the last values read from the device: API
//! information, the `/control` fields ([`ControlState`]), the `/settings`
//! fields ([`SettingsState`]) and the sensor readings. Everything starts
//! unknown and is only filled in by a successful refresh or a write the
//! device accepted.

mod control;
mod settings;
mod thermostat_state;

pub use control::ControlState;
pub use settings::SettingsState;
pub use thermostat_state::ThermostatState;
