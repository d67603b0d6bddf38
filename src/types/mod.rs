// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for thermostat control.
//!
//! The thermostat encodes its enumerations as small integers. Each type here
//! maps those integers to named variants and rejects values outside the known
//! set when a response is decoded.
//!
//! # Types
//!
//! - [`Mode`] - Off/Heat/Cool/Auto
//! - [`RunState`] - Idle/Heating/Cooling/Lockout/Error
//! - [`FanMode`] - Auto/On fan setting
//! - [`FanState`] - Whether the fan is running
//! - [`TemperatureUnits`] - Fahrenheit or Celsius
//! - [`SchedulePart`] - Current period of the programmed schedule
//! - [`Humidity`] - Relative humidity percentage

mod fan;
mod humidity;
mod mode;
mod schedule;
mod units;

pub use fan::{FanMode, FanState};
pub use humidity::Humidity;
pub use mode::{Mode, RunState};
pub use schedule::SchedulePart;
pub use units::TemperatureUnits;
