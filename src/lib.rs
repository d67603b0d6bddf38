// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `colortouch_lib` - A Rust library to control ColorTouch WiFi thermostats.
//!
//! This library provides an async client for the thermostat's local REST
//! API. It polls the device for its state, caches what it read, and writes
//! changes back through the `/control` and `/settings` endpoints.
//!
//! # Supported Features
//!
//! - **Status**: mode, run state, fan, setpoints, schedule/hold, humidity
//! - **Sensors**: indoor and outdoor temperature and humidity
//! - **Control**: mode, fan, heat/cool setpoints, humidity setpoints,
//!   temperature units, schedule or hold
//! - **History**: daily equipment runtimes and maintenance alerts
//! - **Authentication**: HTTP Digest, optional HTTPS
//!
//! Devices must implement API version 3 or newer.
//!
//! # Quick Start
//!
//! ```no_run
//! use colortouch_lib::Thermostat;
//! use colortouch_lib::types::{FanMode, Mode};
//!
//! #[tokio::main]
//! async fn main() -> colortouch_lib::Result<()> {
//!     // Logs in and checks the API version
//!     let thermostat = Thermostat::http("192.168.1.40").build().await?;
//!
//!     // Poll the device
//!     thermostat.refresh().await?;
//!     println!("Indoor: {:?}", thermostat.indoor_temperature());
//!
//!     // Change settings; every write re-sends the fields the device needs
//!     thermostat.set_mode(Mode::Auto).await?;
//!     thermostat.set_setpoints(68.0, 74.0).await?;
//!     thermostat.set_fan(FanMode::On).await?;
//!
//!     // Hold the current setpoints
//!     thermostat.set_schedule(false).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! Every operation returns a [`Result`]. Expected failures (unreachable
//! device, bad credentials, malformed payload, rejected write, local
//! validation) are reported as [`Error`] values and logged through
//! `tracing`; none of them panic. A failed refresh keeps the previously
//! cached state.

pub mod command;
pub mod error;
pub mod protocol;
pub mod response;
pub mod state;
mod thermostat;
pub mod types;

pub use command::{Command, ControlCommand, Query, ScheduleCommand, SettingsCommand};
pub use error::{DeviceError, Error, ParseError, ProtocolError, Result, ValueError};
pub use protocol::{HttpClient, HttpConfig, Protocol};
pub use response::{Alert, ApiInfo, RuntimeRecord, SensorReading};
pub use state::{ControlState, SettingsState, ThermostatState};
pub use thermostat::{Thermostat, ThermostatBuilder};
pub use types::{FanMode, FanState, Humidity, Mode, RunState, SchedulePart, TemperatureUnits};
