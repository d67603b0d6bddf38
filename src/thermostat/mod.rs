// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level thermostat client.
//!
//! A [`Thermostat`] caches the device's last known state and writes changes
//! back through the `/control` and `/settings` endpoints.
//!
//! # Write-through Cache
//!
//! Every setter updates the cached field first, then sends the full field
//! set the endpoint requires. If the write fails for any reason the cached
//! field is restored, so the cache never shows a value the device refused.
//!
//! # Serialisation
//!
//! Refreshes and writes on one `Thermostat` never overlap: each operation
//! holds a per-device lock for its whole request, so a polling task and a
//! command handler can share the client safely.
//!
//! ```no_run
//! use colortouch_lib::Thermostat;
//! use colortouch_lib::types::Mode;
//!
//! # async fn example() -> colortouch_lib::Result<()> {
//! let thermostat = Thermostat::http("192.168.1.40")
//!     .with_credentials("admin", "password")
//!     .build()
//!     .await?;
//!
//! thermostat.refresh().await?;
//! thermostat.set_mode(Mode::Heat).await?;
//! thermostat.set_setpoints(68.0, 74.0).await?;
//! # Ok(())
//! # }
//! ```

mod builder;

pub use builder::ThermostatBuilder;

use std::sync::Arc;

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::command::{Command, Query, ScheduleCommand};
use crate::error::{DeviceError, Error};
use crate::protocol::{HttpConfig, Protocol};
use crate::response::{
    Alert, AlertsResponse, ApiInfo, CommandOutcome, InfoResponse, RuntimeRecord, RuntimesResponse,
    SensorsResponse,
};
use crate::state::{ControlState, SettingsState, ThermostatState};
use crate::types::{FanMode, Humidity, Mode, TemperatureUnits};

/// A thermostat reachable through its local REST API.
///
/// # Type Parameter
///
/// `P` is the transport, [`HttpClient`](crate::protocol::HttpClient) for
/// real devices. Any other [`Protocol`] can be supplied through
/// [`Thermostat::new`].
#[derive(Debug)]
pub struct Thermostat<P: Protocol> {
    protocol: Arc<P>,
    state: Arc<RwLock<ThermostatState>>,
    in_flight: Mutex<()>,
}

impl Thermostat<crate::protocol::HttpClient> {
    /// Starts building an HTTP thermostat for the given host.
    #[must_use]
    pub fn http(host: impl Into<String>) -> ThermostatBuilder {
        ThermostatBuilder::new(HttpConfig::new(host))
    }

    /// Starts building an HTTP thermostat from a full configuration.
    #[must_use]
    pub fn http_config(config: HttpConfig) -> ThermostatBuilder {
        ThermostatBuilder::new(config)
    }
}

impl<P: Protocol> Thermostat<P> {
    /// Creates a thermostat over a custom transport, with empty cached state.
    ///
    /// Use [`Thermostat::http`] for a real device. Nothing is sent until
    /// the first call.
    #[must_use]
    pub fn new(protocol: P) -> Self {
        Self {
            protocol: Arc::new(protocol),
            state: Arc::new(RwLock::new(ThermostatState::new())),
            in_flight: Mutex::new(()),
        }
    }

    // ========== Cached State ==========

    /// Returns a snapshot of the cached state.
    #[must_use]
    pub fn state(&self) -> ThermostatState {
        self.state.read().clone()
    }

    /// Returns a snapshot of the cached `/control` fields.
    #[must_use]
    pub fn control_state(&self) -> ControlState {
        self.state.read().control.clone()
    }

    /// Returns a snapshot of the cached `/settings` fields.
    #[must_use]
    pub fn settings_state(&self) -> SettingsState {
        self.state.read().settings.clone()
    }

    /// Returns the API information from the last successful login.
    #[must_use]
    pub fn api_info(&self) -> Option<ApiInfo> {
        self.state.read().api.clone()
    }

    /// Returns one attribute of one cached sensor.
    #[must_use]
    pub fn sensor_reading(&self, index: usize, attribute: &str) -> Option<f64> {
        self.state.read().sensor_reading(index, attribute)
    }

    /// Returns the cached indoor temperature.
    #[must_use]
    pub fn indoor_temperature(&self) -> Option<f64> {
        self.state.read().indoor_temperature()
    }

    /// Returns the cached indoor humidity.
    #[must_use]
    pub fn indoor_humidity(&self) -> Option<f64> {
        self.state.read().indoor_humidity()
    }

    /// Returns the cached outdoor temperature.
    #[must_use]
    pub fn outdoor_temperature(&self) -> Option<f64> {
        self.state.read().outdoor_temperature()
    }

    /// Returns the cached outdoor humidity.
    #[must_use]
    pub fn outdoor_humidity(&self) -> Option<f64> {
        self.state.read().outdoor_humidity()
    }

    /// Lowest humidifier setpoint the device accepts.
    #[must_use]
    pub fn min_humidity(&self) -> Humidity {
        Humidity::SETPOINT_MIN
    }

    /// Highest humidifier setpoint the device accepts.
    #[must_use]
    pub fn max_humidity(&self) -> Humidity {
        Humidity::SETPOINT_MAX
    }

    // ========== Reads ==========

    /// Reads the API root and checks the version is supported.
    ///
    /// Nothing is cached unless the version is supported.
    ///
    /// # Errors
    ///
    /// Returns error if the request or parsing fails, or if the device API
    /// is older than [`ApiInfo::MIN_SUPPORTED_VERSION`].
    pub async fn login(&self) -> Result<ApiInfo, Error> {
        let _guard = self.in_flight.lock().await;

        let info: ApiInfo = self.fetch(Query::Api).await.inspect_err(|e| {
            tracing::warn!(error = %e, "Login failed");
        })?;

        if !info.is_supported() {
            tracing::warn!(
                api_version = info.api_version,
                minimum = ApiInfo::MIN_SUPPORTED_VERSION,
                "Thermostat API version is not supported"
            );
            return Err(DeviceError::UnsupportedApiVersion {
                found: info.api_version,
                minimum: ApiInfo::MIN_SUPPORTED_VERSION,
            }
            .into());
        }

        tracing::debug!(
            api_version = info.api_version,
            device_type = %info.device_type,
            "Logged in to thermostat"
        );
        self.state.write().api = Some(info.clone());
        Ok(info)
    }

    /// Refreshes control and settings fields, then sensor readings.
    ///
    /// Both reads are attempted even if the first fails; each one only
    /// touches the cache when it succeeds.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered.
    pub async fn refresh(&self) -> Result<(), Error> {
        let _guard = self.in_flight.lock().await;
        let info = self.update_info_locked().await;
        let sensors = self.update_sensors_locked().await;
        info.and(sensors)
    }

    /// Refreshes control and settings fields from `/query/info`.
    ///
    /// # Errors
    ///
    /// Returns error if the request or parsing fails. Cached state is left
    /// untouched in that case.
    pub async fn update_info(&self) -> Result<(), Error> {
        let _guard = self.in_flight.lock().await;
        self.update_info_locked().await
    }

    /// Refreshes sensor readings from `/query/sensors`.
    ///
    /// # Errors
    ///
    /// Returns error if the request or parsing fails. The previous readings
    /// stay cached in that case.
    pub async fn update_sensors(&self) -> Result<(), Error> {
        let _guard = self.in_flight.lock().await;
        self.update_sensors_locked().await
    }

    /// Reads the daily runtime records, oldest first.
    ///
    /// # Errors
    ///
    /// Returns error if the request or parsing fails.
    pub async fn runtimes(&self) -> Result<Vec<RuntimeRecord>, Error> {
        let _guard = self.in_flight.lock().await;
        let response: RuntimesResponse = self.fetch(Query::Runtimes).await?;
        Ok(response.into_records())
    }

    /// Reads the most recent daily runtime record.
    ///
    /// # Errors
    ///
    /// Returns error if the request or parsing fails.
    pub async fn latest_runtime(&self) -> Result<Option<RuntimeRecord>, Error> {
        Ok(self.runtimes().await?.pop())
    }

    /// Reads the maintenance alerts.
    ///
    /// # Errors
    ///
    /// Returns error if the request or parsing fails.
    pub async fn alerts(&self) -> Result<Vec<Alert>, Error> {
        let _guard = self.in_flight.lock().await;
        let response: AlertsResponse = self.fetch(Query::Alerts).await?;
        Ok(response.into_alerts())
    }

    // ========== Writes ==========

    /// Sends the cached mode, fan and setpoints to `/control`.
    ///
    /// # Errors
    ///
    /// Returns error if any of the four fields is unknown, the request
    /// fails, or the device rejects the write.
    pub async fn push_control(&self) -> Result<(), Error> {
        let _guard = self.in_flight.lock().await;
        self.push_control_locked().await
    }

    /// Sends the cached units and humidity setpoints to `/settings`.
    ///
    /// # Errors
    ///
    /// Returns error if the units are unknown, the request fails, or the
    /// device rejects the write.
    pub async fn push_settings(&self) -> Result<(), Error> {
        let _guard = self.in_flight.lock().await;
        self.push_settings_locked().await
    }

    /// Changes the operating mode.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails; the cached mode is restored.
    pub async fn set_mode(&self, mode: Mode) -> Result<(), Error> {
        let _guard = self.in_flight.lock().await;
        let previous = self.state.write().control.mode.replace(mode);
        let result = self.push_control_locked().await;
        self.settle(result, "mode", |state| state.control.mode = previous)
    }

    /// Changes the fan setting.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails; the cached fan setting is restored.
    pub async fn set_fan(&self, fan: FanMode) -> Result<(), Error> {
        let _guard = self.in_flight.lock().await;
        let previous = self.state.write().control.fan.replace(fan);
        let result = self.push_control_locked().await;
        self.settle(result, "fan", |state| state.control.fan = previous)
    }

    /// Changes both setpoints.
    ///
    /// In auto mode the cool setpoint must exceed the heat setpoint by at
    /// least the device's setpoint delta; otherwise nothing is sent.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::SetpointDelta` if the pair is too close in auto
    /// mode, or error if the write fails (the cached setpoints are restored).
    pub async fn set_setpoints(&self, heat: f64, cool: f64) -> Result<(), Error> {
        let _guard = self.in_flight.lock().await;

        let validation = self.state.read().control.validate_setpoints(heat, cool);
        if let Err(e) = validation {
            tracing::warn!(heat, cool, error = %e, "Setpoints rejected locally");
            return Err(e);
        }

        let previous = {
            let mut state = self.state.write();
            (
                state.control.heat_setpoint.replace(heat),
                state.control.cool_setpoint.replace(cool),
            )
        };
        let result = self.push_control_locked().await;
        self.settle(result, "setpoints", |state| {
            (state.control.heat_setpoint, state.control.cool_setpoint) = previous;
        })
    }

    /// Changes the humidifier setpoint.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `value` is above 60, or error if
    /// the write fails (the cached setpoint is restored).
    pub async fn set_humidity_setpoint(&self, value: u8) -> Result<(), Error> {
        let humidity = Humidity::humidifier_setpoint(value)?;
        let _guard = self.in_flight.lock().await;
        let previous = self
            .state
            .write()
            .settings
            .humidity_setpoint
            .replace(humidity);
        let result = self.push_settings_locked().await;
        self.settle(result, "hum_setpoint", |state| {
            state.settings.humidity_setpoint = previous;
        })
    }

    /// Changes the dehumidifier setpoint.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `value` is above 100, or error if
    /// the write fails (the cached setpoint is restored).
    pub async fn set_dehumidify_setpoint(&self, value: u8) -> Result<(), Error> {
        let humidity = Humidity::new(value)?;
        let _guard = self.in_flight.lock().await;
        let previous = self
            .state
            .write()
            .settings
            .dehumidify_setpoint
            .replace(humidity);
        let result = self.push_settings_locked().await;
        self.settle(result, "dehum_setpoint", |state| {
            state.settings.dehumidify_setpoint = previous;
        })
    }

    /// Changes the temperature units.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails; the cached units are restored.
    pub async fn set_temperature_units(&self, units: TemperatureUnits) -> Result<(), Error> {
        let _guard = self.in_flight.lock().await;
        let previous = self
            .state
            .write()
            .settings
            .temperature_units
            .replace(units);
        let result = self.push_settings_locked().await;
        self.settle(result, "tempunits", |state| {
            state.settings.temperature_units = previous;
        })
    }

    /// Runs the programmed schedule (`true`) or holds the current
    /// setpoints (`false`).
    ///
    /// Asking for the state already cached succeeds without a request. After
    /// an accepted change the info fields are re-read, since the device may
    /// adjust other settings when the schedule changes.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails; the cached schedule flag is
    /// restored. A failed re-read after an accepted change is only logged.
    pub async fn set_schedule(&self, active: bool) -> Result<(), Error> {
        let _guard = self.in_flight.lock().await;

        let previous = {
            let mut state = self.state.write();
            if state.settings.schedule_active == Some(active) {
                tracing::debug!(active, "Schedule already in requested state");
                return Ok(());
            }
            state.settings.schedule_active.replace(active)
        };

        let result = self.submit(&ScheduleCommand { active }).await;
        if result.is_ok() {
            if let Err(e) = self.update_info_locked().await {
                tracing::warn!(error = %e, "Could not re-read info after schedule change");
            }
        }
        self.settle(result, "schedule", |state| {
            state.settings.schedule_active = previous;
        })
    }

    // ========== Internals ==========

    async fn fetch<T: DeserializeOwned>(&self, query: Query) -> Result<T, Error> {
        let response = self.protocol.query(query).await?;
        Ok(response.parse()?)
    }

    async fn update_info_locked(&self) -> Result<(), Error> {
        match self.fetch::<InfoResponse>(Query::Info).await {
            Ok(info) => {
                let mut state = self.state.write();
                state.control.apply_info(&info);
                state.settings.apply_info(&info);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to update thermostat info");
                Err(e)
            }
        }
    }

    async fn update_sensors_locked(&self) -> Result<(), Error> {
        match self.fetch::<SensorsResponse>(Query::Sensors).await {
            Ok(response) => {
                self.state.write().sensors = response.into_readings();
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to update thermostat sensors");
                Err(e)
            }
        }
    }

    async fn push_control_locked(&self) -> Result<(), Error> {
        let command = self.state.read().control.control_command()?;
        self.submit(&command).await
    }

    async fn push_settings_locked(&self) -> Result<(), Error> {
        let command = self.state.read().settings.settings_command()?;
        self.submit(&command).await
    }

    async fn submit<C: Command + Sync>(&self, command: &C) -> Result<(), Error> {
        let response = self.protocol.send_command(command).await?;
        match CommandOutcome::parse(response.body())? {
            CommandOutcome::Success => {
                tracing::info!(path = command.path(), "Command accepted");
                Ok(())
            }
            CommandOutcome::Rejected { reason, body } => {
                tracing::warn!(path = command.path(), body = %body, "Command rejected");
                Err(DeviceError::CommandRejected(reason.unwrap_or(body)).into())
            }
        }
    }

    /// Restores cached fields when a write-through failed.
    fn settle(
        &self,
        result: Result<(), Error>,
        field: &'static str,
        restore: impl FnOnce(&mut ThermostatState),
    ) -> Result<(), Error> {
        if let Err(e) = &result {
            restore(&mut self.state.write());
            tracing::warn!(field, error = %e, "Write failed, cached value restored");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtocolError;
    use crate::protocol::DeviceResponse;

    /// In-memory device answering reads from fixed bodies and recording
    /// every write.
    #[derive(Debug, Default)]
    struct ScriptedDevice {
        info: String,
        write_reply: String,
        writes: parking_lot::Mutex<Vec<(&'static str, String)>>,
    }

    impl Protocol for ScriptedDevice {
        async fn query(&self, query: Query) -> Result<DeviceResponse, ProtocolError> {
            match query {
                Query::Info => Ok(DeviceResponse::new(self.info.clone())),
                other => Err(ProtocolError::HttpStatus {
                    status: 404,
                    reason: format!("no body for {other}"),
                }),
            }
        }

        async fn send_command<C: Command + Sync>(
            &self,
            command: &C,
        ) -> Result<DeviceResponse, ProtocolError> {
            self.writes
                .lock()
                .push((command.path(), command.form().encode()));
            Ok(DeviceResponse::new(self.write_reply.clone()))
        }
    }

    fn heat_device(write_reply: &str) -> ScriptedDevice {
        ScriptedDevice {
            info: serde_json::json!({
                "name": "Den",
                "mode": 1,
                "state": 1,
                "fan": 0,
                "fanstate": 1,
                "tempunits": 1,
                "schedule": 0,
                "heattemp": 20.5,
                "cooltemp": 25,
                "setpointdelta": 2
            })
            .to_string(),
            write_reply: write_reply.to_string(),
            writes: parking_lot::Mutex::default(),
        }
    }

    #[tokio::test]
    async fn custom_transport_drives_reads_and_writes() {
        let thermostat = Thermostat::new(heat_device(r#"{"success": true}"#));

        thermostat.update_info().await.unwrap();
        assert_eq!(thermostat.control_state().mode(), Some(Mode::Heat));
        assert_eq!(thermostat.control_state().target_temperature(), Some(20.5));
        assert!(thermostat.settings_state().is_on_hold());

        thermostat.set_fan(FanMode::On).await.unwrap();

        let writes = thermostat.protocol.writes.lock().clone();
        assert_eq!(
            writes,
            vec![("/control", "mode=1&fan=1&heattemp=20.5&cooltemp=25".to_string())]
        );
    }

    #[tokio::test]
    async fn custom_transport_errors_surface() {
        let thermostat = Thermostat::new(heat_device(r#"{"success": true}"#));

        let err = thermostat.update_sensors().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::HttpStatus { status: 404, .. })
        ));
        assert!(thermostat.state().sensors().is_empty());
    }

    #[tokio::test]
    async fn rejected_units_are_restored() {
        let thermostat = Thermostat::new(heat_device(r#"{"error": true}"#));
        thermostat.update_info().await.unwrap();

        let err = thermostat
            .set_temperature_units(TemperatureUnits::Fahrenheit)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Device(DeviceError::CommandRejected(_))));
        assert_eq!(
            thermostat.settings_state().temperature_units(),
            Some(TemperatureUnits::Celsius)
        );
        assert_eq!(thermostat.protocol.writes.lock().len(), 1);
    }
}
