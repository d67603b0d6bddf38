// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP thermostat builder.

use std::time::Duration;

use crate::error::Error;
use crate::protocol::{HttpClient, HttpConfig};
use crate::thermostat::Thermostat;

/// Builder for HTTP thermostats.
///
/// Created with `Thermostat::http("host")` or
/// `Thermostat::http_config(HttpConfig::new("host").with_port(8080))`.
///
/// # Examples
///
/// ```no_run
/// use colortouch_lib::Thermostat;
/// use std::time::Duration;
///
/// # async fn example() -> colortouch_lib::Result<()> {
/// // Logs in and checks the API version
/// let thermostat = Thermostat::http("192.168.1.40")
///     .with_credentials("admin", "password")
///     .with_timeout(Duration::from_secs(3))
///     .build()
///     .await?;
///
/// // No network access until the first refresh
/// let thermostat = Thermostat::http("192.168.1.40").build_without_login()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ThermostatBuilder {
    config: HttpConfig,
}

impl ThermostatBuilder {
    /// Creates a new builder with the specified HTTP configuration.
    pub(crate) fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Sets digest authentication credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.config = self.config.with_credentials(username, password);
        self
    }

    /// Connects over HTTPS.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.config = self.config.with_https();
        self
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.config = self.config.with_port(port);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Enables or disables TLS certificate verification.
    #[must_use]
    pub fn with_certificate_verification(mut self, verify: bool) -> Self {
        self.config = self.config.with_certificate_verification(verify);
        self
    }

    /// Returns the configuration built so far.
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Builds the thermostat and logs in.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The HTTP client cannot be created
    /// - The API root cannot be read
    /// - The device API version is not supported
    pub async fn build(self) -> Result<Thermostat<HttpClient>, Error> {
        let thermostat = self.build_without_login()?;
        thermostat.login().await?;
        Ok(thermostat)
    }

    /// Builds the thermostat without contacting it.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn build_without_login(self) -> Result<Thermostat<HttpClient>, Error> {
        let client = self.config.into_client().map_err(Error::Protocol)?;
        Ok(Thermostat::new(client))
    }
}
