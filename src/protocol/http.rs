// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the thermostat's local API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, WWW_AUTHENTICATE};
use reqwest::{Client, Response, StatusCode};

use super::digest::DigestSession;
use crate::command::{Command, Query};
use crate::error::ProtocolError;
use crate::protocol::{DeviceResponse, Protocol};

// ============================================================================
// HttpConfig - Connection parameters
// ============================================================================

/// Configuration for an HTTP connection to a thermostat.
///
/// Thermostats on a local network usually present self-signed certificates,
/// so certificate verification is off unless enabled explicitly.
///
/// # Examples
///
/// ```
/// use colortouch_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// // Simple configuration
/// let config = HttpConfig::new("192.168.1.40");
///
/// // With all options
/// let config = HttpConfig::new("192.168.1.40")
///     .with_https()
///     .with_credentials("admin", "password")
///     .with_timeout(Duration::from_secs(10))
///     .with_certificate_verification(true);
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    use_https: bool,
    credentials: Option<(String, String)>,
    timeout: Duration,
    verify_certificates: bool,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default HTTPS port.
    pub const DEFAULT_HTTPS_PORT: u16 = 443;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Creates a new HTTP configuration for the specified host.
    ///
    /// A leading `http://` or `https://` is accepted; `https://` enables
    /// HTTPS.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the thermostat
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        let host = host.into();
        let config = Self {
            host: String::new(),
            port: Self::DEFAULT_PORT,
            use_https: false,
            credentials: None,
            timeout: Self::DEFAULT_TIMEOUT,
            verify_certificates: false,
        };

        if let Some(rest) = host.strip_prefix("https://") {
            Self {
                host: rest.trim_end_matches('/').to_string(),
                ..config
            }
            .with_https()
        } else {
            let rest = host.strip_prefix("http://").unwrap_or(&host);
            Self {
                host: rest.trim_end_matches('/').to_string(),
                ..config
            }
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enables HTTPS.
    ///
    /// If port hasn't been explicitly set, it will be changed to 443.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.use_https = true;
        if self.port == Self::DEFAULT_PORT {
            self.port = Self::DEFAULT_HTTPS_PORT;
        }
        self
    }

    /// Sets digest authentication credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some((username.into(), password.into()));
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enables or disables TLS certificate verification.
    #[must_use]
    pub fn with_certificate_verification(mut self, verify: bool) -> Self {
        self.verify_certificates = verify;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns whether HTTPS is enabled.
    #[must_use]
    pub fn use_https(&self) -> bool {
        self.use_https
    }

    /// Returns the credentials if set.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        self.credentials
            .as_ref()
            .map(|(u, p)| (u.as_str(), p.as_str()))
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns whether TLS certificates are verified.
    #[must_use]
    pub fn verify_certificates(&self) -> bool {
        self.verify_certificates
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        let port_suffix =
            if (self.use_https && self.port == 443) || (!self.use_https && self.port == 80) {
                String::new()
            } else {
                format!(":{}", self.port)
            };
        format!("{scheme}://{}{port_suffix}", self.host)
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be
    /// created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        if self.host.is_empty() {
            return Err(ProtocolError::InvalidAddress(
                "host is required".to_string(),
            ));
        }

        let base_url = self.base_url();

        let client = Client::builder()
            .timeout(self.timeout)
            .danger_accept_invalid_certs(!self.verify_certificates)
            .build()
            .map_err(ProtocolError::Http)?;

        let digest = self
            .credentials
            .map(|(username, password)| Arc::new(DigestSession::new(username, password)));

        Ok(HttpClient {
            base_url,
            client,
            timeout: self.timeout,
            digest,
        })
    }
}

// ============================================================================
// HttpClient - Request execution
// ============================================================================

/// HTTP client for one thermostat.
///
/// Every call is a single attempt. When credentials are configured the
/// digest challenge handshake happens inside that attempt: a `401` carrying
/// a fresh challenge is answered once, and the challenge is kept for later
/// requests.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
    timeout: Duration,
    digest: Option<Arc<DigestSession>>,
}

impl HttpClient {
    /// Creates a new HTTP client for the specified host with default
    /// settings.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, ProtocolError> {
        HttpConfig::new(host).into_client()
    }

    /// Returns the base URL of the device.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the configured digest username, if any.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.digest.as_deref().map(DigestSession::username)
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn execute(
        &self,
        path: &str,
        body: Option<String>,
    ) -> Result<DeviceResponse, ProtocolError> {
        let url = self.build_url(path);

        tracing::debug!(url = %url, body = body.as_deref().unwrap_or(""), "Sending HTTP request");

        let authorization = match &self.digest {
            Some(digest) => digest.authorization(path, body.as_deref())?,
            None => None,
        };

        let mut response = self
            .send_once(&url, body.as_deref(), authorization.as_deref())
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            if let Some(digest) = &self.digest {
                let Some(challenge) = response
                    .headers()
                    .get(WWW_AUTHENTICATE)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string)
                else {
                    digest.reset();
                    return Err(ProtocolError::AuthenticationFailed);
                };

                tracing::debug!(url = %url, "Answering digest challenge");

                let answer = digest.accept_challenge(&challenge, path, body.as_deref())?;
                response = self.send_once(&url, body.as_deref(), Some(&answer)).await?;
            }
        }

        if response.status() == StatusCode::UNAUTHORIZED {
            if let Some(digest) = &self.digest {
                digest.reset();
            }
            return Err(ProtocolError::AuthenticationFailed);
        }

        if !response.status().is_success() {
            return Err(ProtocolError::HttpStatus {
                status: response.status().as_u16(),
                reason: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown")
                    .to_string(),
            });
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        tracing::debug!(body = %body, "Received HTTP response");

        Ok(DeviceResponse::new(body))
    }

    async fn send_once(
        &self,
        url: &str,
        body: Option<&str>,
        authorization: Option<&str>,
    ) -> Result<Response, ProtocolError> {
        let mut request = match body {
            Some(body) => self
                .client
                .post(url)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(body.to_string()),
            None => self.client.get(url),
        };

        if let Some(authorization) = authorization {
            request = request.header(AUTHORIZATION, authorization);
        }

        request.send().await.map_err(|e| self.transport_error(e))
    }

    fn transport_error(&self, error: reqwest::Error) -> ProtocolError {
        if error.is_timeout() {
            ProtocolError::Timeout(u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX))
        } else {
            ProtocolError::Http(error)
        }
    }
}

impl Protocol for HttpClient {
    async fn query(&self, query: Query) -> Result<DeviceResponse, ProtocolError> {
        self.execute(query.path(), None).await
    }

    async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<DeviceResponse, ProtocolError> {
        self.execute(command.path(), Some(command.form().encode()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_joins_path() {
        let client = HttpClient::new("192.168.1.40").unwrap();
        assert_eq!(client.build_url("/query/info"), "http://192.168.1.40/query/info");
        assert_eq!(client.build_url("/"), "http://192.168.1.40/");
    }

    #[test]
    fn client_with_https_scheme() {
        let client = HttpClient::new("https://192.168.1.40").unwrap();
        assert_eq!(client.base_url(), "https://192.168.1.40");
    }

    #[test]
    fn empty_host_is_rejected() {
        let result = HttpConfig::new("").into_client();
        assert!(matches!(result, Err(ProtocolError::InvalidAddress(_))));
    }

    // =========================================================================
    // HttpConfig tests
    // =========================================================================

    #[test]
    fn http_config_default_values() {
        let config = HttpConfig::new("192.168.1.40");
        assert_eq!(config.host(), "192.168.1.40");
        assert_eq!(config.port(), 80);
        assert!(!config.use_https());
        assert!(config.credentials().is_none());
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert!(!config.verify_certificates());
    }

    #[test]
    fn http_config_strips_scheme() {
        let config = HttpConfig::new("http://thermostat.local/");
        assert_eq!(config.host(), "thermostat.local");
        assert!(!config.use_https());

        let config = HttpConfig::new("https://thermostat.local");
        assert_eq!(config.host(), "thermostat.local");
        assert!(config.use_https());
        assert_eq!(config.port(), 443);
    }

    #[test]
    fn http_config_with_https_custom_port() {
        let config = HttpConfig::new("192.168.1.40")
            .with_port(8443)
            .with_https();
        assert!(config.use_https());
        assert_eq!(config.port(), 8443);
        assert_eq!(config.base_url(), "https://192.168.1.40:8443");
    }

    #[test]
    fn http_config_with_credentials() {
        let config = HttpConfig::new("192.168.1.40").with_credentials("admin", "secret");
        let creds = config.credentials().unwrap();
        assert_eq!(creds.0, "admin");
        assert_eq!(creds.1, "secret");
    }

    #[test]
    fn http_config_base_url_custom_port() {
        let config = HttpConfig::new("192.168.1.40").with_port(8080);
        assert_eq!(config.base_url(), "http://192.168.1.40:8080");
    }

    #[test]
    fn http_config_into_client_with_credentials() {
        let config = HttpConfig::new("192.168.1.40")
            .with_credentials("user", "pass")
            .with_certificate_verification(true)
            .with_timeout(Duration::from_secs(2));
        let client = config.into_client().unwrap();
        assert_eq!(client.base_url(), "http://192.168.1.40");
        assert_eq!(client.username(), Some("user"));
        assert_eq!(client.timeout, Duration::from_secs(2));
    }

    #[test]
    fn http_client_without_credentials() {
        let client = HttpClient::new("192.168.1.40").unwrap();
        assert_eq!(client.username(), None);
    }
}
