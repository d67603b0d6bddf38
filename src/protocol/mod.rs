// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport for the thermostat's local REST API.
//!
//! [`HttpClient`] implements [`Protocol`] for real devices. Reads are
//! `GET`s and writes are form-encoded `POST`s, with HTTP Digest
//! authentication when credentials are configured. Other transports can be
//! plugged in through `Thermostat::new`.

mod digest;
mod http;

pub use http::{HttpClient, HttpConfig};

use crate::command::{Command, Query};
use crate::error::{ParseError, ProtocolError};

/// Raw response body from the thermostat.
#[derive(Debug, Clone)]
pub struct DeviceResponse {
    body: String,
}

impl DeviceResponse {
    /// Creates a response with the given body.
    #[must_use]
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the raw JSON response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the response as a specific type.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON cannot be parsed into the target type.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, ParseError> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }
}

/// Something that can carry requests to a thermostat.
///
/// Each call is a single attempt; implementations never retry.
#[allow(async_fn_in_trait)]
pub trait Protocol {
    /// Performs a read.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` on transport failure or a non-success status.
    async fn query(&self, query: Query) -> Result<DeviceResponse, ProtocolError>;

    /// Posts a write command.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` on transport failure or a non-success status.
    async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<DeviceResponse, ProtocolError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::ApiInfo;

    #[test]
    fn response_parse() {
        let response = DeviceResponse::new(r#"{"api_ver": 7, "type": "residential"}"#.to_string());
        let info: ApiInfo = response.parse().unwrap();
        assert_eq!(info.api_version, 7);
    }

    #[test]
    fn response_parse_error() {
        let response = DeviceResponse::new("<html>busy</html>".to_string());
        assert!(matches!(response.parse::<ApiInfo>(), Err(ParseError::Json(_))));
    }
}
