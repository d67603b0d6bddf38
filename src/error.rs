// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `colortouch_lib` library.
//!
//! Failures fall into four groups: transport and HTTP-level problems
//! ([`ProtocolError`]), payloads that cannot be understood ([`ParseError`]),
//! values rejected locally before any request is made ([`ValueError`]) and
//! device-level conditions such as unknown state or a rejected command
//! ([`DeviceError`]).

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during protocol communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error occurred during device operations.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),
}

/// Errors related to value validation and constraints.
///
/// These are raised locally; the device is never contacted when one occurs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// Auto-mode setpoints are closer together than the device allows.
    #[error(
        "in auto mode the cool setpoint ({cool}) must be at least {delta} degrees above the heat setpoint ({heat})"
    )]
    SetpointDelta {
        /// Requested heat setpoint.
        heat: f64,
        /// Requested cool setpoint.
        cool: f64,
        /// Minimum gap reported by the device.
        delta: f64,
    },

    /// A wire integer does not map to any known variant.
    #[error("invalid {kind} value: {value}")]
    InvalidWireValue {
        /// Name of the enumeration being decoded.
        kind: &'static str,
        /// The raw value received.
        value: i64,
    },
}

/// Errors related to HTTP communication with the thermostat.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The device answered with a non-success status code.
    #[error("HTTP {status} - {reason}")]
    HttpStatus {
        /// Numeric status code.
        status: u16,
        /// Canonical reason phrase.
        reason: String,
    },

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The digest challenge could not be parsed or answered.
    #[error("digest authentication error: {0}")]
    Digest(String),
}

/// Errors related to parsing thermostat responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed, including missing required fields.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unexpected response format.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),
}

/// Errors related to device operations.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// A write needs a field that has not been read from the device yet.
    #[error("{0} is unknown; refresh the thermostat first")]
    StateUnknown(&'static str),

    /// Command was rejected by the device.
    #[error("command rejected: {0}")]
    CommandRejected(String),

    /// The device speaks an API version older than this library supports.
    #[error("API version {found} is not supported (minimum {minimum})")]
    UnsupportedApiVersion {
        /// Version reported by the device.
        found: u32,
        /// Minimum version supported.
        minimum: u32,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
