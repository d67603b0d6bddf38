// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan setting and fan activity.

use std::fmt;

use serde::Deserialize;

use crate::error::ValueError;

/// The requested fan setting.
///
/// # Examples
///
/// ```
/// use colortouch_lib::types::FanMode;
///
/// assert_eq!(FanMode::On.as_num(), 1);
/// assert_eq!(FanMode::from(false), FanMode::Auto);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "i64")]
pub enum FanMode {
    /// Fan runs only while heating or cooling.
    Auto,
    /// Fan runs continuously.
    On,
}

impl FanMode {
    /// Returns the numeric value used on the wire.
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Auto => 0,
            Self::On => 1,
        }
    }
}

impl fmt::Display for FanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::On => f.write_str("on"),
        }
    }
}

impl From<bool> for FanMode {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Auto }
    }
}

impl TryFrom<i64> for FanMode {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Auto),
            1 => Ok(Self::On),
            _ => Err(ValueError::InvalidWireValue { kind: "fan", value }),
        }
    }
}

/// Whether the fan is currently spinning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "i64")]
pub enum FanState {
    /// Fan is stopped.
    Off,
    /// Fan is running.
    On,
}

impl FanState {
    /// Returns `true` if the fan is running.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }
}

impl TryFrom<i64> for FanState {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Off),
            1 => Ok(Self::On),
            _ => Err(ValueError::InvalidWireValue {
                kind: "fanstate",
                value,
            }),
        }
    }
}
