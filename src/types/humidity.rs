// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Relative humidity setpoints.

use std::fmt;

use serde::Deserialize;

use crate::error::ValueError;

/// Relative humidity as a whole percentage (0-100).
///
/// # Examples
///
/// ```
/// use colortouch_lib::types::Humidity;
///
/// let hum = Humidity::new(45).unwrap();
/// assert_eq!(hum.value(), 45);
///
/// // The humidifier setpoint is limited to 0-60%
/// assert!(Humidity::humidifier_setpoint(61).is_err());
/// assert!(Humidity::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "u8")]
pub struct Humidity(u8);

impl Humidity {
    /// Lowest humidifier setpoint the device accepts.
    pub const SETPOINT_MIN: Self = Self(0);

    /// Highest humidifier setpoint the device accepts.
    pub const SETPOINT_MAX: Self = Self(60);

    /// Creates a humidity value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        Self::within(value, 0, 100)
    }

    /// Creates a humidifier setpoint, limited to
    /// [`SETPOINT_MIN`](Self::SETPOINT_MIN)..=[`SETPOINT_MAX`](Self::SETPOINT_MAX).
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 60.
    pub fn humidifier_setpoint(value: u8) -> Result<Self, ValueError> {
        Self::within(value, Self::SETPOINT_MIN.0, Self::SETPOINT_MAX.0)
    }

    fn within(value: u8, min: u8, max: u8) -> Result<Self, ValueError> {
        if value < min || value > max {
            return Err(ValueError::OutOfRange {
                min: u16::from(min),
                max: u16::from(max),
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Returns the percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Humidity {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Humidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humidity_valid_range() {
        assert_eq!(Humidity::new(0).unwrap().value(), 0);
        assert_eq!(Humidity::new(100).unwrap().value(), 100);
        assert!(Humidity::new(101).is_err());
    }

    #[test]
    fn humidifier_setpoint_range() {
        assert_eq!(Humidity::humidifier_setpoint(60).unwrap(), Humidity::SETPOINT_MAX);
        let err = Humidity::humidifier_setpoint(61).unwrap_err();
        assert_eq!(
            err,
            ValueError::OutOfRange {
                min: 0,
                max: 60,
                actual: 61
            }
        );
    }

    #[test]
    fn humidity_deserializes_from_integer() {
        let hum: Humidity = serde_json::from_str("40").unwrap();
        assert_eq!(hum.value(), 40);
        assert!(serde_json::from_str::<Humidity>("120").is_err());
    }

    #[test]
    fn humidity_display() {
        assert_eq!(Humidity::new(35).unwrap().to_string(), "35%");
    }
}
