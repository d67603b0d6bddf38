// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating mode and run state of the thermostat.

use std::fmt;

use serde::Deserialize;

use crate::error::ValueError;

/// The mode the thermostat is set to.
///
/// # Examples
///
/// ```
/// use colortouch_lib::types::Mode;
///
/// assert_eq!(Mode::Auto.as_num(), 3);
/// assert_eq!(Mode::try_from(1).unwrap(), Mode::Heat);
/// assert!(Mode::try_from(9).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "i64")]
pub enum Mode {
    /// HVAC is off.
    Off,
    /// Heating only.
    Heat,
    /// Cooling only.
    Cool,
    /// Heats or cools to keep the temperature between both setpoints.
    Auto,
}

impl Mode {
    /// Returns the numeric value used on the wire.
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Heat => 1,
            Self::Cool => 2,
            Self::Auto => 3,
        }
    }

    /// Returns a lowercase name for the mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Heat => "heat",
            Self::Cool => "cool",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<i64> for Mode {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Off),
            1 => Ok(Self::Heat),
            2 => Ok(Self::Cool),
            3 => Ok(Self::Auto),
            _ => Err(ValueError::InvalidWireValue {
                kind: "mode",
                value,
            }),
        }
    }
}

/// What the HVAC equipment is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "i64")]
pub enum RunState {
    /// Not running.
    Idle,
    /// Heating stage active.
    Heating,
    /// Cooling stage active.
    Cooling,
    /// Equipment is locked out (e.g. compressor protection).
    Lockout,
    /// The thermostat reports an error.
    Error,
}

impl RunState {
    /// Returns the numeric value used on the wire.
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Idle => 0,
            Self::Heating => 1,
            Self::Cooling => 2,
            Self::Lockout => 3,
            Self::Error => 4,
        }
    }

    /// Returns `true` when equipment is actively conditioning air.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Heating | Self::Cooling)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Heating => "heating",
            Self::Cooling => "cooling",
            Self::Lockout => "lockout",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

impl TryFrom<i64> for RunState {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, ValueError> {
        match value {
            0 => Ok(Self::Idle),
            1 => Ok(Self::Heating),
            2 => Ok(Self::Cooling),
            3 => Ok(Self::Lockout),
            4 => Ok(Self::Error),
            _ => Err(ValueError::InvalidWireValue {
                kind: "state",
                value,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_round_trips_wire_values() {
        for mode in [Mode::Off, Mode::Heat, Mode::Cool, Mode::Auto] {
            assert_eq!(Mode::try_from(i64::from(mode.as_num())).unwrap(), mode);
        }
    }

    #[test]
    fn mode_rejects_unknown_value() {
        let err = Mode::try_from(4).unwrap_err();
        assert_eq!(
            err,
            ValueError::InvalidWireValue {
                kind: "mode",
                value: 4
            }
        );
    }

    #[test]
    fn mode_deserializes_from_integer() {
        let mode: Mode = serde_json::from_str("3").unwrap();
        assert_eq!(mode, Mode::Auto);
        assert!(serde_json::from_str::<Mode>("-1").is_err());
    }

    #[test]
    fn run_state_activity() {
        assert!(RunState::Heating.is_active());
        assert!(RunState::Cooling.is_active());
        assert!(!RunState::Idle.is_active());
        assert!(!RunState::Lockout.is_active());
    }

    #[test]
    fn run_state_display() {
        assert_eq!(RunState::try_from(3).unwrap().to_string(), "lockout");
        assert!(RunState::try_from(5).is_err());
    }
}
