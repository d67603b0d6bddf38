// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature units reported by the thermostat.

use std::fmt;

use serde::Deserialize;

use crate::error::ValueError;

/// Unit the thermostat uses for every temperature it reports and accepts.
///
/// Temperatures travel as whole degrees in this unit; the library never
/// converts between units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "i64")]
pub enum TemperatureUnits {
    /// Degrees Fahrenheit.
    Fahrenheit,
    /// Degrees Celsius.
    Celsius,
}

impl TemperatureUnits {
    /// Returns the numeric value used on the wire.
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Fahrenheit => 0,
            Self::Celsius => 1,
        }
    }

    /// Returns the unit symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Fahrenheit => "°F",
            Self::Celsius => "°C",
        }
    }
}

impl fmt::Display for TemperatureUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl TryFrom<i64> for TemperatureUnits {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Fahrenheit),
            1 => Ok(Self::Celsius),
            _ => Err(ValueError::InvalidWireValue {
                kind: "tempunits",
                value,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_from_wire() {
        assert_eq!(
            TemperatureUnits::try_from(0).unwrap(),
            TemperatureUnits::Fahrenheit
        );
        assert_eq!(
            TemperatureUnits::try_from(1).unwrap(),
            TemperatureUnits::Celsius
        );
        assert!(TemperatureUnits::try_from(2).is_err());
    }

    #[test]
    fn units_symbol() {
        assert_eq!(TemperatureUnits::Celsius.to_string(), "°C");
        assert_eq!(TemperatureUnits::Fahrenheit.as_num(), 0);
    }
}
