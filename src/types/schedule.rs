// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Programmed schedule period.

use serde::Deserialize;

use crate::error::ValueError;

/// The part of the day the programmed schedule is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "i64")]
pub enum SchedulePart {
    /// Morning period.
    Morning,
    /// Daytime period.
    Day,
    /// Evening period.
    Evening,
    /// Night period.
    Night,
    /// The schedule is not running.
    Inactive,
}

impl SchedulePart {
    /// Returns the numeric value used on the wire.
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Morning => 0,
            Self::Day => 1,
            Self::Evening => 2,
            Self::Night => 3,
            Self::Inactive => 255,
        }
    }
}

impl TryFrom<i64> for SchedulePart {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Morning),
            1 => Ok(Self::Day),
            2 => Ok(Self::Evening),
            3 => Ok(Self::Night),
            255 => Ok(Self::Inactive),
            _ => Err(ValueError::InvalidWireValue {
                kind: "schedulepart",
                value,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_uses_sentinel() {
        assert_eq!(SchedulePart::try_from(255).unwrap(), SchedulePart::Inactive);
        assert_eq!(SchedulePart::Inactive.as_num(), 255);
        assert!(SchedulePart::try_from(4).is_err());
    }
}
