// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read endpoints.

use std::fmt;

/// A read-only `GET` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Query {
    /// `GET /` - API version and device type.
    Api,
    /// `GET /query/info` - control and settings fields.
    Info,
    /// `GET /query/sensors` - sensor readings.
    Sensors,
    /// `GET /query/runtimes` - daily equipment runtimes.
    Runtimes,
    /// `GET /query/alerts` - maintenance alerts.
    Alerts,
}

impl Query {
    /// Returns the endpoint path.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Api => "/",
            Self::Info => "/query/info",
            Self::Sensors => "/query/sensors",
            Self::Runtimes => "/query/runtimes",
            Self::Alerts => "/query/alerts",
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_paths() {
        assert_eq!(Query::Api.path(), "/");
        assert_eq!(Query::Info.path(), "/query/info");
        assert_eq!(Query::Sensors.to_string(), "/query/sensors");
        assert_eq!(Query::Runtimes.path(), "/query/runtimes");
        assert_eq!(Query::Alerts.path(), "/query/alerts");
    }
}
