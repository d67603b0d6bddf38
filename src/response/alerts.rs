// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `/query/alerts` response parsing.

use serde::Deserialize;

use super::flag;

/// Response from `GET /query/alerts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertsResponse {
    #[serde(default)]
    alerts: Vec<Alert>,
}

impl AlertsResponse {
    /// Consumes the response, returning the alerts in device order.
    #[must_use]
    pub fn into_alerts(self) -> Vec<Alert> {
        self.alerts
    }
}

/// A maintenance alert such as `Air Filter` or `Service`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Alert {
    /// Alert name.
    pub name: String,

    /// Whether the alert is currently raised.
    #[serde(deserialize_with = "flag")]
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_alerts() {
        let json = r#"{"alerts": [
            {"name": "Air Filter", "active": true},
            {"name": "UV Lamp", "active": false},
            {"name": "Service", "active": 0}
        ]}"#;
        let alerts = serde_json::from_str::<AlertsResponse>(json)
            .unwrap()
            .into_alerts();

        assert_eq!(alerts.len(), 3);
        assert_eq!(alerts[0].name, "Air Filter");
        assert!(alerts[0].active);
        assert!(!alerts[2].active);
    }
}
