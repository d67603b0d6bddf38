// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Result of a `/control` or `/settings` write.

use serde_json::Value;

use crate::error::ParseError;

/// Outcome of a write command.
///
/// The device acknowledges an accepted write with a body containing a
/// `success` key. Anything else, typically `{"error": true, "reason": "..."}`,
/// is a rejection.
///
/// # Examples
///
/// ```
/// use colortouch_lib::response::CommandOutcome;
///
/// let ok = CommandOutcome::parse(r#"{"success": true}"#).unwrap();
/// assert!(ok.is_success());
///
/// let rejected = CommandOutcome::parse(r#"{"error": true, "reason": "setpoints out of range"}"#).unwrap();
/// assert_eq!(rejected.reason(), Some("setpoints out of range"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The device accepted the write.
    Success,
    /// The device refused the write.
    Rejected {
        /// Reason given by the device, if any.
        reason: Option<String>,
        /// The raw response body.
        body: String,
    },
}

impl CommandOutcome {
    /// Parses a write response body.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the body is not a JSON object.
    pub fn parse(body: &str) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_str(body)?;
        let Some(object) = value.as_object() else {
            return Err(ParseError::UnexpectedFormat(format!(
                "expected a JSON object, got {body}"
            )));
        };

        if object.contains_key("success") {
            return Ok(Self::Success);
        }

        Ok(Self::Rejected {
            reason: object
                .get("reason")
                .and_then(Value::as_str)
                .map(str::to_string),
            body: body.to_string(),
        })
    }

    /// Returns `true` if the device accepted the write.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns the rejection reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::Rejected { reason, .. } => reason.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_key_means_success() {
        assert!(CommandOutcome::parse(r#"{"success": true}"#).unwrap().is_success());
        // Only the key matters.
        assert!(CommandOutcome::parse(r#"{"success": false}"#).unwrap().is_success());
    }

    #[test]
    fn error_without_reason() {
        let outcome = CommandOutcome::parse(r#"{"error": true}"#).unwrap();
        assert!(!outcome.is_success());
        assert_eq!(outcome.reason(), None);
    }

    #[test]
    fn non_object_is_unexpected() {
        let err = CommandOutcome::parse("[1, 2]").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedFormat(_)));
        assert!(matches!(
            CommandOutcome::parse("not json").unwrap_err(),
            ParseError::Json(_)
        ));
    }
}
