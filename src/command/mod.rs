// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat request definitions.
//!
//! Reads are [`Query`] values (plain `GET`s). Writes are [`Command`]s, posted
//! as form-encoded bodies.
//!
//! # Available Commands
//!
//! | Command Type | Endpoint | Fields |
//! |-------------|----------|--------|
//! | [`ControlCommand`] | `/control` | `mode`, `fan`, `heattemp`, `cooltemp` |
//! | [`SettingsCommand`] | `/settings` | `tempunits`, `hum_setpoint`, `dehum_setpoint` |
//! | [`ScheduleCommand`] | `/settings` | `schedule` |
//!
//! # Field Re-transmission
//!
//! The firmware resets every field a write does not mention. A
//! [`ControlCommand`] therefore always carries both setpoints, mode and fan,
//! even when only one of them changes.
//!
//! # Examples
//!
//! ```
//! use colortouch_lib::command::{Command, ControlCommand};
//! use colortouch_lib::types::{FanMode, Mode};
//!
//! let cmd = ControlCommand {
//!     mode: Mode::Auto,
//!     fan: FanMode::Auto,
//!     heat_setpoint: 68.0,
//!     cool_setpoint: 72.0,
//! };
//!
//! assert_eq!(cmd.path(), "/control");
//! assert_eq!(cmd.form().encode(), "mode=3&fan=0&heattemp=68&cooltemp=72");
//! ```

mod control;
mod query;
mod settings;

pub use control::ControlCommand;
pub use query::Query;
pub use settings::{ScheduleCommand, SettingsCommand};

/// A write that can be sent to the thermostat.
pub trait Command {
    /// Returns the endpoint path, e.g. `"/control"`.
    fn path(&self) -> &'static str;

    /// Returns the form fields to post.
    fn form(&self) -> FormBody;
}

/// An ordered, form-encoded request body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBody {
    fields: Vec<(&'static str, String)>,
}

impl FormBody {
    /// Creates an empty body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field.
    #[must_use]
    pub fn field(mut self, name: &'static str, value: impl ToString) -> Self {
        self.fields.push((name, value.to_string()));
        self
    }

    /// Appends a field only if a value is present.
    #[must_use]
    pub fn optional_field(self, name: &'static str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.field(name, value),
            None => self,
        }
    }

    /// Returns the value of a field, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns `true` if the body has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Encodes the fields as `application/x-www-form-urlencoded`.
    #[must_use]
    pub fn encode(&self) -> String {
        self.fields
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_keeps_field_order() {
        let form = FormBody::new().field("b", 2).field("a", 1);
        assert_eq!(form.encode(), "b=2&a=1");
    }

    #[test]
    fn form_escapes_values() {
        let form = FormBody::new().field("name", "Living Room & Den");
        assert_eq!(form.encode(), "name=Living%20Room%20%26%20Den");
    }

    #[test]
    fn optional_field_skips_none() {
        let form = FormBody::new()
            .field("tempunits", 0)
            .optional_field("hum_setpoint", None::<u8>)
            .optional_field("dehum_setpoint", Some(55));
        assert_eq!(form.encode(), "tempunits=0&dehum_setpoint=55");
        assert_eq!(form.get("dehum_setpoint"), Some("55"));
        assert_eq!(form.get("hum_setpoint"), None);
    }

    #[test]
    fn empty_form() {
        assert!(FormBody::new().is_empty());
        assert_eq!(FormBody::new().encode(), "");
    }
}
