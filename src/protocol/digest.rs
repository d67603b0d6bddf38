// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP Digest session state.

use std::fmt;

use digest_auth::{AuthContext, WwwAuthenticateHeader};
use parking_lot::Mutex;

use crate::error::ProtocolError;

/// Credentials plus the most recent server challenge.
///
/// Once a challenge has been seen, later requests answer it up front with an
/// incrementing nonce count, saving one round trip per request.
pub(crate) struct DigestSession {
    username: String,
    password: String,
    challenge: Mutex<Option<WwwAuthenticateHeader>>,
}

impl DigestSession {
    pub(crate) fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            challenge: Mutex::new(None),
        }
    }

    pub(crate) fn username(&self) -> &str {
        &self.username
    }

    /// Answers the cached challenge, if there is one.
    pub(crate) fn authorization(
        &self,
        path: &str,
        body: Option<&str>,
    ) -> Result<Option<String>, ProtocolError> {
        let mut challenge = self.challenge.lock();
        match challenge.as_mut() {
            Some(prompt) => self.respond(prompt, path, body).map(Some),
            None => Ok(None),
        }
    }

    /// Stores a fresh `WWW-Authenticate` challenge and answers it.
    pub(crate) fn accept_challenge(
        &self,
        header: &str,
        path: &str,
        body: Option<&str>,
    ) -> Result<String, ProtocolError> {
        let mut prompt =
            digest_auth::parse(header).map_err(|e| ProtocolError::Digest(e.to_string()))?;
        let answer = self.respond(&mut prompt, path, body)?;
        *self.challenge.lock() = Some(prompt);
        Ok(answer)
    }

    /// Forgets the cached challenge.
    pub(crate) fn reset(&self) {
        *self.challenge.lock() = None;
    }

    fn respond(
        &self,
        prompt: &mut WwwAuthenticateHeader,
        path: &str,
        body: Option<&str>,
    ) -> Result<String, ProtocolError> {
        let context = match body {
            Some(body) => AuthContext::new_post(
                self.username.as_str(),
                self.password.as_str(),
                path,
                Some(body.as_bytes()),
            ),
            None => AuthContext::new(self.username.as_str(), self.password.as_str(), path),
        };
        prompt
            .respond(&context)
            .map(|answer| answer.to_header_string())
            .map_err(|e| ProtocolError::Digest(e.to_string()))
    }
}

impl fmt::Debug for DigestSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestSession")
            .field("username", &self.username)
            .field("challenged", &self.challenge.lock().is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHALLENGE: &str = r#"Digest realm="thermostat", qop="auth", nonce="dcd98b7102dd2f0e8b11d0f600bfb0c093", opaque="5ccc069c403ebaf9f0171e9517f40e41""#;

    #[test]
    fn no_authorization_before_challenge() {
        let session = DigestSession::new("admin", "secret");
        assert_eq!(session.authorization("/query/info", None).unwrap(), None);
    }

    #[test]
    fn challenge_is_answered_and_cached() {
        let session = DigestSession::new("admin", "secret");
        let answer = session
            .accept_challenge(CHALLENGE, "/query/info", None)
            .unwrap();
        assert!(answer.starts_with("Digest "));
        assert!(answer.contains(r#"username="admin""#));
        assert!(answer.contains(r#"uri="/query/info""#));
        assert!(answer.contains("nc=00000001"));

        let next = session
            .authorization("/control", Some("mode=1"))
            .unwrap()
            .unwrap();
        assert!(next.contains(r#"uri="/control""#));
        assert!(next.contains("nc=00000002"));
    }

    #[test]
    fn reset_forgets_challenge() {
        let session = DigestSession::new("admin", "secret");
        session
            .accept_challenge(CHALLENGE, "/query/info", None)
            .unwrap();
        session.reset();
        assert_eq!(session.authorization("/", None).unwrap(), None);
    }

    #[test]
    fn malformed_challenge_is_rejected() {
        let session = DigestSession::new("admin", "secret");
        let err = session.accept_challenge("Basic realm=\"x\"", "/", None).unwrap_err();
        assert!(matches!(err, ProtocolError::Digest(_)));
    }

    #[test]
    fn debug_hides_password() {
        let session = DigestSession::new("admin", "secret");
        let debug = format!("{session:?}");
        assert!(debug.contains("admin"));
        assert!(!debug.contains("secret"));
    }
}
