//
//  dockerhub
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Docker Hub's v2 API authenticates with a username/password exchange:
//! the credentials are posted to `/users/login/` and the answer carries a
//! short-lived JWT that is sent back as `Authorization: JWT <token>`.
//!
//! - [`Credentials`]: the username/password pair a client is built with
//! - [`SessionToken`]: the JWT obtained for a single call
//!
//! The client performs the exchange on every operation and drops the token
//! afterwards, so neither type is ever persisted.
//!
//! ## Example
//!
//! ```rust
//! use dockerhub::auth::Credentials;
//!
//! let credentials = Credentials::new("octocat", "hunter2");
//! assert_eq!(credentials.username(), "octocat");
//! assert!(!format!("{:?}", credentials).contains("hunter2"));
//! ```

mod token;

pub use token::*;

use std::fmt;

use serde::Serialize;

/// Username and password used for the login exchange.
///
/// Serializes to the body Docker Hub's login endpoint expects:
///
/// ```json
/// {"username": "octocat", "password": "hunter2"}
/// ```
///
/// # Notes
///
/// - Immutable once constructed; the client holds its own copy.
/// - `Debug` output never includes the password.
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The Docker ID used to log in.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns `true` when either half of the pair is empty.
    ///
    /// Docker Hub rejects such a login outright, so the CLI checks this
    /// before making any request.
    pub fn is_incomplete(&self) -> bool {
        self.username.is_empty() || self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_serialize_as_login_body() {
        let credentials = Credentials::new("alice", "s3cret");
        let body = serde_json::to_value(&credentials).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"username": "alice", "password": "s3cret"})
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let credentials = Credentials::new("alice", "s3cret");
        let debug = format!("{:?}", credentials);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("s3cret"));
    }

    #[test]
    fn test_is_incomplete() {
        assert!(Credentials::new("", "pw").is_incomplete());
        assert!(Credentials::new("alice", "").is_incomplete());
        assert!(!Credentials::new("alice", "pw").is_incomplete());
    }
}
