//
//  dockerhub
//  auth/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Session token returned by the login endpoint, plus stdin helpers for
//! reading secrets without exposing them in shell history.

use std::fmt;
use std::io::{self, BufRead};

use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;
use serde::Deserialize;

/// JWT obtained from `POST /users/login/`.
///
/// Lives for exactly one client call.
#[derive(Clone, Deserialize)]
pub struct SessionToken {
    token: String,
}

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// Adds the `Authorization: JWT <token>` header to a request.
    ///
    /// Docker Hub uses the `JWT` scheme here, not `Bearer`.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(AUTHORIZATION, format!("JWT {}", self.token))
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionToken")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Reads a single secret line from stdin, trimming the trailing newline.
pub fn read_secret_from_stdin() -> io::Result<String> {
    let stdin = io::stdin();
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;

    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_token_from_login_response() {
        let token: SessionToken = serde_json::from_str(r#"{"token": "abc.def.ghi"}"#).unwrap();
        assert_eq!(token.as_str(), "abc.def.ghi");
    }

    #[test]
    fn test_apply_uses_jwt_scheme() {
        let token = SessionToken::new("abc");
        let request = token
            .apply_to_request(reqwest::Client::new().get("http://localhost/"))
            .build()
            .unwrap();
        assert_eq!(request.headers()[AUTHORIZATION], "JWT abc");
    }

    #[test]
    fn test_debug_redacts_token() {
        let token = SessionToken::new("abc.def.ghi");
        assert!(!format!("{:?}", token).contains("abc.def.ghi"));
    }
}
