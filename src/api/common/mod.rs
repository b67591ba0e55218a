//
//  dockerhub
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types
//!
//! Shared error type, result alias and list envelope used by every
//! resource module.
//!
//! # Example
//!
//! ```rust
//! use dockerhub::api::common::ApiError;
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::Api { status, message }) => {
//!             println!("Docker Hub answered {}: {}", status, message)
//!         }
//!         Err(ApiError::Cancelled) => println!("Cancelled"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use reqwest::StatusCode;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

mod pagination;

pub use pagination::*;

/// Result alias used by every client operation.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Reads a string field that Docker Hub may send as `null`.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Percent-encodes a single path segment so `/`, `?` and `#` stay inside it.
pub(crate) fn path_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes()).collect()
}

/// Encodes a `namespace/name` repository id, keeping its one separator.
pub(crate) fn repository_segments(id: &str) -> String {
    let id = id.trim_matches('/');
    match id.split_once('/') {
        Some((namespace, name)) => format!("{}/{}", path_segment(namespace), path_segment(name)),
        None => path_segment(id),
    }
}

/// Unified error type for all Docker Hub API operations.
///
/// Errors fall into two families:
///
/// | Variant | Family | When |
/// |---------|--------|------|
/// | `Api` | API error | The login or target request answered outside 2xx |
/// | `Network` | Transport | Connection, TLS, timeout or body read failure |
/// | `Json` | Transport | A request body could not be encoded or a response decoded |
/// | `Cancelled` | - | The caller's cancellation token fired |
/// | `Config` | - | The client could not be constructed |
///
/// # Notes
///
/// - `Api` displays as the raw response body and nothing else, so
///   `err.to_string()` yields e.g. `{"detail": "Not found"}`.
/// - Nothing is retried. Each variant is surfaced as soon as it occurs.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Docker Hub answered with a non-success status.
    ///
    /// `message` is the verbatim response body.
    #[error("{message}")]
    Api {
        /// HTTP status returned by Docker Hub.
        status: StatusCode,
        /// Raw response body.
        message: String,
    },

    /// A network-level error occurred during the request.
    ///
    /// Covers connection failures, timeouts, DNS resolution errors and
    /// failures reading a response body.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A JSON payload could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The operation was cancelled before it completed.
    #[error("Operation cancelled")]
    Cancelled,

    /// The client configuration is invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Returns the HTTP status for [`ApiError::Api`], `None` otherwise.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether Docker Hub reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Whether Docker Hub rejected the credentials.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_raw_body() {
        let err = ApiError::Api {
            status: StatusCode::NOT_FOUND,
            message: r#"{"detail": "Not found"}"#.to_string(),
        };
        assert_eq!(err.to_string(), r#"{"detail": "Not found"}"#);
        assert!(err.is_not_found());
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_path_segment_escapes_separators() {
        assert_eq!(path_segment("owners"), "owners");
        assert_eq!(path_segment("a/b?c#d"), "a%2Fb%3Fc%23d");
    }

    #[test]
    fn test_repository_segments_keep_one_separator() {
        assert_eq!(repository_segments("/acme/api/"), "acme/api");
        assert_eq!(repository_segments("acme/api/../x"), "acme/api%2F..%2Fx");
        assert_eq!(repository_segments("solo"), "solo");
    }

    #[test]
    fn test_status_only_for_api_errors() {
        assert_eq!(ApiError::Cancelled.status(), None);
        assert_eq!(
            ApiError::Config("bad".to_string()).to_string(),
            "Invalid configuration: bad"
        );
    }
}
