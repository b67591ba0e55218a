//
//  dockerhub
//  api/access_tokens.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Personal access token types and operations.
//!
//! The secret is only ever returned by [`DockerHubClient::create_access_token`].
//! Every later read of the same token comes back with an empty `token`
//! field.

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::client::DockerHubClient;
use super::common::{null_as_empty, path_segment, Result};

/// Scope granting pull, push and delete.
pub const SCOPE_READ_WRITE_DELETE: &str = "repo:admin";
/// Scope granting pull and push.
pub const SCOPE_READ_WRITE: &str = "repo:write";
/// Scope granting pull only.
pub const SCOPE_READ: &str = "repo:read";
/// Scope granting pull on public repositories only.
pub const SCOPE_PUBLIC_READ: &str = "repo:public_read";

/// Request body for creating a token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateAccessToken {
    pub token_label: String,
    pub scopes: Vec<String>,
}

impl CreateAccessToken {
    /// Builds a request for a token labelled `token_label` with `scopes`.
    pub fn new(token_label: impl Into<String>, scopes: Vec<String>) -> Self {
        Self {
            token_label: token_label.into(),
            scopes,
        }
    }
}

/// Partial update for an existing token.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateAccessToken {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// A personal access token as returned by Docker Hub.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessToken {
    pub uuid: String,

    /// The secret. Empty on every response except creation.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub token: String,

    #[serde(default)]
    pub token_label: String,

    #[serde(default)]
    pub scopes: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// Whether this response carries the secret.
    pub fn has_secret(&self) -> bool {
        !self.token.is_empty()
    }
}

fn access_token_path(uuid: &str) -> String {
    format!("/access-tokens/{}", path_segment(uuid))
}

impl DockerHubClient {
    /// Creates a token. The returned value is the only one holding the secret.
    pub async fn create_access_token(
        &self,
        cancel: &CancellationToken,
        request: &CreateAccessToken,
    ) -> Result<AccessToken> {
        self.send(cancel, Method::POST, "/access-tokens", Some(request))
            .await
    }

    /// Changes the label or active flag of token `uuid`.
    pub async fn update_access_token(
        &self,
        cancel: &CancellationToken,
        uuid: &str,
        update: &UpdateAccessToken,
    ) -> Result<AccessToken> {
        self.send(cancel, Method::PATCH, &access_token_path(uuid), Some(update))
            .await
    }

    /// Fetches token `uuid`. The `token` field is always empty.
    pub async fn get_access_token(&self, cancel: &CancellationToken, uuid: &str) -> Result<AccessToken> {
        self.send(cancel, Method::GET, &access_token_path(uuid), None::<&()>)
            .await
    }

    /// Deletes token `uuid`.
    pub async fn delete_access_token(&self, cancel: &CancellationToken, uuid: &str) -> Result<()> {
        self.send_empty(cancel, Method::DELETE, &access_token_path(uuid), None::<&()>)
            .await
    }
}
