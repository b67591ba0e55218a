//
//  dockerhub
//  api/repositories.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Repository API types and operations.
//!
//! Repositories are identified by `namespace/name`, where the namespace is
//! either a user's Docker ID or an organization.
//!
//! # Example
//!
//! ```rust,no_run
//! use dockerhub::api::DockerHubClient;
//! use dockerhub::api::repositories::{Repository, UpdateRepository};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> dockerhub::api::Result<()> {
//! let client = DockerHubClient::new("octocat", "hunter2")?;
//! let cancel = CancellationToken::new();
//!
//! let repo = Repository::new("octocat", "backend").private(true);
//! client.create_repository(&cancel, &repo).await?;
//!
//! let update = UpdateRepository {
//!     is_private: Some(false),
//!     ..Default::default()
//! };
//! client.update_repository(&cancel, "octocat/backend", &update).await?;
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::client::DockerHubClient;
use super::common::{null_as_empty, repository_segments, Result};

/// Represents a Docker Hub repository.
///
/// The same shape is used to create a repository and to read one back.
/// Fields Docker Hub only reports (`status`, counters, `last_updated`) are
/// skipped when serializing.
///
/// # Fields
///
/// * `user` - Optional owning user, omitted when empty
/// * `name` - Repository name, the trailing segment of `namespace/name`
/// * `namespace` - Owning user or organization
/// * `description` - Short description shown in search results
/// * `is_private` - Whether the repository is private
/// * `full_description` - Markdown overview, omitted when empty
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    /// Owning user, if Docker Hub reports one.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user: String,

    /// Repository name.
    pub name: String,

    /// Owning user or organization.
    pub namespace: String,

    /// Short description.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,

    /// Whether the repository is private.
    #[serde(default)]
    pub is_private: bool,

    /// Markdown overview shown on the repository page.
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub full_description: String,

    /// Repository status code reported by Docker Hub.
    #[serde(default, skip_serializing)]
    pub status: Option<i64>,

    /// Number of stars.
    #[serde(default, skip_serializing)]
    pub star_count: Option<u64>,

    /// Number of pulls.
    #[serde(default, skip_serializing)]
    pub pull_count: Option<u64>,

    /// Time of the last push.
    #[serde(default, skip_serializing)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Repository {
    /// Builds a repository payload for `namespace/name`.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the short description shown in search results.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the Markdown overview. Left out of the payload when empty.
    pub fn full_description(mut self, full_description: impl Into<String>) -> Self {
        self.full_description = full_description.into();
        self
    }

    /// Marks the repository private (`true`) or public (`false`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use dockerhub::api::repositories::Repository;
    ///
    /// let repo = Repository::new("acme", "api").private(true);
    /// assert!(repo.is_private);
    /// ```
    pub fn private(mut self, is_private: bool) -> Self {
        self.is_private = is_private;
        self
    }

    /// Returns the `namespace/name` identifier.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.namespace, self.name)
    }
}

/// Partial update for an existing repository.
///
/// Only fields that are `Some` are sent, so `Default::default()` plus the
/// fields to change is a valid PATCH body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateRepository {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
}

impl UpdateRepository {
    /// Returns `true` when nothing would be changed.
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.full_description.is_none() && self.is_private.is_none()
    }
}

fn repository_path(id: &str) -> String {
    format!("/repositories/{}/", repository_segments(id))
}

impl DockerHubClient {
    /// Creates a repository and returns it as Docker Hub stored it.
    pub async fn create_repository(
        &self,
        cancel: &CancellationToken,
        repository: &Repository,
    ) -> Result<Repository> {
        self.send(cancel, Method::POST, "/repositories/", Some(repository))
            .await
    }

    /// Applies a partial update to the repository `id` (`namespace/name`).
    pub async fn update_repository(
        &self,
        cancel: &CancellationToken,
        id: &str,
        update: &UpdateRepository,
    ) -> Result<Repository> {
        self.send(cancel, Method::PATCH, &repository_path(id), Some(update))
            .await
    }

    /// Fetches the repository `id` (`namespace/name`).
    pub async fn get_repository(&self, cancel: &CancellationToken, id: &str) -> Result<Repository> {
        self.send(cancel, Method::GET, &repository_path(id), None::<&()>)
            .await
    }

    /// Deletes the repository `id` (`namespace/name`).
    pub async fn delete_repository(&self, cancel: &CancellationToken, id: &str) -> Result<()> {
        self.send_empty(cancel, Method::DELETE, &repository_path(id), None::<&()>)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_payload_omits_empty_optional_fields() {
        let repo = Repository::new("acme", "api").description("API image").private(true);
        let value = serde_json::to_value(&repo).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "api",
                "namespace": "acme",
                "description": "API image",
                "is_private": true
            })
        );
    }

    #[test]
    fn test_deserialize_hub_response() {
        let json = r#"{
            "user": "acme",
            "name": "api",
            "namespace": "acme",
            "repository_type": "image",
            "status": 1,
            "description": null,
            "is_private": false,
            "star_count": 3,
            "pull_count": 1200,
            "last_updated": "2024-05-01T10:00:00.000000Z",
            "full_description": null
        }"#;
        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.full_name(), "acme/api");
        assert_eq!(repo.description, "");
        assert_eq!(repo.pull_count, Some(1200));
        assert!(repo.last_updated.is_some());
    }

    #[test]
    fn test_update_sends_only_set_fields() {
        let update = UpdateRepository {
            is_private: Some(false),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({"is_private": false}));
        assert!(!update.is_empty());
        assert!(UpdateRepository::default().is_empty());
    }

    #[test]
    fn test_repository_path() {
        assert_eq!(repository_path("acme/api"), "/repositories/acme/api/");
        assert_eq!(repository_path("/acme/api/"), "/repositories/acme/api/");
        assert_eq!(repository_path("acme/api?x#y"), "/repositories/acme/api%3Fx%23y/");
    }
}
