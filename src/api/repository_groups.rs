//
//  dockerhub
//  api/repository_groups.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Repository permissions granted to organization groups.
//!
//! An association links one repository to one group with a
//! [`Permission`]. Docker Hub addresses the association by the group's
//! numeric id under the repository:
//!
//! ```text
//! /repositories/{namespace}/{name}/groups/{group_id}/
//! ```
//!
//! # Notes
//!
//! Docker Hub's payload carries the group id and name twice, as
//! `group_id`/`groupid` and `group_name`/`groupname`. Both spellings are
//! always written with the same value. Reads accept either.

use std::fmt;
use std::str::FromStr;

use reqwest::Method;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tokio_util::sync::CancellationToken;

use super::client::DockerHubClient;
use super::common::{repository_segments, Result};

/// Access level a group holds on a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Read,
    Write,
    Admin,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Permission::Read => "read",
            Permission::Write => "write",
            Permission::Admin => "admin",
        };
        f.write_str(s)
    }
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "read" => Ok(Permission::Read),
            "write" => Ok(Permission::Write),
            "admin" => Ok(Permission::Admin),
            other => Err(format!(
                "unknown permission '{}', expected read, write or admin",
                other
            )),
        }
    }
}

/// A repository-group association.
///
/// # Example
///
/// ```rust
/// use dockerhub::api::repository_groups::{Permission, RepositoryGroup};
///
/// let association = RepositoryGroup::new(51673, "owners", Permission::Write);
/// let json = serde_json::to_value(&association).unwrap();
/// assert_eq!(json["group_id"], json["groupid"]);
/// assert_eq!(json["group_name"], json["groupname"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryGroup {
    /// Numeric id of the group.
    pub group_id: i64,

    /// Name of the group.
    pub group_name: String,

    /// Access level granted to the group.
    pub permission: Permission,
}

impl RepositoryGroup {
    pub fn new(group_id: i64, group_name: impl Into<String>, permission: Permission) -> Self {
        Self {
            group_id,
            group_name: group_name.into(),
            permission,
        }
    }
}

/// Wire shape with both spellings of the group fields.
#[derive(Serialize, Deserialize)]
struct RepositoryGroupWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    group_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    groupid: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    groupname: Option<String>,
    permission: Permission,
}

impl Serialize for RepositoryGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        RepositoryGroupWire {
            group_id: Some(self.group_id),
            groupid: Some(self.group_id),
            group_name: Some(self.group_name.clone()),
            groupname: Some(self.group_name.clone()),
            permission: self.permission,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RepositoryGroup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let wire = RepositoryGroupWire::deserialize(deserializer)?;
        let group_id = wire
            .group_id
            .or(wire.groupid)
            .ok_or_else(|| serde::de::Error::missing_field("group_id"))?;
        let group_name = wire.group_name.or(wire.groupname).unwrap_or_default();

        Ok(Self {
            group_id,
            group_name,
            permission: wire.permission,
        })
    }
}

fn associations_path(repository: &str) -> String {
    format!("/repositories/{}/groups/", repository_segments(repository))
}

fn association_path(repository: &str, group_id: i64) -> String {
    format!("{}{}/", associations_path(repository), group_id)
}

impl DockerHubClient {
    /// Grants `association.group_id` access to `repository` (`namespace/name`).
    pub async fn create_repository_group(
        &self,
        cancel: &CancellationToken,
        repository: &str,
        association: &RepositoryGroup,
    ) -> Result<RepositoryGroup> {
        self.send(cancel, Method::POST, &associations_path(repository), Some(association))
            .await
    }

    /// Changes the permission of the association with `group_id`.
    pub async fn update_repository_group(
        &self,
        cancel: &CancellationToken,
        repository: &str,
        group_id: i64,
        association: &RepositoryGroup,
    ) -> Result<RepositoryGroup> {
        self.send(
            cancel,
            Method::PATCH,
            &association_path(repository, group_id),
            Some(association),
        )
        .await
    }

    /// Fetches the association between `repository` and `group_id`.
    pub async fn get_repository_group(
        &self,
        cancel: &CancellationToken,
        repository: &str,
        group_id: i64,
    ) -> Result<RepositoryGroup> {
        self.send(cancel, Method::GET, &association_path(repository, group_id), None::<&()>)
            .await
    }

    /// Revokes the group's access to `repository`.
    pub async fn delete_repository_group(
        &self,
        cancel: &CancellationToken,
        repository: &str,
        group_id: i64,
    ) -> Result<()> {
        self.send_empty(
            cancel,
            Method::DELETE,
            &association_path(repository, group_id),
            None::<&()>,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_writes_both_spellings() {
        let association = RepositoryGroup::new(7, "devs", Permission::Admin);
        assert_eq!(
            serde_json::to_value(&association).unwrap(),
            json!({
                "group_id": 7,
                "groupid": 7,
                "group_name": "devs",
                "groupname": "devs",
                "permission": "admin"
            })
        );
    }

    #[test]
    fn test_deserialize_accepts_legacy_spelling() {
        let association: RepositoryGroup =
            serde_json::from_str(r#"{"groupid": 9, "groupname": "ops", "permission": "read"}"#).unwrap();
        assert_eq!(association, RepositoryGroup::new(9, "ops", Permission::Read));
    }

    #[test]
    fn test_deserialize_requires_group_id() {
        let result = serde_json::from_str::<RepositoryGroup>(r#"{"group_name": "ops", "permission": "read"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_permission_parse() {
        assert_eq!("WRITE".parse::<Permission>().unwrap(), Permission::Write);
        assert!("owner".parse::<Permission>().is_err());
        assert_eq!(Permission::Read.to_string(), "read");
    }

    #[test]
    fn test_association_path() {
        assert_eq!(association_path("acme/api", 51673), "/repositories/acme/api/groups/51673/");
    }
}
