//
//  dockerhub
//  api/groups.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Organization group (team) types and operations.
//!
//! Groups belong to an organization and collect members who are granted
//! permissions on repositories through
//! [`repository_groups`](super::repository_groups). Group paths accept
//! either the group name or its numeric id, so `"owners"` and `"51673"`
//! address the same group.
//!
//! # Hierarchy
//!
//! ```text
//! Organization
//! └── Groups
//!     ├── Members
//!     └── Repository permissions
//! ```

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::client::DockerHubClient;
use super::common::{null_as_empty, path_segment, Page, Result};

/// A group within an organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Numeric group id.
    #[serde(default)]
    pub id: i64,

    /// Group UUID, reported by newer API versions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    /// Group name, unique within the organization.
    pub name: String,

    /// Free-form description.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

/// Payload for creating or updating a group.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupRequest {
    pub name: String,
    pub description: String,
}

impl GroupRequest {
    /// Builds a payload with the given name and description.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dockerhub::api::groups::GroupRequest;
    ///
    /// let request = GroupRequest::new("devs", "Developers");
    /// assert_eq!(request.name, "devs");
    /// ```
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A user belonging to a group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupMember {
    /// Docker ID of the member.
    pub username: String,

    /// Display name, `full_name` on the wire.
    #[serde(default, rename = "full_name", deserialize_with = "null_as_empty")]
    pub display_name: String,
}

#[derive(Serialize)]
struct AddMember<'a> {
    member: &'a str,
}

fn groups_path(org: &str) -> String {
    format!("/orgs/{}/groups", path_segment(org))
}

fn group_path(org: &str, group: &str) -> String {
    format!("{}/{}/", groups_path(org), path_segment(group))
}

fn members_path(org: &str, group: &str) -> String {
    format!("{}members/", group_path(org, group))
}

fn member_path(org: &str, group: &str, username: &str) -> String {
    format!("{}{}/", members_path(org, group), path_segment(username))
}

impl DockerHubClient {
    /// Creates a group in `org`.
    pub async fn create_group(
        &self,
        cancel: &CancellationToken,
        org: &str,
        group: &GroupRequest,
    ) -> Result<Group> {
        self.send(cancel, Method::POST, &groups_path(org), Some(group))
            .await
    }

    /// Updates the name and description of `group` (name or id) in `org`.
    pub async fn update_group(
        &self,
        cancel: &CancellationToken,
        org: &str,
        group: &str,
        update: &GroupRequest,
    ) -> Result<Group> {
        self.send(cancel, Method::PATCH, &group_path(org, group), Some(update))
            .await
    }

    /// Fetches `group` (name or id) in `org`.
    pub async fn get_group(&self, cancel: &CancellationToken, org: &str, group: &str) -> Result<Group> {
        self.send(cancel, Method::GET, &group_path(org, group), None::<&()>)
            .await
    }

    /// Deletes `group` (name or id) from `org`.
    pub async fn delete_group(&self, cancel: &CancellationToken, org: &str, group: &str) -> Result<()> {
        self.send_empty(cancel, Method::DELETE, &group_path(org, group), None::<&()>)
            .await
    }

    /// Lists the first page of members of `group`.
    ///
    /// Further pages are not fetched; see [`Page::next_url`].
    pub async fn list_group_members(
        &self,
        cancel: &CancellationToken,
        org: &str,
        group: &str,
    ) -> Result<Page<GroupMember>> {
        self.send(cancel, Method::GET, &members_path(org, group), None::<&()>)
            .await
    }

    /// Adds the user `username` to `group`.
    pub async fn add_group_member(
        &self,
        cancel: &CancellationToken,
        org: &str,
        group: &str,
        username: &str,
    ) -> Result<()> {
        let body = AddMember { member: username };
        self.send_empty(cancel, Method::POST, &members_path(org, group), Some(&body))
            .await
    }

    /// Removes the user `username` from `group`.
    pub async fn remove_group_member(
        &self,
        cancel: &CancellationToken,
        org: &str,
        group: &str,
        username: &str,
    ) -> Result<()> {
        let path = member_path(org, group, username);
        self.send_empty(cancel, Method::DELETE, &path, None::<&()>)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paths() {
        assert_eq!(groups_path("acme"), "/orgs/acme/groups");
        assert_eq!(group_path("acme", "owners"), "/orgs/acme/groups/owners/");
        assert_eq!(members_path("acme", "42"), "/orgs/acme/groups/42/members/");
        assert_eq!(member_path("acme", "42", "bob"), "/orgs/acme/groups/42/members/bob/");
    }

    #[test]
    fn test_paths_escape_reserved_characters() {
        assert_eq!(group_path("acme", "ops/../x"), "/orgs/acme/groups/ops%2F..%2Fx/");
        assert_eq!(
            member_path("acme", "devs", "bob?admin=1"),
            "/orgs/acme/groups/devs/members/bob%3Fadmin%3D1/"
        );
    }

    #[test]
    fn test_null_description_is_empty() {
        let group: Group =
            serde_json::from_str(r#"{"id": 1, "name": "devs", "description": null}"#).unwrap();
        assert_eq!(group.description, "");
    }

    #[test]
    fn test_null_full_name_is_empty() {
        let member: GroupMember =
            serde_json::from_str(r#"{"username": "bob", "full_name": null}"#).unwrap();
        assert_eq!(member.username, "bob");
        assert_eq!(member.display_name, "");
    }

    #[test]
    fn test_deserialize_group() {
        let group: Group = serde_json::from_str(
            r#"{"id": 51673, "uuid": "c0ffee", "name": "owners", "description": "", "member_count": 2}"#,
        )
        .unwrap();
        assert_eq!(group.id, 51673);
        assert_eq!(group.name, "owners");
        assert_eq!(group.uuid.as_deref(), Some("c0ffee"));
    }

    #[test]
    fn test_member_display_name_maps_full_name() {
        let member: GroupMember =
            serde_json::from_str(r#"{"username": "alice", "full_name": "Alice Liddell", "type": "User"}"#)
                .unwrap();
        assert_eq!(member.display_name, "Alice Liddell");
    }

    #[test]
    fn test_add_member_body() {
        let body = AddMember { member: "alice" };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"member": "alice"}));
    }
}
