//! `/rest/api/3/group` endpoints.

use serde::{Deserialize, Serialize};

use super::{Page, User};
use crate::{
    Envelope, Expectation, JiraClient, Method, PathTemplate, RequestDescriptor, Result,
};

/// Identifies a group either by name or by ID.
///
/// Jira accepts either; the ID is stable across renames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupRef {
    /// Group name, sent as `groupname`.
    Name(String),
    /// Group ID, sent as `groupId`.
    Id(String),
}

impl GroupRef {
    /// Reference a group by name.
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Reference a group by ID.
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    fn apply(&self, descriptor: RequestDescriptor) -> RequestDescriptor {
        match self {
            Self::Name(name) => descriptor.query("groupname", name),
            Self::Id(id) => descriptor.query("groupId", id),
        }
    }
}

/// A group as returned by create and membership endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Group name.
    pub name: String,
    /// Group ID.
    #[serde(default)]
    pub group_id: Option<String>,
    /// REST URL of the group.
    #[serde(default, rename = "self")]
    pub self_url: Option<String>,
}

/// A group as returned by the bulk endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDetails {
    /// Group name.
    pub name: String,
    /// Group ID.
    #[serde(default)]
    pub group_id: Option<String>,
}

/// Parameters for [`Groups::get_group_members`].
#[derive(Debug, Clone)]
pub struct GetGroupMembers {
    /// The group.
    pub group: GroupRef,
    /// Include inactive users.
    pub include_inactive_users: Option<bool>,
    /// Index of the first item to return.
    pub start_at: Option<u64>,
    /// Page size, at most 50.
    pub max_results: Option<u32>,
}

impl GetGroupMembers {
    /// First page of members of `group`.
    #[must_use]
    pub const fn new(group: GroupRef) -> Self {
        Self {
            group,
            include_inactive_users: None,
            start_at: None,
            max_results: None,
        }
    }
}

/// Parameters for [`Groups::bulk_get_groups`].
#[derive(Debug, Clone, Default)]
pub struct BulkGetGroups {
    /// Group IDs, sent as repeated `groupId`.
    pub group_ids: Vec<String>,
    /// Group names, sent as repeated `groupName`.
    pub group_names: Vec<String>,
    /// Index of the first item to return.
    pub start_at: Option<u64>,
    /// Page size.
    pub max_results: Option<u32>,
}

/// Parameters for [`Groups::remove_group`].
#[derive(Debug, Clone)]
pub struct RemoveGroup {
    /// The group to delete.
    pub group: GroupRef,
    /// Group that takes over permissions and restrictions, by ID.
    pub swap_group_id: Option<String>,
}

#[derive(Serialize)]
struct CreateGroupBody<'a> {
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AccountBody<'a> {
    account_id: &'a str,
}

/// Group endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Groups<'a> {
    client: &'a JiraClient,
}

impl<'a> Groups<'a> {
    pub(crate) const fn new(client: &'a JiraClient) -> Self {
        Self { client }
    }

    /// Page of users in a group.
    ///
    /// `GET /rest/api/3/group/member`
    pub async fn get_group_members(&self, params: &GetGroupMembers) -> Result<Envelope<Page<User>>> {
        let descriptor = params
            .group
            .apply(RequestDescriptor::new(
                Method::Get,
                PathTemplate::new("/rest/api/3/group/member"),
            ))
            .query_opt("includeInactiveUsers", params.include_inactive_users)
            .query_opt("startAt", params.start_at)
            .query_opt("maxResults", params.max_results);
        self.client.send(&descriptor).await
    }

    /// Page of groups selected by ID or name.
    ///
    /// `GET /rest/api/3/group/bulk`
    pub async fn bulk_get_groups(&self, params: &BulkGetGroups) -> Result<Envelope<Page<GroupDetails>>> {
        let descriptor =
            RequestDescriptor::new(Method::Get, PathTemplate::new("/rest/api/3/group/bulk"))
                .query_opt("startAt", params.start_at)
                .query_opt("maxResults", params.max_results)
                .query("groupId", params.group_ids.as_slice())
                .query("groupName", params.group_names.as_slice());
        self.client.send(&descriptor).await
    }

    /// Create a group.
    ///
    /// `POST /rest/api/3/group`, answers `201`.
    pub async fn create_group(&self, name: &str) -> Result<Envelope<Group>> {
        let descriptor = RequestDescriptor::new(Method::Post, PathTemplate::new("/rest/api/3/group"))
            .json(&CreateGroupBody { name })?
            .expect(Expectation::json(201));
        self.client.send(&descriptor).await
    }

    /// Delete a group.
    ///
    /// `DELETE /rest/api/3/group`
    pub async fn remove_group(&self, params: &RemoveGroup) -> Result<Envelope<()>> {
        let descriptor = params
            .group
            .apply(RequestDescriptor::new(
                Method::Delete,
                PathTemplate::new("/rest/api/3/group"),
            ))
            .query_opt("swapGroupId", params.swap_group_id.as_deref())
            .expect(Expectation::no_content());
        self.client.send(&descriptor).await
    }

    /// Add a user to a group.
    ///
    /// `POST /rest/api/3/group/user`, answers `201` with the group.
    pub async fn add_user_to_group(&self, group: &GroupRef, account_id: &str) -> Result<Envelope<Group>> {
        let descriptor = group
            .apply(RequestDescriptor::new(
                Method::Post,
                PathTemplate::new("/rest/api/3/group/user"),
            ))
            .json(&AccountBody { account_id })?
            .expect(Expectation::json(201));
        self.client.send(&descriptor).await
    }

    /// Remove a user from a group.
    ///
    /// `DELETE /rest/api/3/group/user`
    pub async fn remove_user_from_group(&self, group: &GroupRef, account_id: &str) -> Result<Envelope<()>> {
        let descriptor = group
            .apply(RequestDescriptor::new(
                Method::Delete,
                PathTemplate::new("/rest/api/3/group/user"),
            ))
            .query("accountId", account_id)
            .expect(Expectation::no_content());
        self.client.send(&descriptor).await
    }
}
