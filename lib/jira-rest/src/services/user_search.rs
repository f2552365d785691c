//! `/rest/api/3/user/search` endpoints.
//!
//! Parameters are plain serde structs serialized straight into the query.

use serde::Serialize;

use super::User;
use crate::{Envelope, JiraClient, Method, PathTemplate, RequestDescriptor, Result};

/// Parameters for [`UserSearch::find_users`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindUsers {
    /// Matched against display name and email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Exact account ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Index of the first item to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<u64>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    /// User property query, e.g. `prop.key=value`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
}

/// Parameters for [`UserSearch::find_assignable_users`].
///
/// One of `project`, `issue_key` or `issue_id` is required by Jira.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindAssignableUsers {
    /// Matched against display name and email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Exact account ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Project ID or key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Issue key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_key: Option<String>,
    /// Issue ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_id: Option<String>,
    /// Transition the user must be able to perform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_descriptor_id: Option<i64>,
    /// Index of the first item to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<u64>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
}

/// User search endpoints.
#[derive(Debug, Clone, Copy)]
pub struct UserSearch<'a> {
    client: &'a JiraClient,
}

impl<'a> UserSearch<'a> {
    pub(crate) const fn new(client: &'a JiraClient) -> Self {
        Self { client }
    }

    /// `GET /rest/api/3/user/search`
    pub async fn find_users(&self, params: &FindUsers) -> Result<Envelope<Vec<User>>> {
        let descriptor = RequestDescriptor::new(Method::Get, PathTemplate::new("/rest/api/3/user/search"))
            .query_serialize(params)?;
        self.client.send(&descriptor).await
    }

    /// `GET /rest/api/3/user/assignable/search`
    pub async fn find_assignable_users(&self, params: &FindAssignableUsers) -> Result<Envelope<Vec<User>>> {
        let descriptor = RequestDescriptor::new(
            Method::Get,
            PathTemplate::new("/rest/api/3/user/assignable/search"),
        )
        .query_serialize(params)?;
        self.client.send(&descriptor).await
    }
}
