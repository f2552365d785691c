//! `/rest/api/3/priority` endpoints.

use serde::{Deserialize, Serialize};

use super::Page;
use crate::{
    Decode, Envelope, Expectation, JiraClient, Method, PathTemplate, RequestDescriptor, Result,
};

/// An issue priority.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Priority {
    /// Priority ID.
    pub id: String,
    /// Name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Icon URL.
    #[serde(default)]
    pub icon_url: Option<String>,
    /// Color used in the UI, e.g. `#d04437`.
    #[serde(default)]
    pub status_color: Option<String>,
    /// Whether this is the default priority.
    #[serde(default)]
    pub is_default: Option<bool>,
    /// REST URL of the priority.
    #[serde(default, rename = "self")]
    pub self_url: Option<String>,
}

/// ID of a newly created priority.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedPriority {
    /// Priority ID.
    pub id: String,
}

/// Parameters for [`Priorities::search_priorities`].
#[derive(Debug, Clone, Default)]
pub struct SearchPriorities {
    /// Priority IDs, sent as repeated `id`.
    pub ids: Vec<String>,
    /// Return only the default priority.
    pub only_default: Option<bool>,
    /// Index of the first item to return.
    pub start_at: Option<u64>,
    /// Page size.
    pub max_results: Option<u32>,
}

/// Body of [`Priorities::create_priority`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePriority {
    /// Name, unique.
    pub name: String,
    /// Color in hex, e.g. `#ff0000`.
    pub status_color: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Icon URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// Body of [`Priorities::update_priority`]. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePriority {
    /// Name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Color in hex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_color: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Icon URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// Priority endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Priorities<'a> {
    client: &'a JiraClient,
}

impl<'a> Priorities<'a> {
    pub(crate) const fn new(client: &'a JiraClient) -> Self {
        Self { client }
    }

    /// `GET /rest/api/3/priority/{id}`
    pub async fn get_priority(&self, id: &str) -> Result<Envelope<Priority>> {
        let descriptor =
            RequestDescriptor::new(Method::Get, PathTemplate::new("/rest/api/3/priority/{id}"))
                .path("id", id);
        self.client.send(&descriptor).await
    }

    /// `GET /rest/api/3/priority/search`
    pub async fn search_priorities(&self, params: &SearchPriorities) -> Result<Envelope<Page<Priority>>> {
        let descriptor =
            RequestDescriptor::new(Method::Get, PathTemplate::new("/rest/api/3/priority/search"))
                .query_opt("startAt", params.start_at)
                .query_opt("maxResults", params.max_results)
                .query("id", params.ids.as_slice())
                .query_opt("onlyDefault", params.only_default);
        self.client.send(&descriptor).await
    }

    /// `POST /rest/api/3/priority`, answers `201`.
    pub async fn create_priority(&self, body: &CreatePriority) -> Result<Envelope<CreatedPriority>> {
        let descriptor = RequestDescriptor::new(Method::Post, PathTemplate::new("/rest/api/3/priority"))
            .json(body)?
            .expect(Expectation::json(201));
        self.client.send(&descriptor).await
    }

    /// `PUT /rest/api/3/priority/{id}`, answers `204`.
    pub async fn update_priority(&self, id: &str, body: &UpdatePriority) -> Result<Envelope<()>> {
        let descriptor =
            RequestDescriptor::new(Method::Put, PathTemplate::new("/rest/api/3/priority/{id}"))
                .path("id", id)
                .json(body)?
                .expect(Expectation::no_content());
        self.client.send(&descriptor).await
    }

    /// Delete a priority.
    ///
    /// `DELETE /rest/api/3/priority/{id}`. Jira answers `303` with the task
    /// URL in the `Location` header; the redirect is not followed.
    pub async fn delete_priority(&self, id: &str) -> Result<Envelope<()>> {
        let descriptor =
            RequestDescriptor::new(Method::Delete, PathTemplate::new("/rest/api/3/priority/{id}"))
                .path("id", id)
                .expect(Expectation::no_content().on(303, Decode::None));
        self.client.send(&descriptor).await
    }
}
