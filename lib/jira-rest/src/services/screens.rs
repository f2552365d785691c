//! `/rest/api/3/screens` endpoints.

use serde::{Deserialize, Serialize};

use super::Page;
use crate::{Envelope, Expectation, JiraClient, Method, PathTemplate, RequestDescriptor, Result};

/// A screen.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    /// Screen ID.
    pub id: i64,
    /// Name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Scope, present for team-managed projects.
    #[serde(default)]
    pub scope: Option<serde_json::Value>,
}

/// Parameters for [`Screens::get_screens`].
#[derive(Debug, Clone, Default)]
pub struct GetScreens {
    /// Screen IDs, sent as repeated `id`.
    pub ids: Vec<i64>,
    /// Case-insensitive name filter.
    pub query_string: Option<String>,
    /// `GLOBAL`, `TEMPLATE` or `PROJECT`, sent as repeated `scope`.
    pub scope: Vec<String>,
    /// Sort order, e.g. `-name`.
    pub order_by: Option<String>,
    /// Index of the first item to return.
    pub start_at: Option<u64>,
    /// Page size.
    pub max_results: Option<u32>,
}

/// Body of [`Screens::create_screen`].
#[derive(Debug, Clone, Serialize)]
pub struct CreateScreen {
    /// Name, unique.
    pub name: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Screen endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Screens<'a> {
    client: &'a JiraClient,
}

impl<'a> Screens<'a> {
    pub(crate) const fn new(client: &'a JiraClient) -> Self {
        Self { client }
    }

    /// `GET /rest/api/3/screens`
    pub async fn get_screens(&self, params: &GetScreens) -> Result<Envelope<Page<Screen>>> {
        let descriptor = RequestDescriptor::new(Method::Get, PathTemplate::new("/rest/api/3/screens"))
            .query_opt("startAt", params.start_at)
            .query_opt("maxResults", params.max_results)
            .query("id", params.ids.as_slice())
            .query_opt("queryString", params.query_string.as_deref())
            .query("scope", params.scope.as_slice())
            .query_opt("orderBy", params.order_by.as_deref());
        self.client.send(&descriptor).await
    }

    /// `POST /rest/api/3/screens`, answers `201`.
    pub async fn create_screen(&self, body: &CreateScreen) -> Result<Envelope<Screen>> {
        let descriptor = RequestDescriptor::new(Method::Post, PathTemplate::new("/rest/api/3/screens"))
            .json(body)?
            .expect(Expectation::json(201));
        self.client.send(&descriptor).await
    }

    /// `DELETE /rest/api/3/screens/{screenId}`, answers `204`.
    pub async fn delete_screen(&self, screen_id: i64) -> Result<Envelope<()>> {
        let descriptor = RequestDescriptor::new(
            Method::Delete,
            PathTemplate::new("/rest/api/3/screens/{screenId}"),
        )
        .path("screenId", screen_id)
        .expect(Expectation::no_content());
        self.client.send(&descriptor).await
    }
}
