//! `/rest/api/3/resolution` endpoints.

use serde::Deserialize;

use super::Page;
use crate::{Envelope, JiraClient, Method, PathTemplate, RequestDescriptor, Result};

/// An issue resolution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    /// Resolution ID.
    pub id: String,
    /// Name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether this is the default resolution.
    #[serde(default)]
    pub is_default: Option<bool>,
    /// REST URL of the resolution.
    #[serde(default, rename = "self")]
    pub self_url: Option<String>,
}

/// Parameters for [`Resolutions::search_resolutions`].
#[derive(Debug, Clone, Default)]
pub struct SearchResolutions {
    /// Resolution IDs, sent as repeated `id`.
    pub ids: Vec<String>,
    /// Return only the default resolution.
    pub only_default: Option<bool>,
    /// Index of the first item to return.
    pub start_at: Option<u64>,
    /// Page size.
    pub max_results: Option<u32>,
}

/// Resolution endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Resolutions<'a> {
    client: &'a JiraClient,
}

impl<'a> Resolutions<'a> {
    pub(crate) const fn new(client: &'a JiraClient) -> Self {
        Self { client }
    }

    /// `GET /rest/api/3/resolution/{id}`
    pub async fn get_resolution(&self, id: &str) -> Result<Envelope<Resolution>> {
        let descriptor =
            RequestDescriptor::new(Method::Get, PathTemplate::new("/rest/api/3/resolution/{id}"))
                .path("id", id);
        self.client.send(&descriptor).await
    }

    /// `GET /rest/api/3/resolution/search`
    pub async fn search_resolutions(&self, params: &SearchResolutions) -> Result<Envelope<Page<Resolution>>> {
        let descriptor =
            RequestDescriptor::new(Method::Get, PathTemplate::new("/rest/api/3/resolution/search"))
                .query_opt("startAt", params.start_at)
                .query_opt("maxResults", params.max_results)
                .query("id", params.ids.as_slice())
                .query_opt("onlyDefault", params.only_default);
        self.client.send(&descriptor).await
    }
}
