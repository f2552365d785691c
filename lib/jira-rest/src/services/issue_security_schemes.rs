//! `/rest/api/3/issuesecurityschemes` endpoints.

use serde::Deserialize;

use crate::{Envelope, JiraClient, Method, PathTemplate, RequestDescriptor, Result};

/// All issue security schemes of the site.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySchemes {
    /// The schemes.
    #[serde(default)]
    pub issue_security_schemes: Vec<SecurityScheme>,
}

/// An issue security scheme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityScheme {
    /// Scheme ID.
    pub id: i64,
    /// Name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// ID of the level applied to new issues.
    #[serde(default)]
    pub default_security_level_id: Option<i64>,
    /// Levels, only returned by the single-scheme endpoint.
    #[serde(default)]
    pub levels: Vec<SecurityLevel>,
    /// REST URL of the scheme.
    #[serde(default, rename = "self")]
    pub self_url: Option<String>,
}

/// A level within an issue security scheme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityLevel {
    /// Level ID.
    pub id: String,
    /// Name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether this is the default level.
    #[serde(default)]
    pub is_default: Option<bool>,
}

/// Issue security scheme endpoints.
#[derive(Debug, Clone, Copy)]
pub struct IssueSecuritySchemes<'a> {
    client: &'a JiraClient,
}

impl<'a> IssueSecuritySchemes<'a> {
    pub(crate) const fn new(client: &'a JiraClient) -> Self {
        Self { client }
    }

    /// `GET /rest/api/3/issuesecurityschemes`
    pub async fn get_issue_security_schemes(&self) -> Result<Envelope<SecuritySchemes>> {
        let descriptor =
            RequestDescriptor::new(Method::Get, PathTemplate::new("/rest/api/3/issuesecurityschemes"));
        self.client.send(&descriptor).await
    }

    /// `GET /rest/api/3/issuesecurityschemes/{id}`
    pub async fn get_issue_security_scheme(&self, id: i64) -> Result<Envelope<SecurityScheme>> {
        let descriptor = RequestDescriptor::new(
            Method::Get,
            PathTemplate::new("/rest/api/3/issuesecurityschemes/{id}"),
        )
        .path("id", id);
        self.client.send(&descriptor).await
    }
}
