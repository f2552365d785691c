//! Jira Software `/rest/agile/1.0/sprint` endpoints.

use serde::{Deserialize, Serialize};

use crate::{Envelope, Expectation, JiraClient, Method, PathTemplate, RequestDescriptor, Result};

/// A sprint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    /// Sprint ID.
    pub id: i64,
    /// Name.
    pub name: String,
    /// `future`, `active` or `closed`.
    #[serde(default)]
    pub state: Option<String>,
    /// Planned start, ISO 8601.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Planned end, ISO 8601.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Completion time, ISO 8601.
    #[serde(default)]
    pub complete_date: Option<String>,
    /// Board the sprint was created on.
    #[serde(default)]
    pub origin_board_id: Option<i64>,
    /// Sprint goal.
    #[serde(default)]
    pub goal: Option<String>,
    /// REST URL of the sprint.
    #[serde(default, rename = "self")]
    pub self_url: Option<String>,
}

/// Body of [`Sprints::create_sprint`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSprint {
    /// Name.
    pub name: String,
    /// Board to create the sprint on.
    pub origin_board_id: i64,
    /// Planned start, ISO 8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Planned end, ISO 8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Sprint goal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
}

/// Body of [`Sprints::move_issues_to_sprint`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveIssuesToSprint {
    /// Issue IDs or keys, at most 50.
    pub issues: Vec<String>,
    /// Rank the issues before this one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_before_issue: Option<String>,
    /// Rank the issues after this one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_after_issue: Option<String>,
    /// Rank field to use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_custom_field_id: Option<i64>,
}

/// Sprint endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Sprints<'a> {
    client: &'a JiraClient,
}

impl<'a> Sprints<'a> {
    pub(crate) const fn new(client: &'a JiraClient) -> Self {
        Self { client }
    }

    /// `GET /rest/agile/1.0/sprint/{sprintId}`
    pub async fn get_sprint(&self, sprint_id: i64) -> Result<Envelope<Sprint>> {
        let descriptor =
            RequestDescriptor::new(Method::Get, PathTemplate::new("/rest/agile/1.0/sprint/{sprintId}"))
                .path("sprintId", sprint_id);
        self.client.send(&descriptor).await
    }

    /// `POST /rest/agile/1.0/sprint`, answers `201`.
    pub async fn create_sprint(&self, body: &CreateSprint) -> Result<Envelope<Sprint>> {
        let descriptor = RequestDescriptor::new(Method::Post, PathTemplate::new("/rest/agile/1.0/sprint"))
            .json(body)?
            .expect(Expectation::json(201));
        self.client.send(&descriptor).await
    }

    /// `POST /rest/agile/1.0/sprint/{sprintId}/issue`, answers `204`.
    pub async fn move_issues_to_sprint(&self, sprint_id: i64, body: &MoveIssuesToSprint) -> Result<Envelope<()>> {
        let descriptor = RequestDescriptor::new(
            Method::Post,
            PathTemplate::new("/rest/agile/1.0/sprint/{sprintId}/issue"),
        )
        .path("sprintId", sprint_id)
        .json(body)?
        .expect(Expectation::no_content());
        self.client.send(&descriptor).await
    }

    /// `DELETE /rest/agile/1.0/sprint/{sprintId}`, answers `204`.
    pub async fn delete_sprint(&self, sprint_id: i64) -> Result<Envelope<()>> {
        let descriptor = RequestDescriptor::new(
            Method::Delete,
            PathTemplate::new("/rest/agile/1.0/sprint/{sprintId}"),
        )
        .path("sprintId", sprint_id)
        .expect(Expectation::no_content());
        self.client.send(&descriptor).await
    }
}
