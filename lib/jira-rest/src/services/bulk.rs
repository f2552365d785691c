//! `/rest/api/3/bulk` endpoints.

use serde::{Deserialize, Serialize};

use crate::{Envelope, Expectation, JiraClient, Method, PathTemplate, RequestDescriptor, Result};

/// Body of [`Bulk::submit_bulk_delete`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDelete {
    /// Issue IDs or keys, at most 1000.
    pub selected_issue_ids_or_keys: Vec<String>,
    /// Send a bulk notification email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_bulk_notification: Option<bool>,
}

/// Task created for a submitted bulk operation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedBulkOperation {
    /// Task ID, used to poll progress.
    pub task_id: String,
}

/// Progress of a bulk operation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkOperationProgress {
    /// Task ID.
    pub task_id: String,
    /// `ENQUEUED`, `RUNNING`, `COMPLETE`, `FAILED`, ...
    pub status: String,
    /// Percentage done.
    #[serde(default)]
    pub progress_percent: Option<u8>,
    /// Submission time.
    #[serde(default)]
    pub created: Option<String>,
    /// Start time.
    #[serde(default)]
    pub started: Option<String>,
    /// Last update time.
    #[serde(default)]
    pub updated: Option<String>,
    /// Issues processed so far.
    #[serde(default)]
    pub processed_accessible_issues: Vec<i64>,
    /// Total number of issues in the operation.
    #[serde(default)]
    pub total_issue_count: Option<u64>,
    /// Per-issue failures.
    #[serde(default)]
    pub failed_accessible_issues: Option<serde_json::Value>,
    /// Issues that could not be read.
    #[serde(default)]
    pub invalid_or_inaccessible_issue_count: Option<u64>,
}

/// Bulk operation endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Bulk<'a> {
    client: &'a JiraClient,
}

impl<'a> Bulk<'a> {
    pub(crate) const fn new(client: &'a JiraClient) -> Self {
        Self { client }
    }

    /// `GET /rest/api/3/bulk/queue/{taskId}`
    pub async fn get_bulk_operation_progress(&self, task_id: &str) -> Result<Envelope<BulkOperationProgress>> {
        let descriptor =
            RequestDescriptor::new(Method::Get, PathTemplate::new("/rest/api/3/bulk/queue/{taskId}"))
                .path("taskId", task_id);
        self.client.send(&descriptor).await
    }

    /// `POST /rest/api/3/bulk/issues/delete`, answers `201`.
    pub async fn submit_bulk_delete(&self, body: &BulkDelete) -> Result<Envelope<SubmittedBulkOperation>> {
        let descriptor =
            RequestDescriptor::new(Method::Post, PathTemplate::new("/rest/api/3/bulk/issues/delete"))
                .json(body)?
                .expect(Expectation::json(201));
        self.client.send(&descriptor).await
    }
}
