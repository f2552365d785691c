//! Jira Service Management `/rest/servicedeskapi/request` endpoints.
//!
//! These follow the same envelope contract as the platform endpoints.

use serde::{Deserialize, Serialize};

use crate::{Envelope, Expectation, JiraClient, Method, PathTemplate, RequestDescriptor, Result};

/// Paginated response of the service desk API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDeskPage<T> {
    /// Number of items on this page.
    #[serde(default)]
    pub size: u64,
    /// Index of the first item.
    #[serde(default)]
    pub start: u64,
    /// Page size requested by the server.
    #[serde(default)]
    pub limit: u64,
    /// Whether this is the last page.
    #[serde(default)]
    pub is_last_page: bool,
    /// The items.
    #[serde(default = "Vec::new")]
    pub values: Vec<T>,
}

/// A customer request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    /// Issue ID.
    pub issue_id: String,
    /// Issue key.
    pub issue_key: String,
    /// Request type ID.
    #[serde(default)]
    pub request_type_id: Option<String>,
    /// Service desk ID.
    #[serde(default)]
    pub service_desk_id: Option<String>,
    /// Creation date object (`iso8601`, `epochMillis`, ...).
    #[serde(default)]
    pub created_date: Option<serde_json::Value>,
    /// Reporter.
    #[serde(default)]
    pub reporter: Option<serde_json::Value>,
    /// Field values shown on the portal.
    #[serde(default)]
    pub request_field_values: Vec<serde_json::Value>,
    /// Current status.
    #[serde(default)]
    pub current_status: Option<serde_json::Value>,
}

/// Parameters for [`ServiceDeskRequests::get_customer_requests`].
#[derive(Debug, Clone, Default)]
pub struct GetCustomerRequests {
    /// Text filter on summary.
    pub search_term: Option<String>,
    /// `OWNED_REQUESTS`, `PARTICIPATED_REQUESTS`, ...
    pub request_ownership: Option<String>,
    /// `OPEN_REQUESTS`, `CLOSED_REQUESTS` or `ALL_REQUESTS`.
    pub request_status: Option<String>,
    /// Service desk ID.
    pub service_desk_id: Option<i64>,
    /// Request type ID, requires `service_desk_id`.
    pub request_type_id: Option<i64>,
    /// Expansions, sent as repeated `expand`.
    pub expand: Vec<String>,
    /// Index of the first item to return.
    pub start: Option<u64>,
    /// Page size.
    pub limit: Option<u32>,
}

/// Body of [`ServiceDeskRequests::create_customer_request`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    /// Service desk ID.
    pub service_desk_id: String,
    /// Request type ID.
    pub request_type_id: String,
    /// Field values, e.g. `{"summary": "...", "description": "..."}`.
    pub request_field_values: serde_json::Map<String, serde_json::Value>,
    /// Raise on behalf of this customer account ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raise_on_behalf_of: Option<String>,
    /// Account IDs of participants.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub request_participants: Vec<String>,
}

/// Customer request endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ServiceDeskRequests<'a> {
    client: &'a JiraClient,
}

impl<'a> ServiceDeskRequests<'a> {
    pub(crate) const fn new(client: &'a JiraClient) -> Self {
        Self { client }
    }

    /// `GET /rest/servicedeskapi/request`
    pub async fn get_customer_requests(
        &self,
        params: &GetCustomerRequests,
    ) -> Result<Envelope<ServiceDeskPage<CustomerRequest>>> {
        let descriptor =
            RequestDescriptor::new(Method::Get, PathTemplate::new("/rest/servicedeskapi/request"))
                .query_opt("searchTerm", params.search_term.as_deref())
                .query_opt("requestOwnership", params.request_ownership.as_deref())
                .query_opt("requestStatus", params.request_status.as_deref())
                .query_opt("serviceDeskId", params.service_desk_id)
                .query_opt("requestTypeId", params.request_type_id)
                .query("expand", params.expand.as_slice())
                .query_opt("start", params.start)
                .query_opt("limit", params.limit);
        self.client.send(&descriptor).await
    }

    /// `GET /rest/servicedeskapi/request/{issueIdOrKey}`
    pub async fn get_customer_request(
        &self,
        issue_id_or_key: &str,
        expand: &[String],
    ) -> Result<Envelope<CustomerRequest>> {
        let descriptor = RequestDescriptor::new(
            Method::Get,
            PathTemplate::new("/rest/servicedeskapi/request/{issueIdOrKey}"),
        )
        .path("issueIdOrKey", issue_id_or_key)
        .query("expand", expand);
        self.client.send(&descriptor).await
    }

    /// `POST /rest/servicedeskapi/request`, answers `201`.
    pub async fn create_customer_request(
        &self,
        body: &CreateCustomerRequest,
    ) -> Result<Envelope<CustomerRequest>> {
        let descriptor =
            RequestDescriptor::new(Method::Post, PathTemplate::new("/rest/servicedeskapi/request"))
                .json(body)?
                .expect(Expectation::json(201));
        self.client.send(&descriptor).await
    }
}
