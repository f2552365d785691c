//! Per-resource endpoint services.
//!
//! Each service is a borrowed handle obtained from [`JiraClient`]. Its
//! methods build one [`RequestDescriptor`](crate::RequestDescriptor) per
//! REST operation and return the interpreted [`Envelope`](crate::Envelope).
//!
//! ```ignore
//! let page = client
//!     .groups()
//!     .get_group_members(&GetGroupMembers::new(GroupRef::name("jira-users")))
//!     .await?
//!     .into_json()?;
//! ```

mod bulk;
mod groups;
mod issue_security_schemes;
mod priorities;
mod resolutions;
mod screens;
mod service_desk_requests;
mod sprints;
mod user_search;

pub use bulk::{Bulk, BulkDelete, BulkOperationProgress, SubmittedBulkOperation};
pub use groups::{
    BulkGetGroups, GetGroupMembers, Group, GroupDetails, GroupRef, Groups, RemoveGroup,
};
pub use issue_security_schemes::{
    IssueSecuritySchemes, SecurityLevel, SecurityScheme, SecuritySchemes,
};
pub use priorities::{
    CreatePriority, CreatedPriority, Priorities, Priority, SearchPriorities, UpdatePriority,
};
pub use resolutions::{Resolution, Resolutions, SearchResolutions};
pub use screens::{CreateScreen, GetScreens, Screen, Screens};
pub use service_desk_requests::{
    CreateCustomerRequest, CustomerRequest, GetCustomerRequests, ServiceDeskPage,
    ServiceDeskRequests,
};
pub use sprints::{CreateSprint, MoveIssuesToSprint, Sprint, Sprints};
pub use user_search::{FindAssignableUsers, FindUsers, UserSearch};

use serde::Deserialize;

use crate::JiraClient;

/// Offset-paginated response used by most `/rest/api/3` search endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Index of the first item returned.
    #[serde(default)]
    pub start_at: u64,
    /// Page size requested by the server.
    #[serde(default)]
    pub max_results: u64,
    /// Total number of items, when the server reports it.
    #[serde(default)]
    pub total: Option<u64>,
    /// Whether this is the last page.
    #[serde(default)]
    pub is_last: Option<bool>,
    /// The items.
    #[serde(default = "Vec::new")]
    pub values: Vec<T>,
    /// URL of the next page.
    #[serde(default)]
    pub next_page: Option<String>,
}

impl<T> Page<T> {
    /// Returns `true` if another page may follow this one.
    #[must_use]
    pub fn has_more(&self) -> bool {
        if let Some(is_last) = self.is_last {
            return !is_last;
        }
        let seen = self.start_at.saturating_add(self.values.len() as u64);
        self.total.is_some_and(|total| seen < total)
    }

    /// `startAt` for the following page.
    #[must_use]
    pub fn next_start_at(&self) -> u64 {
        self.start_at.saturating_add(self.values.len() as u64)
    }
}

/// A Jira user as returned by group and user-search endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Atlassian account ID.
    pub account_id: String,
    /// `atlassian`, `app` or `customer`.
    #[serde(default)]
    pub account_type: Option<String>,
    /// Display name.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Email address, subject to the user's privacy settings.
    #[serde(default)]
    pub email_address: Option<String>,
    /// Whether the account is active.
    #[serde(default)]
    pub active: Option<bool>,
    /// Time zone.
    #[serde(default)]
    pub time_zone: Option<String>,
}

impl JiraClient {
    /// Group membership and management.
    #[must_use]
    pub const fn groups(&self) -> Groups<'_> {
        Groups::new(self)
    }

    /// Issue priorities.
    #[must_use]
    pub const fn priorities(&self) -> Priorities<'_> {
        Priorities::new(self)
    }

    /// Issue resolutions.
    #[must_use]
    pub const fn resolutions(&self) -> Resolutions<'_> {
        Resolutions::new(self)
    }

    /// Issue security schemes.
    #[must_use]
    pub const fn issue_security_schemes(&self) -> IssueSecuritySchemes<'_> {
        IssueSecuritySchemes::new(self)
    }

    /// Screens.
    #[must_use]
    pub const fn screens(&self) -> Screens<'_> {
        Screens::new(self)
    }

    /// Jira Software sprints.
    #[must_use]
    pub const fn sprints(&self) -> Sprints<'_> {
        Sprints::new(self)
    }

    /// User search.
    #[must_use]
    pub const fn user_search(&self) -> UserSearch<'_> {
        UserSearch::new(self)
    }

    /// Jira Service Management customer requests.
    #[must_use]
    pub const fn service_desk_requests(&self) -> ServiceDeskRequests<'_> {
        ServiceDeskRequests::new(self)
    }

    /// Bulk issue operations.
    #[must_use]
    pub const fn bulk(&self) -> Bulk<'_> {
        Bulk::new(self)
    }
}
