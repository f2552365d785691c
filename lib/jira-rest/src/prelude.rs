//! Prelude module for convenient imports.
//!
//! ```ignore
//! use jira_rest::prelude::*;
//! ```

pub use crate::{
    ApiError, Auth, Envelope, Error, Expectation, JiraClient, JiraConfig, Method, PathTemplate,
    Payload, RequestDescriptor, Result,
};
pub use crate::services::{GroupRef, Page};
pub use serde::{Deserialize, Serialize};
