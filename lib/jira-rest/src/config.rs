//! Client configuration types.

use std::time::Duration;

use url::Url;

use crate::{Auth, Error, Result};

const DEFAULT_USER_AGENT: &str = concat!("jira-rest/", env!("CARGO_PKG_VERSION"));

/// Configuration for a Jira client.
///
/// Immutable once built; the client shares it read-only.
#[derive(Debug, Clone)]
pub struct JiraConfig {
    /// Site base URL, always ending with `/`.
    pub base_url: Url,
    /// Credentials injected into every request.
    pub auth: Auth,
    /// Whole-exchange timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Connection timeout duration.
    pub connect_timeout: Duration,
    /// Maximum idle connections per host.
    pub pool_idle_per_host: usize,
    /// Idle connection timeout.
    pub pool_idle_timeout: Duration,
    /// `User-Agent` sent by the direct transport.
    pub user_agent: String,
}

impl JiraConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> JiraConfigBuilder {
        JiraConfigBuilder::default()
    }

    /// Read the configuration from the process environment.
    ///
    /// | Variable | Meaning |
    /// |----------|---------|
    /// | `JIRA_BASE_URL` | Site URL, required |
    /// | `JIRA_EMAIL` + `JIRA_API_TOKEN` | Basic auth |
    /// | `JIRA_BEARER_TOKEN` | Bearer auth, wins over basic |
    /// | `JIRA_TIMEOUT_SECS` | Request timeout in seconds |
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a variable is missing or malformed.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Same as [`JiraConfig::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a variable is missing or malformed.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let base_url =
            non_empty("JIRA_BASE_URL").ok_or_else(|| Error::config("JIRA_BASE_URL is not set"))?;

        let auth = if let Some(token) = non_empty("JIRA_BEARER_TOKEN") {
            Auth::Bearer(token)
        } else {
            match (non_empty("JIRA_EMAIL"), non_empty("JIRA_API_TOKEN")) {
                (Some(email), Some(api_token)) => Auth::Basic { email, api_token },
                (None, None) => Auth::Ambient,
                (Some(_), None) => return Err(Error::config("JIRA_EMAIL is set without JIRA_API_TOKEN")),
                (None, Some(_)) => return Err(Error::config("JIRA_API_TOKEN is set without JIRA_EMAIL")),
            }
        };

        let mut builder = Self::builder().base_url(base_url).auth(auth);
        if let Some(secs) = non_empty("JIRA_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|_| Error::config(format!("JIRA_TIMEOUT_SECS is not a number: {secs}")))?;
            if secs == 0 {
                return Err(Error::config("JIRA_TIMEOUT_SECS must be greater than zero"));
            }
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }
}

/// Builder for [`JiraConfig`].
#[derive(Debug, Clone, Default)]
pub struct JiraConfigBuilder {
    base_url: Option<String>,
    auth: Option<Auth>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    pool_idle_per_host: Option<usize>,
    pool_idle_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl JiraConfigBuilder {
    /// Set the site base URL, e.g. `https://your-domain.atlassian.net`.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the credentials.
    #[must_use]
    pub fn auth(mut self, auth: Auth) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connection timeout.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the maximum idle connections per host.
    #[must_use]
    pub const fn pool_idle_per_host(mut self, count: usize) -> Self {
        self.pool_idle_per_host = Some(count);
        self
    }

    /// Set the idle connection timeout.
    #[must_use]
    pub const fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = Some(timeout);
        self
    }

    /// Set the `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the base URL is missing or is not an
    /// `http`/`https` URL, or if the timeout is zero.
    pub fn build(self) -> Result<JiraConfig> {
        let raw = self
            .base_url
            .ok_or_else(|| Error::config("base URL is required"))?;
        let base_url = normalize_base_url(&raw)?;
        if self.timeout.is_some_and(|timeout| timeout.is_zero()) {
            return Err(Error::config("timeout must be greater than zero"));
        }

        Ok(JiraConfig {
            base_url,
            auth: self.auth.unwrap_or_default(),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout.unwrap_or(Duration::from_secs(10)),
            pool_idle_per_host: self.pool_idle_per_host.unwrap_or(32),
            pool_idle_timeout: self.pool_idle_timeout.unwrap_or(Duration::from_secs(90)),
            user_agent: self
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        })
    }
}

/// Parse a site URL and make sure its path ends with `/`, so relative
/// joins keep any path prefix.
fn normalize_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim())
        .map_err(|e| Error::config(format!("invalid base URL {raw:?}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::config(format!(
            "base URL must be http or https, got {}",
            url.scheme()
        )));
    }
    if url.cannot_be_a_base() || url.host().is_none() {
        return Err(Error::config(format!("base URL has no host: {raw}")));
    }
    url.set_query(None);
    url.set_fragment(None);
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
