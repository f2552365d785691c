//! Expectation tables: which statuses count as success and how to decode them.

/// How a successful response body is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decode {
    /// Parse the body as JSON into the caller's type.
    Json,
    /// Pass the body through as UTF-8 text.
    Text,
    /// The endpoint produces no body; whatever arrives is discarded.
    None,
}

/// Which statuses a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusMatch {
    /// Exactly this status code.
    Code(u16),
    /// Any 2xx status.
    AnySuccess,
}

impl StatusMatch {
    /// Returns `true` if `status` falls under this rule.
    #[must_use]
    pub const fn matches(&self, status: u16) -> bool {
        match self {
            Self::Code(code) => *code == status,
            Self::AnySuccess => status >= 200 && status < 300,
        }
    }
}

/// Per-status decode strategies declared by an endpoint.
///
/// A status that matches no rule is an application error and ends up in
/// [`Envelope::Failure`](crate::Envelope::Failure). Exact-code rules take
/// precedence over [`StatusMatch::AnySuccess`].
///
/// # Example
///
/// ```
/// use jira_rest_core::{Decode, Expectation};
///
/// // POST /rest/api/3/priority answers 201 with the new id.
/// let created = Expectation::json(201);
/// assert_eq!(created.decode_for(201), Some(Decode::Json));
/// assert_eq!(created.decode_for(400), None);
///
/// // DELETE endpoints produce no body at all.
/// let deleted = Expectation::no_content();
/// assert_eq!(deleted.decode_for(204), Some(Decode::None));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expectation {
    rules: Vec<(StatusMatch, Decode)>,
}

impl Expectation {
    /// An empty table: every status is an error until rules are added.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// A JSON body on `status`.
    #[must_use]
    pub fn json(status: u16) -> Self {
        Self::new().on(status, Decode::Json)
    }

    /// A text body on `status`.
    #[must_use]
    pub fn text(status: u16) -> Self {
        Self::new().on(status, Decode::Text)
    }

    /// No response body is ever produced; any 2xx is a success.
    #[must_use]
    pub fn no_content() -> Self {
        Self::new().on_any_success(Decode::None)
    }

    /// Add a rule for an exact status.
    #[must_use]
    pub fn on(mut self, status: u16, decode: Decode) -> Self {
        self.rules.push((StatusMatch::Code(status), decode));
        self
    }

    /// Add a rule for every 2xx status.
    #[must_use]
    pub fn on_any_success(mut self, decode: Decode) -> Self {
        self.rules.push((StatusMatch::AnySuccess, decode));
        self
    }

    /// Decode strategy for `status`, or `None` if the status is not declared.
    #[must_use]
    pub fn decode_for(&self, status: u16) -> Option<Decode> {
        let exact = self
            .rules
            .iter()
            .find(|(m, _)| matches!(m, StatusMatch::Code(code) if *code == status));
        exact
            .or_else(|| self.rules.iter().find(|(m, _)| m.matches(status)))
            .map(|(_, decode)| *decode)
    }

    /// Returns `true` if `status` is a declared success.
    #[must_use]
    pub fn is_expected(&self, status: u16) -> bool {
        self.decode_for(status).is_some()
    }

    /// Returns `true` if some declared status carries a JSON body, or if the
    /// table is still empty.
    #[must_use]
    pub fn accepts_json(&self) -> bool {
        self.rules.is_empty() || self.rules.iter().any(|(_, d)| *d == Decode::Json)
    }
}
