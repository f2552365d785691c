//! URL path templates and their resolution.
//!
//! Jira endpoints are declared as templates such as
//! `/rest/api/3/group/{groupId}`. Each `{name}` placeholder is replaced by
//! the percent-encoded value of the matching path parameter.

use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::{Error, Result};

/// Path segment encoding set: everything except unreserved characters and
/// sub-delimiters is escaped, so a value can never introduce a new segment,
/// a query, or a fragment. Dot segments are rejected separately, since URL
/// normalization collapses `.` and `..` even when percent-encoded.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\')
    .add(b'%');

/// A path template with `{name}` placeholders.
///
/// # Example
///
/// ```
/// use jira_rest_core::{PathParams, PathTemplate};
///
/// let template = PathTemplate::new("/rest/api/3/priority/{id}");
/// let params = PathParams::new().with("id", 10001);
/// assert_eq!(template.resolve(&params).unwrap(), "/rest/api/3/priority/10001");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathTemplate(&'static str);

impl PathTemplate {
    /// Create a new path template.
    #[must_use]
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    /// Get the template string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Placeholder names in order of appearance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTemplate`] if the template is malformed.
    pub fn placeholders(&self) -> Result<Vec<&'static str>> {
        let mut names = Vec::new();
        self.walk(|segment| {
            if let Segment::Placeholder(name) = segment {
                names.push(name);
            }
            Ok(())
        })?;
        Ok(names)
    }

    /// Substitute every placeholder with its percent-encoded parameter value.
    ///
    /// This is a pure function of the template and the parameters; it never
    /// touches the network.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingPathParameter`] if a placeholder has no
    /// parameter, [`Error::InvalidPathParameter`] if a value is empty, `.`
    /// or `..`, or [`Error::InvalidTemplate`] if the template is malformed.
    pub fn resolve(&self, params: &PathParams) -> Result<String> {
        let mut path = String::with_capacity(self.0.len());
        self.walk(|segment| {
            match segment {
                Segment::Literal(literal) => path.push_str(literal),
                Segment::Placeholder(name) => {
                    let value = params.get(name).ok_or_else(|| Error::MissingPathParameter {
                        name: name.to_string(),
                        template: self.0,
                    })?;
                    if matches!(value, "" | "." | "..") {
                        return Err(Error::InvalidPathParameter {
                            name: name.to_string(),
                            value: value.to_string(),
                            template: self.0,
                        });
                    }
                    path.extend(utf8_percent_encode(value, PATH_SEGMENT_ENCODE_SET));
                }
            }
            Ok(())
        })?;
        Ok(path)
    }

    fn walk(&self, mut visit: impl FnMut(Segment) -> Result<()>) -> Result<()> {
        let mut rest = self.0;
        while let Some((literal, tail)) = rest.split_once('{') {
            visit(Segment::Literal(self.check_literal(literal)?))?;
            let Some((name, after)) = tail.split_once('}') else {
                return Err(self.invalid("unterminated placeholder"));
            };
            if name.is_empty() {
                return Err(self.invalid("empty placeholder"));
            }
            if name.contains('{') {
                return Err(self.invalid("nested placeholder"));
            }
            visit(Segment::Placeholder(name))?;
            rest = after;
        }
        visit(Segment::Literal(self.check_literal(rest)?))
    }

    fn check_literal(&self, literal: &'static str) -> Result<&'static str> {
        if literal.contains('}') {
            Err(self.invalid("unmatched '}'"))
        } else {
            Ok(literal)
        }
    }

    fn invalid(&self, reason: &'static str) -> Error {
        Error::InvalidTemplate {
            template: self.0,
            reason,
        }
    }
}

enum Segment {
    Literal(&'static str),
    Placeholder(&'static str),
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PathTemplate {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// Path parameter values, keyed by placeholder name.
///
/// Values are stored in their string form; numbers and strings are both
/// accepted through [`fmt::Display`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    entries: Vec<(String, String)>,
}

impl PathParams {
    /// Create an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set a parameter, replacing any previous value of the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl fmt::Display) {
        let name = name.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Chainable form of [`PathParams::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(name, value);
        self
    }

    /// Value of a parameter, unencoded.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no parameter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
