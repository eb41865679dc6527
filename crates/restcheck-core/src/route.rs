//! Route expectation value types.
//!
//! A [`RouteExpectation`] states that a router must map an HTTP method and
//! path to a specific controller, action, and (for member routes) id. The
//! types here are plain immutable values with deterministic serialization;
//! building them is the routing crate's job.

use crate::action::ActionKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP method of an expected route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// GET request.
    Get,
    /// POST request.
    Post,
    /// PUT request.
    Put,
    /// DELETE request.
    Delete,
}

impl HttpMethod {
    /// Uppercase method name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Route parameters a router must produce for a matched request.
///
/// Serializes as a string-keyed mapping; `id` is omitted entirely when the
/// route does not address a single member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteParams {
    /// Controller the route dispatches to (the raw resource token).
    pub controller: String,

    /// Action the route dispatches to.
    pub action: ActionKind,

    /// Member id, present only for member routes in plural mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

/// Options recognized when building route expectations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteOptions {
    singular: bool,
    controller: Option<String>,
}

impl RouteOptions {
    /// Options with defaults: plural mode, no controller override.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Address the resource via a single canonical path, without ids.
    #[must_use]
    pub fn singular(mut self) -> Self {
        self.singular = true;
        self
    }

    /// Override the controller path segment instead of deriving it from
    /// the resource token. The override always wins over inflection.
    #[must_use]
    pub fn controller(mut self, name: impl Into<String>) -> Self {
        self.controller = Some(name.into());
        self
    }

    /// Whether the resource is addressed in singular mode.
    #[must_use]
    pub fn is_singular(&self) -> bool {
        self.singular
    }

    /// The explicit controller override, if any.
    #[must_use]
    pub fn controller_override(&self) -> Option<&str> {
        self.controller.as_deref()
    }
}

/// An (HTTP method, path, parameter mapping) triple a router must satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteExpectation {
    /// Expected HTTP method.
    pub method: HttpMethod,

    /// Expected request path, fully resolved.
    pub path: String,

    /// Parameters the router must extract.
    pub params: RouteParams,
}

impl fmt::Display for RouteExpectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} => {}#{}",
            self.method, self.path, self.params.controller, self.params.action
        )?;
        if let Some(id) = self.params.id {
            write!(f, " (id: {id})")?;
        }
        Ok(())
    }
}
