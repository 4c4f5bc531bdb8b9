//! Request-context capability
//!
//! The session layer resolves the caller's identity when a connection
//! authenticates; downstream stages only ever need to read it. The
//! `RequestContext` trait is that read-only seam: the serving system's
//! session type implements it once, and every stage that cares about
//! identity takes `&dyn RequestContext`.

/// Read-only view of the identity a request executes on behalf of.
pub trait RequestContext {
    /// The principal (username) of the caller.
    fn principal(&self) -> &str;
}

/// Minimal owned implementation of [`RequestContext`].
///
/// The proxy's real session type carries much more (connection state,
/// charset, transaction status); this type exists for glue code and tests
/// that only need an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    principal: String,
}

impl Session {
    /// Create a session for the given principal
    pub fn new(principal: impl Into<String>) -> Self {
        Self {
            principal: principal.into(),
        }
    }
}

impl RequestContext for Session {
    fn principal(&self) -> &str {
        &self.principal
    }
}
