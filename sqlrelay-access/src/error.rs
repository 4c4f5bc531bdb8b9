//! Error types for sqlrelay-access

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, AccessError>;

/// Access-control error type
///
/// The load-time variants (`ConfigParse`, `PatternCompile`, `UnknownRole`)
/// are recoverable by the caller: a rejected configuration never replaces
/// the last-known-good policy, so the store keeps serving. `AccessDenied`
/// is the expected verdict for an unauthorized request, not a fault.
#[derive(Error, Debug)]
pub enum AccessError {
    /// Configuration bytes are not the expected two-level JSON document
    #[error("access config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A configured table pattern is not a valid regular expression
    #[error("regexp compile error {pattern}: {source}")]
    PatternCompile {
        /// The offending pattern string as written in the configuration
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A configured role name does not match any defined role
    #[error("parse error, invalid role {role}")]
    UnknownRole {
        /// The unresolvable role string as written in the configuration
        role: String,
    },

    /// The principal lacks sufficient role for the table/plan combination
    #[error("user {principal} has no {role} access on table {table}")]
    AccessDenied {
        /// Principal the request executed on behalf of
        principal: String,
        /// Canonical name of the role the plan required
        role: &'static str,
        /// Table the plan targeted
        table: String,
    },
}
