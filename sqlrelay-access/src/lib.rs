//! # sqlrelay Access
//!
//! Table-level access control for the sqlrelay proxy.
//!
//! Before an execution plan runs against a table it must be approved by
//! every policy registered with the proxy. This crate provides:
//!
//! - [`Role`]: the ordered privilege set (`Reader < Writer < Admin`) and
//!   the plan-kind → minimum-role requirement mapping
//! - [`AccessChecker`]: the two-operation capability every policy
//!   implements (`load` a configuration, `allow` a request)
//! - [`TableAclChecker`]: the pattern-based table ACL, the reference
//!   checker implementation
//! - [`CheckerRegistry`]: composite of independent checkers; a request is
//!   admitted only if all of them grant it
//!
//! # Usage
//!
//! Build the registry once at startup and share it with the serving
//! pipeline:
//!
//! ```
//! use sqlrelay_access::{CheckerRegistry, TableAclChecker};
//! use sqlrelay_core::{ExecPlan, PlanKind, Session};
//! use std::sync::Arc;
//!
//! # fn main() -> sqlrelay_access::Result<()> {
//! let acl = TableAclChecker::with_config(
//!     br#"{"orders_.*": {"READER": "*", "WRITER": "billing"}}"#,
//! )?;
//!
//! let mut registry = CheckerRegistry::new();
//! registry.register(Arc::new(acl));
//! let registry = Arc::new(registry);
//!
//! let session = Session::new("billing");
//! let plan = ExecPlan::new(PlanKind::DmlPk, "orders_2024");
//! assert!(registry.allow(&session, &plan).is_ok());
//! # Ok(())
//! # }
//! ```
//!
//! Checks are read-only and proceed concurrently; reloading a checker's
//! configuration is serialized against in-flight checks by the checker
//! itself. The registry is immutable once shared.

pub mod checker;
pub mod error;
pub mod role;
pub mod table_acl;

// Re-export main types
pub use checker::{AccessChecker, CheckerRegistry};
pub use error::{AccessError, Result};
pub use role::Role;
pub use table_acl::{TableAclChecker, WILDCARD_PRINCIPAL};
