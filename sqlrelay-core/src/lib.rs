//! # sqlrelay Core
//!
//! Boundary types shared across the sqlrelay proxy pipeline.
//!
//! This crate provides:
//! - `PlanKind`: the closed set of execution-plan classifications the
//!   planner produces
//! - `ExecPlan`: the per-request plan summary consumed by downstream
//!   stages (authorization, routing, audit)
//! - `RequestContext`: the capability through which a pipeline stage
//!   reads the identity of the caller
//!
//! ## Design Principles
//!
//! 1. **Runtime-agnostic**: No tokio, no forced executor; these types are
//!    consulted synchronously on the request path
//! 2. **Thin boundary**: The SQL parser/planner and the session layer own
//!    the heavy representations; this crate carries only what crosses the
//!    seam between them

pub mod context;
pub mod plan;

// Re-export main types
pub use context::{RequestContext, Session};
pub use plan::{ExecPlan, PlanKind};
