//! Execution-plan summary types
//!
//! The planner compiles each statement into a full execution plan; the
//! pipeline stages downstream of it (authorization, routing, audit) only
//! need the plan's classification and the table it targets. `ExecPlan`
//! carries exactly that.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a compiled execution plan.
///
/// The set is closed: every plan the upstream planner can produce carries
/// exactly one of these tags. Consumers that map kinds to behavior should
/// match exhaustively so that adding a variant here is a compile error
/// there, not a silent fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanKind {
    /// Full-scan or otherwise unconstrained SELECT
    PassSelect,
    /// SELECT by primary-key equality
    PkEqual,
    /// SELECT by primary-key IN list
    PkIn,
    /// SELECT containing a subquery
    SelectSubquery,
    /// Session variable assignment (SET)
    Set,
    /// DML passed through without index analysis
    PassDml,
    /// UPDATE/DELETE by primary key
    DmlPk,
    /// UPDATE/DELETE driven by a subquery
    DmlSubquery,
    /// INSERT with explicit primary key
    InsertPk,
    /// INSERT whose values come from a subquery
    InsertSubquery,
    /// Schema-altering statement (CREATE/ALTER/DROP)
    Ddl,
}

impl PlanKind {
    /// Canonical wire tag for this kind, e.g. `PASS_SELECT`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanKind::PassSelect => "PASS_SELECT",
            PlanKind::PkEqual => "PK_EQUAL",
            PlanKind::PkIn => "PK_IN",
            PlanKind::SelectSubquery => "SELECT_SUBQUERY",
            PlanKind::Set => "SET",
            PlanKind::PassDml => "PASS_DML",
            PlanKind::DmlPk => "DML_PK",
            PlanKind::DmlSubquery => "DML_SUBQUERY",
            PlanKind::InsertPk => "INSERT_PK",
            PlanKind::InsertSubquery => "INSERT_SUBQUERY",
            PlanKind::Ddl => "DDL",
        }
    }
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of a compiled plan handed to pipeline stages.
///
/// Only a single table name is carried: multi-table plans report their
/// primary table, a known limitation inherited from the planner's current
/// output shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecPlan {
    /// Classification assigned by the planner
    pub kind: PlanKind,
    /// Name of the table the plan targets
    pub table: String,
}

impl ExecPlan {
    /// Create a plan summary
    pub fn new(kind: PlanKind, table: impl Into<String>) -> Self {
        Self {
            kind,
            table: table.into(),
        }
    }
}
