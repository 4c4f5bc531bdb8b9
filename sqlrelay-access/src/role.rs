//! Role ranking and plan requirements
//!
//! Roles form a small totally ordered set: a higher role subsumes the
//! capabilities of every lower one, so `role >= requirement` is the whole
//! of the grant check. The set is closed and defined once; configuration
//! refers to roles by name, case-insensitively.

use crate::error::{AccessError, Result};
use sqlrelay_core::PlanKind;
use std::fmt;

/// Privilege level granted to a principal for a set of tables.
///
/// Ordering follows declaration order: `Reader < Writer < Admin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    /// Can run read-only plans
    Reader,
    /// Can additionally run mutating plans
    Writer,
    /// Can run any plan, including schema changes
    Admin,
}

impl Role {
    /// Canonical uppercase name of this role.
    pub fn name(self) -> &'static str {
        match self {
            Role::Reader => "READER",
            Role::Writer => "WRITER",
            Role::Admin => "ADMIN",
        }
    }

    /// Resolve a role from its name, case-insensitively.
    ///
    /// Fails with [`AccessError::UnknownRole`] for any string outside the
    /// defined set.
    pub fn by_name(name: &str) -> Result<Role> {
        match name.to_ascii_uppercase().as_str() {
            "READER" => Ok(Role::Reader),
            "WRITER" => Ok(Role::Writer),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(AccessError::UnknownRole {
                role: name.to_string(),
            }),
        }
    }

    /// Minimum role required to execute a plan of the given kind.
    ///
    /// The match is exhaustive over [`PlanKind`]: a new classification
    /// added upstream fails compilation here until it is mapped, so an
    /// unmapped plan kind can never fall through to an implicit allow.
    pub fn required_for(kind: PlanKind) -> Role {
        match kind {
            PlanKind::PassSelect
            | PlanKind::PkEqual
            | PlanKind::PkIn
            | PlanKind::SelectSubquery
            | PlanKind::Set => Role::Reader,
            PlanKind::PassDml
            | PlanKind::DmlPk
            | PlanKind::DmlSubquery
            | PlanKind::InsertPk
            | PlanKind::InsertSubquery => Role::Writer,
            PlanKind::Ddl => Role::Admin,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_ordering() {
        assert!(Role::Reader < Role::Writer);
        assert!(Role::Writer < Role::Admin);
        assert!(Role::Admin >= Role::Admin);
        assert!(Role::Admin >= Role::Reader);
        assert!(!(Role::Reader >= Role::Writer));
    }

    #[test]
    fn by_name_is_case_insensitive() {
        assert_eq!(Role::by_name("READER").unwrap(), Role::Reader);
        assert_eq!(Role::by_name("reader").unwrap(), Role::Reader);
        assert_eq!(Role::by_name("Writer").unwrap(), Role::Writer);
        assert_eq!(Role::by_name("aDmIn").unwrap(), Role::Admin);
    }

    #[test]
    fn by_name_rejects_unknown() {
        let err = Role::by_name("SUPERUSER").unwrap_err();
        assert!(matches!(
            err,
            AccessError::UnknownRole { role } if role == "SUPERUSER"
        ));
        assert!(Role::by_name("").is_err());
    }

    #[test]
    fn name_roundtrips() {
        for role in [Role::Reader, Role::Writer, Role::Admin] {
            assert_eq!(Role::by_name(role.name()).unwrap(), role);
        }
    }

    #[test]
    fn required_role_per_plan_kind() {
        let read_kinds = [
            PlanKind::PassSelect,
            PlanKind::PkEqual,
            PlanKind::PkIn,
            PlanKind::SelectSubquery,
            PlanKind::Set,
        ];
        for kind in read_kinds {
            assert_eq!(Role::required_for(kind), Role::Reader, "{kind}");
        }

        let write_kinds = [
            PlanKind::PassDml,
            PlanKind::DmlPk,
            PlanKind::DmlSubquery,
            PlanKind::InsertPk,
            PlanKind::InsertSubquery,
        ];
        for kind in write_kinds {
            assert_eq!(Role::required_for(kind), Role::Writer, "{kind}");
        }

        assert_eq!(Role::required_for(PlanKind::Ddl), Role::Admin);
    }
}
