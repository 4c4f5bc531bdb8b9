//! Checker capability and composite registry
//!
//! Access policies are independent of one another: table ACLs, tenant
//! isolation, and rate policies each implement the same two-operation
//! [`AccessChecker`] capability and are composed through a
//! [`CheckerRegistry`]. A request is admitted only if every registered
//! checker grants it.

use crate::error::Result;
use sqlrelay_core::{ExecPlan, RequestContext};
use std::sync::Arc;

/// Capability for performing access checks on execution plans.
///
/// Implementations are shared across the proxy's worker threads, so they
/// must be `Send + Sync` and keep their own interior synchronization for
/// any reloadable state.
pub trait AccessChecker: Send + Sync {
    /// Parse and load an access configuration.
    ///
    /// Returns an error on invalid configuration; a failed load must leave
    /// the previously loaded policy serving.
    fn load(&self, config: &[u8]) -> Result<()>;

    /// Perform the access check for a given context on a plan.
    ///
    /// Returns `Ok(())` if access is allowed, else the error states the
    /// reason access is denied.
    fn allow(&self, ctx: &dyn RequestContext, plan: &ExecPlan) -> Result<()>;
}

/// Ordered collection of access checkers, consulted on every request.
///
/// The registry is built once during process initialization and then
/// shared (typically behind `Arc`) with the serving pipeline. Registration
/// takes `&mut self`, so once the registry is shared no further mutation
/// is possible and the steady-state [`allow`](CheckerRegistry::allow) path
/// needs no lock.
#[derive(Default)]
pub struct CheckerRegistry {
    checkers: Vec<Arc<dyn AccessChecker>>,
}

impl CheckerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an access checker.
    ///
    /// Checkers are consulted in registration order and are never removed
    /// or reordered.
    pub fn register(&mut self, checker: Arc<dyn AccessChecker>) {
        self.checkers.push(checker);
    }

    /// Perform the access check with every registered checker.
    ///
    /// Returns the first checker's denial unchanged (short-circuit AND:
    /// all checkers must grant for the request to proceed). Access is
    /// granted if no checkers are registered.
    pub fn allow(&self, ctx: &dyn RequestContext, plan: &ExecPlan) -> Result<()> {
        for checker in &self.checkers {
            checker.allow(ctx, plan)?;
        }
        Ok(())
    }

    /// Number of registered checkers
    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    /// Check if no checkers are registered
    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AccessError;
    use sqlrelay_core::{PlanKind, Session};

    /// Checker with a fixed verdict, for composition tests
    struct FixedVerdict {
        deny: bool,
    }

    impl AccessChecker for FixedVerdict {
        fn load(&self, _config: &[u8]) -> Result<()> {
            Ok(())
        }

        fn allow(&self, ctx: &dyn RequestContext, plan: &ExecPlan) -> Result<()> {
            if self.deny {
                return Err(AccessError::AccessDenied {
                    principal: ctx.principal().to_string(),
                    role: "ADMIN",
                    table: plan.table.clone(),
                });
            }
            Ok(())
        }
    }

    fn check(registry: &CheckerRegistry) -> Result<()> {
        let session = Session::new("user1");
        let plan = ExecPlan::new(PlanKind::PassSelect, "table1");
        registry.allow(&session, &plan)
    }

    #[test]
    fn empty_registry_allows() {
        let registry = CheckerRegistry::new();
        assert!(registry.is_empty());
        assert!(check(&registry).is_ok());
    }

    #[test]
    fn all_granting_checkers_allow() {
        let mut registry = CheckerRegistry::new();
        registry.register(Arc::new(FixedVerdict { deny: false }));
        registry.register(Arc::new(FixedVerdict { deny: false }));
        assert_eq!(registry.len(), 2);
        assert!(check(&registry).is_ok());
    }

    #[test]
    fn one_denying_checker_denies_overall() {
        // Denier first
        let mut registry = CheckerRegistry::new();
        registry.register(Arc::new(FixedVerdict { deny: true }));
        registry.register(Arc::new(FixedVerdict { deny: false }));
        assert!(check(&registry).is_err());

        // Denier last
        let mut registry = CheckerRegistry::new();
        registry.register(Arc::new(FixedVerdict { deny: false }));
        registry.register(Arc::new(FixedVerdict { deny: true }));
        let err = check(&registry).unwrap_err();
        assert!(matches!(err, AccessError::AccessDenied { .. }));
    }
}
