//! Table-pattern access checker
//!
//! The policy store maps table-name patterns (regular expressions) to the
//! role each principal holds for tables matching the pattern. It is built
//! from a two-level JSON document and queried on every request:
//!
//! ```json
//! {
//!     "table[0-9]+": { "READER": "*", "WRITER": "user2,user4" },
//!     "secrets":     { "ADMIN": "user5" }
//! }
//! ```
//!
//! ## Pattern precedence
//!
//! Rules are kept in configuration document order and the first pattern
//! matching the table name wins. A pattern's position is fixed the first
//! time it is seen, so precedence is stable across merged reloads.
//!
//! ## Reload semantics
//!
//! `load` merges into existing state rather than replacing it: grants from
//! earlier loads survive unless a later load overwrites the same
//! pattern/principal pair. The incoming document is fully validated before
//! the live state is touched, so a rejected document leaves the
//! last-known-good policy serving.
//!
//! ## Unmatched tables
//!
//! A table matching no configured pattern is allowed by default, for every
//! plan kind. Deployments wanting deny-by-default must configure a
//! catch-all pattern as their last rule.

use crate::checker::AccessChecker;
use crate::error::{AccessError, Result};
use crate::role::Role;
use regex::Regex;
use serde_json::{Map, Value};
use sqlrelay_core::{ExecPlan, RequestContext};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Principal token granting a role to any caller
pub const WILDCARD_PRINCIPAL: &str = "*";

/// Separator between principals in a configured grant list
const PRINCIPAL_SEPARATOR: char = ',';

/// One configured pattern and the grants attached to it
#[derive(Debug)]
struct PatternRules {
    /// The pattern string as written in the configuration
    pattern: String,
    /// Compiled form, matched unanchored against table names
    regex: Regex,
    /// principal -> granted role; keys are case-sensitive
    grants: HashMap<String, Role>,
}

/// Owned policy state behind the checker's lock.
///
/// Rules stay in first-seen configuration order; `allow` scans them in
/// order and stops at the first pattern match.
#[derive(Debug, Default)]
struct AclState {
    rules: Vec<PatternRules>,
}

impl AclState {
    /// Merge staged rules into the live state.
    ///
    /// A pattern already present keeps its position and has the incoming
    /// grants merged over its own, entry by entry; unseen patterns are
    /// appended.
    fn merge(&mut self, staged: Vec<PatternRules>) {
        for incoming in staged {
            match self.rules.iter().position(|r| r.pattern == incoming.pattern) {
                Some(idx) => self.rules[idx].grants.extend(incoming.grants),
                None => self.rules.push(incoming),
            }
        }
    }
}

/// Per-table access checker backed by pattern-matched role grants.
///
/// Authorization checks take shared access and scale across worker
/// threads; configuration reloads take exclusive access and are fully
/// serialized against both checks and other reloads.
#[derive(Debug, Default)]
pub struct TableAclChecker {
    state: RwLock<AclState>,
}

impl TableAclChecker {
    /// Create a checker with no configured patterns (allows everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a checker and load an initial configuration
    pub fn with_config(config: &[u8]) -> Result<Self> {
        let checker = Self::new();
        checker.load(config)?;
        Ok(checker)
    }

    /// Number of configured table patterns
    pub fn pattern_count(&self) -> usize {
        self.state.read().map(|s| s.rules.len()).unwrap_or(0)
    }

    /// Parse and validate a configuration document into staged rules.
    ///
    /// Runs entirely outside the lock; nothing is applied unless the whole
    /// document is valid.
    fn stage(config: &[u8]) -> Result<Vec<PatternRules>> {
        let doc: Map<String, Value> = serde_json::from_slice(config)?;
        let mut staged = Vec::with_capacity(doc.len());
        for (pattern, grant_doc) in doc {
            let regex = Regex::new(&pattern).map_err(|source| AccessError::PatternCompile {
                pattern: pattern.clone(),
                source,
            })?;
            let grant_doc: Map<String, Value> = serde_json::from_value(grant_doc)?;
            let mut grants = HashMap::new();
            for (role_name, principals) in grant_doc {
                let role = Role::by_name(&role_name)?;
                let principals: String = serde_json::from_value(principals)?;
                for principal in principals.split(PRINCIPAL_SEPARATOR) {
                    grants.insert(principal.to_string(), role);
                }
            }
            staged.push(PatternRules {
                pattern,
                regex,
                grants,
            });
        }
        Ok(staged)
    }
}

impl AccessChecker for TableAclChecker {
    fn load(&self, config: &[u8]) -> Result<()> {
        let staged = match Self::stage(config) {
            Ok(staged) => staged,
            Err(err) => {
                tracing::warn!(%err, "rejected table ACL configuration");
                return Err(err);
            }
        };

        let mut state = self
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        state.merge(staged);
        tracing::debug!(patterns = state.rules.len(), "table ACL configuration applied");
        Ok(())
    }

    fn allow(&self, ctx: &dyn RequestContext, plan: &ExecPlan) -> Result<()> {
        let required = Role::required_for(plan.kind);
        let state = self
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        for rule in &state.rules {
            if rule.regex.is_match(&plan.table) {
                // Check default access
                if let Some(&granted) = rule.grants.get(WILDCARD_PRINCIPAL) {
                    if granted >= required {
                        return Ok(());
                    }
                }
                // Check principal-specific access
                if let Some(&granted) = rule.grants.get(ctx.principal()) {
                    if granted >= required {
                        return Ok(());
                    }
                }
                return Err(AccessError::AccessDenied {
                    principal: ctx.principal().to_string(),
                    role: required.name(),
                    table: plan.table.clone(),
                });
            }
        }

        // No matching pattern for the table, allow all access
        Ok(())
    }
}
