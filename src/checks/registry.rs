use std::collections::BTreeMap;

use super::catalog::{self, CHECK_NAMES};
use super::types::{CheckId, CheckStatus};
use crate::error::{Error, KeyKind, Result};

/// Per-check enable status, one entry per catalog check after construction.
///
/// Names outside the catalog may be inserted through `enable_checks` or
/// `unenable_checks`; they are reported by `validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRegistry {
    statuses: BTreeMap<String, CheckStatus>,
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckRegistry {
    /// Every catalog check, all enabled.
    pub fn new() -> Self {
        let mut registry = Self {
            statuses: BTreeMap::new(),
        };
        registry.set_all(true);
        registry
    }

    fn set_all(&mut self, enabled: bool) {
        for name in CHECK_NAMES {
            self.statuses
                .insert(name.to_string(), CheckStatus { enabled });
        }
    }

    /// Enable exactly the named checks and disable every other catalog check.
    ///
    /// An empty list enables everything.
    pub fn enable_checks<S: AsRef<str>>(&mut self, names: &[S]) -> &mut Self {
        if names.is_empty() {
            self.set_all(true);
            return self;
        }
        self.set_all(false);
        for name in names {
            self.statuses
                .insert(name.as_ref().to_string(), CheckStatus { enabled: true });
        }
        self
    }

    /// Disable exactly the named checks and enable every other catalog check.
    ///
    /// An empty list leaves the statuses untouched.
    pub fn unenable_checks<S: AsRef<str>>(&mut self, names: &[S]) -> &mut Self {
        if names.is_empty() {
            return self;
        }
        self.set_all(true);
        for name in names {
            self.statuses
                .insert(name.as_ref().to_string(), CheckStatus { enabled: false });
        }
        self
    }

    pub fn status(&self, name: &str) -> Option<CheckStatus> {
        self.statuses.get(name).copied()
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.status(name).is_some_and(|s| s.enabled)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, CheckStatus)> {
        self.statuses.iter().map(|(name, status)| (name.as_str(), *status))
    }

    /// Enabled checks in catalog order.
    pub fn enabled_checks(&self) -> Vec<CheckId> {
        catalog::catalog()
            .into_iter()
            .filter(|id| self.is_enabled(&id.name))
            .collect()
    }

    /// Reject the first status entry whose name is not in the catalog.
    pub fn validate(&self) -> Result<()> {
        match self.statuses.keys().find(|name| !catalog::is_known(name)) {
            Some(name) => Err(Error::invalid_key(KeyKind::Check, name.clone())),
            None => Ok(()),
        }
    }
}
