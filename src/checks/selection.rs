use super::catalog;
use super::registry::CheckRegistry;
use crate::error::{Error, KeyKind, Result};

/// User-facing check selection: an allow-list, a deny-list, or everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CheckSelection {
    #[default]
    All,
    Only(Vec<String>),
    Except(Vec<String>),
}

impl CheckSelection {
    /// Build a selection from `--enable` / `--disable` style lists.
    ///
    /// Supplying both lists is a conflict. Every name must be in the catalog.
    pub fn from_lists<S: AsRef<str>>(enabled: &[S], disabled: &[S]) -> Result<Self> {
        match (enabled.is_empty(), disabled.is_empty()) {
            (false, false) => Err(Error::ConflictingSelection),
            (false, true) => Ok(CheckSelection::Only(convert_checks(enabled)?)),
            (true, false) => Ok(CheckSelection::Except(convert_checks(disabled)?)),
            (true, true) => Ok(CheckSelection::All),
        }
    }

    pub fn apply(&self, registry: &mut CheckRegistry) {
        match self {
            CheckSelection::All => {}
            CheckSelection::Only(names) => {
                registry.enable_checks(names);
            }
            CheckSelection::Except(names) => {
                registry.unenable_checks(names);
            }
        }
    }
}

fn convert_checks<S: AsRef<str>>(names: &[S]) -> Result<Vec<String>> {
    names
        .iter()
        .map(|name| {
            catalog::lookup(name.as_ref())
                .map(|id| id.name)
                .ok_or_else(|| Error::invalid_key(KeyKind::Check, name.as_ref()))
        })
        .collect()
}
