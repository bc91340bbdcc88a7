use std::collections::BTreeMap;
use std::time::Duration;

use super::keys::{BooleanKey, DurationKey, StringKey, ValuesKey};
use super::values::{merge_lowercase, Values};
use crate::checks::{CheckRegistry, CheckSelection};
use crate::error::{Error, KeyKind, Result};

/// Run parameters accumulated from flags, files and API callers.
///
/// Insertion never fails: keys are kept by name so that entries coming from
/// untyped sources survive until `validate` rejects them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigStore {
    boolean_flags: BTreeMap<String, bool>,
    duration_flags: BTreeMap<String, Duration>,
    string_flags: BTreeMap<String, Vec<String>>,
    values_flags: BTreeMap<String, Values>,
    checks: CheckRegistry,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites any previous setting.
    pub fn set_boolean(&mut self, key: impl AsRef<str>, value: bool) -> &mut Self {
        self.boolean_flags.insert(key.as_ref().to_string(), value);
        self
    }

    /// Overwrites any previous setting.
    pub fn set_duration(&mut self, key: impl AsRef<str>, value: Duration) -> &mut Self {
        self.duration_flags.insert(key.as_ref().to_string(), value);
        self
    }

    /// Overwrites any previous setting.
    pub fn set_string(&mut self, key: impl AsRef<str>, value: Vec<String>) -> &mut Self {
        self.string_flags.insert(key.as_ref().to_string(), value);
        self
    }

    /// Merges into any previous values for the group; entry keys are lower-cased.
    pub fn set_values(&mut self, key: impl AsRef<str>, values: Values) -> &mut Self {
        let group = self
            .values_flags
            .entry(key.as_ref().to_string())
            .or_default();
        merge_lowercase(group, values);
        self
    }

    pub fn enable_checks<S: AsRef<str>>(&mut self, names: &[S]) -> &mut Self {
        self.checks.enable_checks(names);
        self
    }

    pub fn unenable_checks<S: AsRef<str>>(&mut self, names: &[S]) -> &mut Self {
        self.checks.unenable_checks(names);
        self
    }

    pub fn select_checks(&mut self, selection: &CheckSelection) -> &mut Self {
        selection.apply(&mut self.checks);
        self
    }

    pub fn boolean(&self, key: BooleanKey) -> Option<bool> {
        self.boolean_flags.get(key.as_str()).copied()
    }

    pub fn duration(&self, key: DurationKey) -> Option<Duration> {
        self.duration_flags.get(key.as_str()).copied()
    }

    pub fn strings(&self, key: StringKey) -> Option<&[String]> {
        self.string_flags.get(key.as_str()).map(Vec::as_slice)
    }

    pub fn values(&self, key: ValuesKey) -> Option<&Values> {
        self.values_flags.get(key.as_str())
    }

    pub fn checks(&self) -> &CheckRegistry {
        &self.checks
    }

    /// Check every key against its family's whitelist.
    ///
    /// Families are visited in the order boolean, checks, duration, values,
    /// string, and the first violation found is returned.
    pub fn validate(&self) -> Result<()> {
        first_invalid::<BooleanKey, _>(&self.boolean_flags, KeyKind::Boolean)?;
        self.checks.validate()?;
        first_invalid::<DurationKey, _>(&self.duration_flags, KeyKind::Duration)?;
        first_invalid::<ValuesKey, _>(&self.values_flags, KeyKind::Values)?;
        first_invalid::<StringKey, _>(&self.string_flags, KeyKind::String)?;
        Ok(())
    }
}

fn first_invalid<K, V>(map: &BTreeMap<String, V>, kind: KeyKind) -> Result<()>
where
    K: std::str::FromStr,
{
    match map.keys().find(|key| key.parse::<K>().is_err()) {
        Some(key) => Err(Error::invalid_key(kind, key.clone())),
        None => Ok(()),
    }
}
