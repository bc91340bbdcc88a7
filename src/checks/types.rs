use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, KeyKind, Result};

/// A versioned check identifier, rendered as `<version>/<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CheckId {
    pub name: String,
    pub version: String,
}

impl CheckId {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.version, self.name)
    }
}

impl FromStr for CheckId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('/') {
            Some((version, name)) if !version.is_empty() && !name.is_empty() => {
                Ok(CheckId::new(name, version))
            }
            _ => Err(Error::invalid_key(KeyKind::Check, s)),
        }
    }
}

/// How a profile classifies a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CheckType {
    Mandatory,
    #[default]
    Optional,
}

impl fmt::Display for CheckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckType::Mandatory => write!(f, "Mandatory"),
            CheckType::Optional => write!(f, "Optional"),
        }
    }
}

/// Enable flag for a single catalog check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckStatus {
    pub enabled: bool,
}

impl Default for CheckStatus {
    fn default() -> Self {
        Self { enabled: true }
    }
}
