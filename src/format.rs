//! The two structured text encodings reports and summaries are emitted in.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    Json,
    #[default]
    Yaml,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }

    /// File extension used when writing output to disk.
    pub fn extension(self) -> &'static str {
        self.as_str()
    }

    /// Encode `value` in this format.
    ///
    /// `what` names the value in the error message.
    pub fn encode<T: Serialize>(self, value: &T, what: &str) -> Result<String> {
        match self {
            Format::Json => serde_json::to_string_pretty(value)
                .map_err(|e| Error::Serialization(format!("{what} as json: {e}"))),
            Format::Yaml => serde_yaml::to_string(value)
                .map_err(|e| Error::Serialization(format!("{what} as yaml: {e}"))),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}
