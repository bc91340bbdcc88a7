//! Free-form value maps (`--set`, `--set-values`, chart value overrides).
//!
//! Keys are matched case-insensitively. Nested mappings read from files are
//! flattened into dotted keys so `profile: {vendorType: redhat}` and
//! `--set profile.vendortype=redhat` address the same entry.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

pub type Values = BTreeMap<String, Value>;

/// Render a value the way it is passed to collaborators: strings unquoted,
/// everything else in its JSON form.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Case-insensitive lookup.
pub fn lookup<'a>(values: &'a Values, key: &str) -> Option<&'a Value> {
    values
        .get(key)
        .or_else(|| values.iter().find(|(k, _)| k.eq_ignore_ascii_case(key)).map(|(_, v)| v))
}

pub fn lookup_string(values: &Values, key: &str) -> Option<String> {
    lookup(values, key).map(value_to_string)
}

/// Merge `incoming` into `target`, lower-casing incoming keys. Later entries win.
pub fn merge_lowercase(target: &mut Values, incoming: Values) {
    for (key, value) in incoming {
        target.insert(key.to_lowercase(), value);
    }
}

/// Parse `key=value` arguments. The value may itself contain `=`.
pub fn parse_set_args<S: AsRef<str>>(args: &[S]) -> Result<Values> {
    let mut values = Values::new();
    for arg in args {
        let arg = arg.as_ref();
        let (key, value) = arg
            .split_once('=')
            .filter(|(key, _)| !key.trim().is_empty())
            .ok_or_else(|| Error::Parse(format!("value '{arg}': expected key=value")))?;
        values.insert(key.trim().to_string(), Value::String(value.to_string()));
    }
    Ok(values)
}

/// Flatten nested objects into dotted, lower-cased keys.
pub fn flatten(value: Value) -> Values {
    let mut out = Values::new();
    flatten_into(&mut out, String::new(), value);
    out
}

fn flatten_into(out: &mut Values, prefix: String, value: Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let key = key.to_lowercase();
                let path = if prefix.is_empty() {
                    key
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(out, path, child);
            }
        }
        other if !prefix.is_empty() => {
            out.insert(prefix, other);
        }
        _ => {}
    }
}

/// Load a YAML or TOML (by `.toml` extension) values file.
pub fn load_values_file(path: &Path) -> Result<Values> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Parse(format!("values file {}: {e}", path.display())))?;
    if content.trim().is_empty() {
        return Ok(Values::new());
    }

    let is_toml = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false);

    let document: Value = if is_toml {
        let table: toml::Table = toml::from_str(&content)
            .map_err(|e| Error::Parse(format!("values file {}: {e}", path.display())))?;
        serde_json::to_value(table)
            .map_err(|e| Error::Parse(format!("values file {}: {e}", path.display())))?
    } else {
        serde_yaml::from_str(&content)
            .map_err(|e| Error::Parse(format!("values file {}: {e}", path.display())))?
    };

    match document {
        Value::Null => Ok(Values::new()),
        Value::Object(_) => Ok(flatten(document)),
        _ => Err(Error::Parse(format!(
            "values file {}: top level must be a mapping",
            path.display()
        ))),
    }
}
