//! Helpers shared by the command implementations.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::values::{load_values_file, merge_lowercase, parse_set_args};
use crate::config::Values;

/// Merge values files (in order) and then `key=value` arguments.
///
/// Later sources win; keys are lower-cased.
pub fn collect_values(set: &[String], files: &[PathBuf]) -> Result<Values> {
    let mut values = Values::new();
    for file in files {
        let loaded = load_values_file(file)
            .with_context(|| format!("Failed to load values file {}", file.display()))?;
        merge_lowercase(&mut values, loaded);
    }
    merge_lowercase(&mut values, parse_set_args(set)?);
    Ok(values)
}

/// Write `content` to `path`, creating parent directories, or to stdout.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .context("Failed to write to stdout")?;
            if !content.ends_with('\n') {
                writeln!(stdout).context("Failed to write to stdout")?;
            }
        }
    }
    Ok(())
}
