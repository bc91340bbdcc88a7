//! Local chart bundles: an unpacked chart directory or a packaged archive.

use anyhow::{bail, Context, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use crate::report::ChartMetadata;

pub const CHART_FILE: &str = "Chart.yaml";

#[derive(Debug, Clone)]
enum Contents {
    /// Unpacked chart rooted at this directory.
    Directory(PathBuf),
    /// Packaged archive; contents are not inspected.
    Archive(PathBuf),
}

/// A chart opened from the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalBundle {
    contents: Contents,
    chart: Option<ChartMetadata>,
    chart_digest: String,
    package_digest: String,
}

impl LocalBundle {
    pub fn open(uri: &str) -> Result<Self> {
        let path = Path::new(uri);
        if path.is_dir() {
            let chart_file = path.join(CHART_FILE);
            let content = fs::read_to_string(&chart_file)
                .with_context(|| format!("Failed to read {}", chart_file.display()))?;
            let chart: ChartMetadata = serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", chart_file.display()))?;
            let chart_digest = digest_directory(path)?;
            Ok(Self {
                contents: Contents::Directory(path.to_path_buf()),
                chart: Some(chart),
                chart_digest,
                package_digest: String::new(),
            })
        } else if path.is_file() {
            let bytes =
                fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
            Ok(Self {
                contents: Contents::Archive(path.to_path_buf()),
                chart: None,
                chart_digest: String::new(),
                package_digest: format_digest(&bytes),
            })
        } else {
            bail!("chart not found: {uri}")
        }
    }

    pub fn chart(&self) -> Option<&ChartMetadata> {
        self.chart.as_ref()
    }

    /// `sha256:<hex>` over the chart's files, empty for archives.
    pub fn chart_digest(&self) -> &str {
        &self.chart_digest
    }

    /// `sha256:<hex>` of the archive bytes, empty for directories.
    pub fn package_digest(&self) -> &str {
        &self.package_digest
    }

    /// Root directory of an unpacked chart.
    pub fn root(&self) -> Option<&Path> {
        match &self.contents {
            Contents::Directory(root) => Some(root),
            Contents::Archive(_) => None,
        }
    }

    pub fn is_archive(&self) -> bool {
        matches!(self.contents, Contents::Archive(_))
    }

    /// Whether `relative` exists inside an unpacked chart.
    pub fn contains(&self, relative: &str) -> bool {
        self.root().is_some_and(|root| root.join(relative).exists())
    }

    /// Files under `relative` (recursively), as paths relative to the chart root.
    pub fn files_under(&self, relative: &str) -> Result<Vec<String>> {
        let Some(root) = self.root() else {
            return Ok(Vec::new());
        };
        let dir = root.join(relative);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut files = Vec::new();
        collect_files(root, &dir, &mut files)?;
        Ok(files.into_iter().map(|(name, _)| name).collect())
    }
}

fn format_digest(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("sha256:{}", hex::encode(hasher.finalize()))
}

/// Hash every file path and its content, in sorted path order.
fn digest_directory(root: &Path) -> Result<String> {
    let mut files = Vec::new();
    collect_files(root, root, &mut files)?;
    files.sort();

    let mut hasher = Sha256::new();
    for (name, path) in files {
        let content =
            fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
        hasher.update(name.as_bytes());
        hasher.update([0u8]);
        hasher.update(&content);
    }
    Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
}

fn collect_files(root: &Path, dir: &Path, out: &mut Vec<(String, PathBuf)>) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(root, &path, out)?;
        } else {
            let relative = path
                .strip_prefix(root)
                .unwrap_or(&path)
                .to_string_lossy()
                .replace('\\', "/");
            out.push((relative, path));
        }
    }
    Ok(())
}
