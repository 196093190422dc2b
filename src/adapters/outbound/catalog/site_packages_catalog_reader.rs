use crate::dependency_analysis::domain::{CatalogSnapshot, DependencyEdge, PackageSpec};
use crate::ports::outbound::CatalogReader;
use crate::shared::error::WhyError;
use crate::shared::security::read_checked_file;
use crate::shared::Result;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

const DIST_INFO_SUFFIX: &str = ".dist-info";

/// SitePackagesCatalogReader adapter reading installed distributions
///
/// Scans one directory level for `*.dist-info` folders and reads the core
/// metadata headers from each `METADATA` file. Names are normalized the way
/// package indexes do (lowercase, runs of `-_.` collapsed to `-`) so that they
/// line up with the names used in `Requires-Dist`.
pub struct SitePackagesCatalogReader;

impl SitePackagesCatalogReader {
    pub fn new() -> Self {
        Self
    }

    /// Parses the header block of a METADATA file
    ///
    /// Returns `None` when `Name` or `Version` is missing.
    pub fn parse_metadata(content: &str) -> Option<(String, String, Vec<DependencyEdge>)> {
        let mut name = None;
        let mut version = None;
        let mut edges = Vec::new();

        for line in content.lines() {
            if line.trim().is_empty() {
                break;
            }
            // folded continuation of the previous header
            if line.starts_with([' ', '\t']) {
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "Name" if name.is_none() => name = Some(normalize_name(value)),
                "Version" if version.is_none() => version = Some(value.to_string()),
                "Requires-Dist" => {
                    if let Some(edge) = parse_requires_dist(value) {
                        edges.push(edge);
                    }
                }
                _ => {}
            }
        }

        Some((name?, version?, edges))
    }

    fn dist_info_dirs(dir: &Path) -> Result<Vec<PathBuf>> {
        let mut dirs = Vec::new();
        for entry in fs::read_dir(dir)
            .with_context(|| format!("Failed to list directory {}", dir.display()))?
        {
            let path = entry?.path();
            let is_dist_info = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(DIST_INFO_SUFFIX));
            if is_dist_info && path.is_dir() {
                dirs.push(path);
            }
        }
        // read_dir order is platform dependent
        dirs.sort();
        Ok(dirs)
    }

    fn read_distribution(dist_info: &Path) -> Result<PackageSpec> {
        let metadata_path = dist_info.join("METADATA");
        let content = read_checked_file(&metadata_path, "METADATA")?;
        let (name, version, edges) = Self::parse_metadata(&content)
            .with_context(|| format!("{} lacks a Name or Version header", metadata_path.display()))?;
        PackageSpec::new(name, version, edges)
    }
}

impl Default for SitePackagesCatalogReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogReader for SitePackagesCatalogReader {
    fn read_catalog(&self, site_packages: &Path) -> Result<CatalogSnapshot> {
        if !site_packages.is_dir() {
            return Err(WhyError::CatalogNotFound {
                path: site_packages.to_path_buf(),
                suggestion: "The site-packages directory does not exist.\n   \
                     Pass the directory that holds the *.dist-info folders, e.g. .venv/lib/python3.12/site-packages"
                    .to_string(),
            }
            .into());
        }

        let mut specs = Vec::new();
        for dist_info in Self::dist_info_dirs(site_packages)? {
            match Self::read_distribution(&dist_info) {
                Ok(spec) => specs.push(spec),
                Err(e) => {
                    tracing::warn!(path = %dist_info.display(), error = %e, "skipping distribution");
                }
            }
        }

        tracing::debug!(path = %site_packages.display(), packages = specs.len(), "scanned site-packages");
        Ok(CatalogSnapshot::from_specs(specs))
    }

    fn source_name(&self) -> &'static str {
        "site-packages"
    }
}

/// Lowercases and collapses runs of `-`, `_` and `.` into a single `-`
fn normalize_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut in_separator = false;
    for c in name.trim().chars() {
        if matches!(c, '-' | '_' | '.') {
            in_separator = true;
            continue;
        }
        if in_separator && !normalized.is_empty() {
            normalized.push('-');
        }
        in_separator = false;
        normalized.extend(c.to_lowercase());
    }
    normalized
}

/// Splits `name[extras] (specifier) ; marker` into an edge
///
/// Extras are dropped, parentheses around the specifier are removed and the
/// marker stays on the requirement text. Requirements that only apply to an
/// optional extra yield `None`.
fn parse_requires_dist(value: &str) -> Option<DependencyEdge> {
    let value = value.trim();
    let name_end = value
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        .unwrap_or(value.len());
    let name = &value[..name_end];
    if name.is_empty() {
        return None;
    }

    let mut rest = value[name_end..].trim_start();
    if rest.starts_with('[') {
        rest = rest.find(']').map_or("", |close| &rest[close + 1..]);
    }

    let (specifier, marker) = match rest.split_once(';') {
        Some((specifier, marker)) => (specifier, Some(marker.trim())),
        None => (rest, None),
    };
    if marker.is_some_and(marker_requires_extra) {
        return None;
    }
    let specifier = specifier.trim();
    let specifier = specifier
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(specifier)
        .trim();
    let specifier = if specifier.is_empty() { "*" } else { specifier };

    let requirement = match marker.filter(|m| !m.is_empty()) {
        Some(marker) => format!("{}; {}", specifier, marker),
        None => specifier.to_string(),
    };
    Some(DependencyEdge::new(normalize_name(name), requirement))
}

/// True when the environment marker tests the `extra` variable
fn marker_requires_extra(marker: &str) -> bool {
    marker
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .any(|token| token == "extra")
}
