use crate::dependency_analysis::domain::{CatalogSnapshot, DependencyEdge, PackageSpec};
use crate::ports::outbound::CatalogReader;
use crate::shared::error::WhyError;
use crate::shared::security::read_checked_file;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const LOCKFILE_NAME: &str = "uv.lock";

/// Version shown for lockfile entries that do not pin one (dynamic versions)
const UNKNOWN_VERSION: &str = "unknown";

#[derive(Debug, Deserialize)]
struct UvLock {
    #[serde(default)]
    package: Vec<UvPackage>,
}

#[derive(Debug, Deserialize)]
struct UvPackage {
    name: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    dependencies: Vec<UvDependency>,
    /// Groups are visited in name order
    #[serde(default, rename = "dev-dependencies")]
    dev_dependencies: BTreeMap<String, Vec<UvDependency>>,
    #[serde(default)]
    metadata: Option<UvMetadata>,
}

#[derive(Debug, Deserialize)]
struct UvDependency {
    name: String,
    /// Present when the lock resolves several versions of `name`
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    marker: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct UvMetadata {
    #[serde(default, rename = "requires-dist")]
    requires_dist: Vec<UvRequirement>,
    #[serde(default, rename = "requires-dev")]
    requires_dev: BTreeMap<String, Vec<UvRequirement>>,
}

#[derive(Debug, Deserialize)]
struct UvRequirement {
    name: String,
    #[serde(default)]
    specifier: Option<String>,
}

/// LockfileCatalogReader adapter reading `uv.lock`
///
/// Every `[[package]]` table becomes one PackageSpec. Runtime edges come
/// first, then each dev-dependency group.
pub struct LockfileCatalogReader;

impl LockfileCatalogReader {
    pub fn new() -> Self {
        Self
    }

    /// Parses lockfile content into package specs, in file order
    pub fn parse_specs(content: &str) -> Result<Vec<PackageSpec>> {
        let lockfile: UvLock = toml::from_str(content)?;

        lockfile
            .package
            .into_iter()
            .map(|package| {
                let metadata = package.metadata.unwrap_or_default();

                let runtime = package
                    .dependencies
                    .iter()
                    .map(|dep| Self::edge(dep, &metadata.requires_dist));
                let dev = package.dev_dependencies.iter().flat_map(|(group, deps)| {
                    let declared = metadata
                        .requires_dev
                        .get(group)
                        .map(Vec::as_slice)
                        .unwrap_or_default();
                    deps.iter().map(move |dep| Self::edge(dep, declared))
                });
                let edges = runtime.chain(dev).collect();

                PackageSpec::new(
                    package.name,
                    package
                        .version
                        .unwrap_or_else(|| UNKNOWN_VERSION.to_string()),
                    edges,
                )
            })
            .collect()
    }

    /// Builds an edge, taking the requirement from the declared specifiers
    fn edge(dep: &UvDependency, declared: &[UvRequirement]) -> DependencyEdge {
        let specifier = declared
            .iter()
            .find(|req| req.name == dep.name)
            .and_then(|req| req.specifier.as_deref())
            .filter(|spec| !spec.is_empty())
            .unwrap_or("*");

        let requirement = match dep.marker.as_deref() {
            Some(marker) => format!("{}; {}", specifier, marker),
            None => specifier.to_string(),
        };
        let edge = DependencyEdge::new(dep.name.as_str(), requirement);
        match dep.version.as_deref() {
            Some(version) => edge.with_pinned_version(version),
            None => edge,
        }
    }
}

impl Default for LockfileCatalogReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogReader for LockfileCatalogReader {
    fn read_catalog(&self, project_path: &Path) -> Result<CatalogSnapshot> {
        let lockfile_path = project_path.join(LOCKFILE_NAME);

        if !lockfile_path.exists() {
            return Err(WhyError::CatalogNotFound {
                path: lockfile_path,
                suggestion: format!(
                    "uv.lock file does not exist in project directory \"{}\".\n   \
                     Run `uv lock` first, point --path at a uv project, or use --site-packages to read installed packages.",
                    project_path.display()
                ),
            }
            .into());
        }

        let content = read_checked_file(&lockfile_path, LOCKFILE_NAME).map_err(|e| {
            WhyError::FileReadError {
                path: lockfile_path.clone(),
                details: e.to_string(),
            }
        })?;

        let specs = Self::parse_specs(&content).map_err(|e| WhyError::CatalogParseError {
            path: lockfile_path.clone(),
            details: e.to_string(),
        })?;

        tracing::debug!(path = %lockfile_path.display(), packages = specs.len(), "parsed lockfile");
        Ok(CatalogSnapshot::from_specs(specs))
    }

    fn source_name(&self) -> &'static str {
        LOCKFILE_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_analysis::services::DependencyAnalyzer;
    use crate::ports::outbound::PackageCatalog;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE_LOCK: &str = r#"
version = 1
requires-python = ">=3.11"

[[package]]
name = "myproject"
version = "0.1.0"
source = { virtual = "." }
dependencies = [
    { name = "requests" },
    { name = "colorama", marker = "sys_platform == 'win32'" },
]

[package.dev-dependencies]
dev = [
    { name = "pytest" },
]

[package.metadata]
requires-dist = [
    { name = "colorama", specifier = ">=0.4" },
    { name = "requests", specifier = ">=2.31" },
]

[package.metadata.requires-dev]
dev = [{ name = "pytest", specifier = ">=8.0" }]

[[package]]
name = "requests"
version = "2.32.3"
source = { registry = "https://pypi.org/simple" }
dependencies = [
    { name = "idna" },
    { name = "urllib3" },
]

[[package]]
name = "idna"
version = "3.10"
source = { registry = "https://pypi.org/simple" }

[[package]]
name = "urllib3"
version = "2.2.3"
source = { registry = "https://pypi.org/simple" }

[[package]]
name = "colorama"
version = "0.4.6"
source = { registry = "https://pypi.org/simple" }

[[package]]
name = "pytest"
version = "8.3.3"
source = { registry = "https://pypi.org/simple" }
dependencies = [
    { name = "colorama", marker = "sys_platform == 'win32'" },
]
"#;

    #[test]
    fn test_parse_specs_keeps_file_order() {
        let specs = LockfileCatalogReader::parse_specs(SAMPLE_LOCK).unwrap();
        let names: Vec<&str> = specs.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec!["myproject", "requests", "idna", "urllib3", "colorama", "pytest"]
        );
        assert_eq!(specs[1].version(), "2.32.3");
    }

    #[test]
    fn test_parse_specs_requirements_from_metadata() {
        let specs = LockfileCatalogReader::parse_specs(SAMPLE_LOCK).unwrap();
        let edges: Vec<(&str, &str)> = specs[0]
            .dependencies()
            .iter()
            .map(|e| (e.name(), e.requirement()))
            .collect();

        assert_eq!(
            edges,
            vec![
                ("requests", ">=2.31"),
                ("colorama", ">=0.4; sys_platform == 'win32'"),
                ("pytest", ">=8.0"),
            ]
        );
    }

    #[test]
    fn test_parse_specs_without_metadata_uses_wildcard() {
        let specs = LockfileCatalogReader::parse_specs(SAMPLE_LOCK).unwrap();

        let requests = &specs[1];
        assert_eq!(requests.dependencies()[0].requirement(), "*");

        let pytest = &specs[5];
        assert_eq!(
            pytest.dependencies()[0].requirement(),
            "*; sys_platform == 'win32'"
        );
    }

    #[test]
    fn test_forked_lock_resolves_pinned_versions() {
        let content = r#"
[[package]]
name = "app"
version = "1.0.0"
dependencies = [
    { name = "numpy", version = "2.0.0", marker = "python_full_version >= '3.12'" },
]

[[package]]
name = "numpy"
version = "1.26.4"

[[package]]
name = "numpy"
version = "2.0.0"
dependencies = [{ name = "target" }]

[[package]]
name = "target"
version = "0.1.0"
"#;
        let specs = LockfileCatalogReader::parse_specs(content).unwrap();
        let edge = &specs[0].dependencies()[0];
        assert_eq!(edge.pinned_version(), Some("2.0.0"));
        assert_eq!(edge.requirement(), "*; python_full_version >= '3.12'");
        assert_eq!(specs[2].dependencies()[0].pinned_version(), None);

        let catalog = CatalogSnapshot::from_specs(specs);
        let chains = DependencyAnalyzer::find_dependency_chains(&catalog, "target");
        let app_chain = chains
            .iter()
            .find(|c| c.root().unwrap().name() == "app")
            .unwrap();
        assert_eq!(app_chain.nodes()[1].version(), "2.0.0");
    }

    #[test]
    fn test_parse_specs_missing_version() {
        let content = r#"
[[package]]
name = "dynamic-project"
source = { editable = "." }
"#;
        let specs = LockfileCatalogReader::parse_specs(content).unwrap();
        assert_eq!(specs[0].version(), "unknown");
    }

    #[test]
    fn test_parse_specs_invalid_toml() {
        assert!(LockfileCatalogReader::parse_specs("invalid toml [[[").is_err());
    }

    #[test]
    fn test_read_catalog_success() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("uv.lock"), SAMPLE_LOCK).unwrap();

        let reader = LockfileCatalogReader::new();
        let catalog = reader.read_catalog(temp_dir.path()).unwrap();

        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.lookup("urllib3").unwrap().version(), "2.2.3");
        assert_eq!(reader.source_name(), "uv.lock");
    }

    #[test]
    fn test_read_catalog_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let result = LockfileCatalogReader::new().read_catalog(temp_dir.path());

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Package catalog not found"));
        assert!(err_string.contains("uv.lock file does not exist"));
    }

    #[test]
    fn test_read_catalog_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("uv.lock"), "[[package]]\nversion = 3\n").unwrap();

        let result = LockfileCatalogReader::new().read_catalog(temp_dir.path());

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to parse package catalog"));
    }

    #[test]
    fn test_read_catalog_lockfile_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("uv.lock")).unwrap();

        let result = LockfileCatalogReader::new().read_catalog(temp_dir.path());

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("not a regular file"));
    }
}
