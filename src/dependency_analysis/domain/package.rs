use crate::shared::Result;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// Maximum length for package versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// Compares two package names case-insensitively without allocating.
///
/// Stored names keep their original casing; only comparisons are normalized.
pub fn names_equal(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// NewType wrapper for package name with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            anyhow::bail!(
                "Package name '{}' contains invalid characters. Only alphanumeric, hyphens, underscores and dots are allowed.",
                name
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for package version with validation
///
/// The version is opaque: it is displayed and compared for equality, never ordered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    pub fn new(version: String) -> Result<Self> {
        if version.is_empty() {
            anyhow::bail!("Package version cannot be empty");
        }

        if version.len() > MAX_VERSION_LENGTH {
            anyhow::bail!(
                "Package version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            );
        }

        // '!' separates a PEP 440 epoch
        if !version.chars().all(|c| {
            c.is_alphanumeric() || c == '.' || c == '-' || c == '+' || c == '*' || c == '!'
        }) {
            anyhow::bail!(
                "Package version '{}' contains invalid characters. Only alphanumeric, dots, hyphens, plus, asterisks and exclamation marks are allowed.",
                version
            );
        }

        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A declared dependency of one package on another
///
/// The dependency name is not validated against the catalog: it may point at a
/// package that is not installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    name: String,
    requirement: String,
    pinned_version: Option<String>,
}

impl DependencyEdge {
    pub fn new(name: impl Into<String>, requirement: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requirement: requirement.into(),
            pinned_version: None,
        }
    }

    /// Pins the edge to one resolved version of the dependency
    ///
    /// Lockfiles that carry several versions of a package name the one each
    /// dependent actually uses.
    pub fn with_pinned_version(mut self, version: impl Into<String>) -> Self {
        self.pinned_version = Some(version.into());
        self
    }

    pub fn pinned_version(&self) -> Option<&str> {
        self.pinned_version.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form version constraint, shown as-is
    pub fn requirement(&self) -> &str {
        &self.requirement
    }
}

/// One package version together with its declared dependencies
#[derive(Debug, Clone, PartialEq)]
pub struct PackageSpec {
    name: PackageName,
    version: Version,
    dependencies: Vec<DependencyEdge>,
}

impl PackageSpec {
    pub fn new(name: String, version: String, dependencies: Vec<DependencyEdge>) -> Result<Self> {
        Ok(Self {
            name: PackageName::new(name)?,
            version: Version::new(version)?,
            dependencies,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn version(&self) -> &str {
        self.version.as_str()
    }

    pub fn dependencies(&self) -> &[DependencyEdge] {
        &self.dependencies
    }
}
