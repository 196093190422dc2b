/// Which question the report answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisMode {
    /// Packages that depend on the target directly
    Direct,
    /// Every dependency chain from a root down to the target (default)
    #[default]
    Deep,
    /// Chains merged into one tree per root package
    Tree,
}

impl AnalysisMode {
    /// Name used in JSON output and the config file
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::Direct => "direct",
            AnalysisMode::Deep => "deep",
            AnalysisMode::Tree => "tree",
        }
    }

    /// Whether this mode needs full chain discovery
    pub fn needs_chains(&self) -> bool {
        !matches!(self, AnalysisMode::Direct)
    }
}

impl std::str::FromStr for AnalysisMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "direct" => Ok(AnalysisMode::Direct),
            "deep" => Ok(AnalysisMode::Deep),
            "tree" => Ok(AnalysisMode::Tree),
            _ => Err(format!(
                "Invalid mode: {}. Please specify 'direct', 'deep' or 'tree'",
                s
            )),
        }
    }
}

impl std::fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
