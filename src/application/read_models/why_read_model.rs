//! Query-optimized view of one "why" report

use crate::dependency_analysis::domain::{Chain, Dependent, DependencyTree};
use serde::{Deserialize, Serialize};

/// One merged tree per root package, as shown in tree mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootTreeView {
    pub name: String,
    pub version: String,
    pub tree: DependencyTree,
}

/// WhyReadModel - Denormalized report for the formatters
///
/// Each variant carries everything its renderer needs, so formatters never
/// touch the catalog or the analyzer.
#[derive(Debug, Clone, PartialEq)]
pub enum WhyReadModel {
    /// Packages that depend on the target directly
    Direct {
        target: String,
        dependents: Vec<Dependent>,
    },
    /// Every chain from a root down to the target
    Deep {
        target: String,
        chains: Vec<Chain>,
        /// Number of distinct root packages among the chains
        root_count: usize,
    },
    /// Chains merged into one tree per root
    Tree {
        target: String,
        roots: Vec<RootTreeView>,
    },
}

impl WhyReadModel {
    pub fn target(&self) -> &str {
        match self {
            WhyReadModel::Direct { target, .. }
            | WhyReadModel::Deep { target, .. }
            | WhyReadModel::Tree { target, .. } => target,
        }
    }

    /// True when nothing depends on the target
    pub fn is_empty(&self) -> bool {
        match self {
            WhyReadModel::Direct { dependents, .. } => dependents.is_empty(),
            WhyReadModel::Deep { chains, .. } => chains.is_empty(),
            WhyReadModel::Tree { roots, .. } => roots.is_empty(),
        }
    }
}
