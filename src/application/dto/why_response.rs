use super::AnalysisMode;
use crate::dependency_analysis::domain::{Chain, Dependent};

/// Raw analyzer output for one request
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// Result of a direct-dependents query
    Dependents(Vec<Dependent>),
    /// Result of a chain search (deep and tree modes)
    Chains(Vec<Chain>),
}

impl AnalysisOutcome {
    pub fn is_empty(&self) -> bool {
        match self {
            AnalysisOutcome::Dependents(dependents) => dependents.is_empty(),
            AnalysisOutcome::Chains(chains) => chains.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            AnalysisOutcome::Dependents(dependents) => dependents.len(),
            AnalysisOutcome::Chains(chains) => chains.len(),
        }
    }
}

/// WhyResponse - Internal response DTO from the explain-dependency use case
///
/// Adapters turn this into a read model and then into the requested format.
#[derive(Debug, Clone)]
pub struct WhyResponse {
    /// Target package name as queried
    pub target: String,
    /// Mode the analysis ran in
    pub mode: AnalysisMode,
    /// Dependents or chains found
    pub outcome: AnalysisOutcome,
}

impl WhyResponse {
    pub fn new(target: String, mode: AnalysisMode, outcome: AnalysisOutcome) -> Self {
        Self {
            target,
            mode,
            outcome,
        }
    }
}
