use crate::application::read_models::{RootTreeView, WhyReadModel};
use crate::dependency_analysis::domain::{Chain, Dependent};
use crate::ports::outbound::WhyFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct DirectReport<'a> {
    target: &'a str,
    mode: &'static str,
    dependents: &'a [Dependent],
    total: usize,
}

#[derive(Debug, Serialize)]
struct DeepReport<'a> {
    target: &'a str,
    mode: &'static str,
    chains: &'a [Chain],
    /// Number of distinct root packages; the field name is part of the
    /// established output format
    root_gems: usize,
    total_chains: usize,
}

#[derive(Debug, Serialize)]
struct TreeReport<'a> {
    target: &'a str,
    mode: &'static str,
    roots: &'a [RootTreeView],
    total_roots: usize,
}

/// JsonFormatter adapter for machine-readable output
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl WhyFormatter for JsonFormatter {
    fn format(&self, model: &WhyReadModel) -> Result<String> {
        let mut json = match model {
            WhyReadModel::Direct { target, dependents } => {
                serde_json::to_string_pretty(&DirectReport {
                    target,
                    mode: "direct",
                    dependents,
                    total: dependents.len(),
                })?
            }
            WhyReadModel::Deep {
                target,
                chains,
                root_count,
            } => serde_json::to_string_pretty(&DeepReport {
                target,
                mode: "deep",
                chains,
                root_gems: *root_count,
                total_chains: chains.len(),
            })?,
            WhyReadModel::Tree { target, roots } => serde_json::to_string_pretty(&TreeReport {
                target,
                mode: "tree",
                roots,
                total_roots: roots.len(),
            })?,
        };
        json.push('\n');
        Ok(json)
    }
}
