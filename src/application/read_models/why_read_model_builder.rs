//! Builder for constructing WhyReadModel from analyzer output

use super::why_read_model::{RootTreeView, WhyReadModel};
use crate::application::dto::{AnalysisMode, AnalysisOutcome, WhyResponse};
use crate::dependency_analysis::domain::Chain;
use crate::dependency_analysis::services::TreeBuilder;
use std::collections::HashSet;

/// Builder for constructing WhyReadModel from a use case response
pub struct WhyReadModelBuilder;

impl WhyReadModelBuilder {
    /// Builds the read model matching the response's mode
    ///
    /// A direct-mode outcome always yields `Direct`; chain outcomes yield
    /// `Tree` in tree mode and `Deep` otherwise.
    pub fn build(response: &WhyResponse) -> WhyReadModel {
        let target = response.target.clone();
        match &response.outcome {
            AnalysisOutcome::Dependents(dependents) => WhyReadModel::Direct {
                target,
                dependents: dependents.clone(),
            },
            AnalysisOutcome::Chains(chains) if response.mode == AnalysisMode::Tree => {
                WhyReadModel::Tree {
                    target,
                    roots: Self::build_roots(chains),
                }
            }
            AnalysisOutcome::Chains(chains) => WhyReadModel::Deep {
                target,
                chains: chains.clone(),
                root_count: Self::count_roots(chains),
            },
        }
    }

    fn count_roots(chains: &[Chain]) -> usize {
        chains
            .iter()
            .filter_map(|chain| chain.root())
            .map(|node| node.name())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Groups chains by root name in first-appearance order and merges each
    /// group into a tree
    fn build_roots(chains: &[Chain]) -> Vec<RootTreeView> {
        let mut groups: Vec<(&str, &str, Vec<Chain>)> = Vec::new();

        for chain in chains {
            let Some(root) = chain.root() else {
                continue;
            };
            match groups.iter_mut().find(|(name, _, _)| *name == root.name()) {
                Some((_, _, group)) => group.push(chain.clone()),
                None => groups.push((root.name(), root.version(), vec![chain.clone()])),
            }
        }

        groups
            .into_iter()
            .map(|(name, version, group)| RootTreeView {
                name: name.to_string(),
                version: version.to_string(),
                tree: TreeBuilder::build_tree(&group),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_analysis::domain::{ChainNode, Dependent, TreeKey};

    fn chain(nodes: &[(&str, &str, &str)]) -> Chain {
        Chain::new(
            nodes
                .iter()
                .map(|(name, version, dep)| ChainNode::new(*name, *version, *dep, ">=1"))
                .collect(),
        )
    }

    fn response(mode: AnalysisMode, outcome: AnalysisOutcome) -> WhyResponse {
        WhyResponse::new("target".to_string(), mode, outcome)
    }

    #[test]
    fn test_build_direct() {
        let dependents = vec![Dependent::new("app", "1.0", ">=1")];
        let model = WhyReadModelBuilder::build(&response(
            AnalysisMode::Direct,
            AnalysisOutcome::Dependents(dependents.clone()),
        ));

        assert_eq!(
            model,
            WhyReadModel::Direct {
                target: "target".to_string(),
                dependents,
            }
        );
    }

    #[test]
    fn test_build_deep_counts_distinct_roots() {
        let chains = vec![
            chain(&[("app", "1.0", "mid"), ("mid", "2.0", "target")]),
            chain(&[("app", "1.0", "target")]),
            chain(&[("mid", "2.0", "target")]),
        ];
        let model = WhyReadModelBuilder::build(&response(
            AnalysisMode::Deep,
            AnalysisOutcome::Chains(chains.clone()),
        ));

        match model {
            WhyReadModel::Deep {
                chains: got,
                root_count,
                ..
            } => {
                assert_eq!(got, chains);
                assert_eq!(root_count, 2);
            }
            other => panic!("expected deep model, got {:?}", other),
        }
    }

    #[test]
    fn test_build_tree_groups_roots_in_first_appearance_order() {
        let chains = vec![
            chain(&[("zeta", "0.1", "target")]),
            chain(&[("app", "1.0", "mid"), ("mid", "2.0", "target")]),
            chain(&[("zeta", "0.1", "mid"), ("mid", "2.0", "target")]),
        ];
        let model = WhyReadModelBuilder::build(&response(
            AnalysisMode::Tree,
            AnalysisOutcome::Chains(chains),
        ));

        let WhyReadModel::Tree { roots, .. } = model else {
            panic!("expected tree model");
        };
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].name, "zeta");
        assert_eq!(roots[0].version, "0.1");
        assert_eq!(roots[0].tree.len(), 1);

        let zeta = roots[0].tree.get(&TreeKey::new("zeta", "0.1")).unwrap();
        assert_eq!(zeta.children().len(), 1);
        assert_eq!(roots[1].name, "app");
    }

    #[test]
    fn test_build_empty_chains() {
        let model = WhyReadModelBuilder::build(&response(
            AnalysisMode::Tree,
            AnalysisOutcome::Chains(vec![]),
        ));
        assert!(model.is_empty());
        assert_eq!(model.target(), "target");
    }
}
