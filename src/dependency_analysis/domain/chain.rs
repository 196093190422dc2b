use serde::{Deserialize, Serialize};

/// A package that declares a dependency edge pointing at the target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependent {
    name: String,
    version: String,
    requirement: String,
}

impl Dependent {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        requirement: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            requirement: requirement.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn requirement(&self) -> &str {
        &self.requirement
    }
}

/// One hop of a dependency chain: `name (version)` requires `dependency requirement`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainNode {
    name: String,
    version: String,
    dependency: String,
    requirement: String,
}

impl ChainNode {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        dependency: impl Into<String>,
        requirement: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            dependency: dependency.into(),
            requirement: requirement.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn dependency(&self) -> &str {
        &self.dependency
    }

    pub fn requirement(&self) -> &str {
        &self.requirement
    }
}

/// Ordered path of hops from a root package down to the target
///
/// The target itself is not a node: it is the `dependency` of the last hop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chain(Vec<ChainNode>);

impl Chain {
    pub fn new(nodes: Vec<ChainNode>) -> Self {
        Self(nodes)
    }

    pub fn nodes(&self) -> &[ChainNode] {
        &self.0
    }

    pub fn root(&self) -> Option<&ChainNode> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&ChainNode> {
        self.0.last()
    }

    /// Returns a copy of this chain extended by one hop
    pub fn extended(&self, node: ChainNode) -> Self {
        let mut nodes = Vec::with_capacity(self.0.len() + 1);
        nodes.extend_from_slice(&self.0);
        nodes.push(node);
        Self(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependent_serializes_stable_field_names() {
        let dependent = Dependent::new("alpha", "1.2.3", ">= 1.0");
        let json = serde_json::to_value(&dependent).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "name": "alpha", "version": "1.2.3", "requirement": ">= 1.0" })
        );
    }

    #[test]
    fn test_chain_serializes_as_plain_array() {
        let chain = Chain::new(vec![ChainNode::new("mid", "2.0", "target", "~> 3.0")]);
        let json = serde_json::to_value(&chain).unwrap();

        assert_eq!(
            json,
            serde_json::json!([
                { "name": "mid", "version": "2.0", "dependency": "target", "requirement": "~> 3.0" }
            ])
        );
    }

    #[test]
    fn test_chains_round_trip_through_json() {
        let chains = vec![
            Chain::new(vec![
                ChainNode::new("alpha", "1.0", "mid", ">= 2.0"),
                ChainNode::new("mid", "2.0", "target", "~> 3.0"),
            ]),
            Chain::new(vec![ChainNode::new("mid", "2.0", "target", "~> 3.0")]),
        ];

        let json = serde_json::to_string(&chains).unwrap();
        let parsed: Vec<Chain> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, chains);
    }

    #[test]
    fn test_extended_leaves_original_untouched() {
        let base = Chain::new(vec![ChainNode::new("alpha", "1.0", "mid", ">= 2.0")]);
        let longer = base.extended(ChainNode::new("mid", "2.0", "target", "~> 3.0"));

        assert_eq!(base.nodes().len(), 1);
        assert_eq!(longer.nodes().len(), 2);
        assert_eq!(longer.root().unwrap().name(), "alpha");
        assert_eq!(longer.last().unwrap().dependency(), "target");
    }
}
