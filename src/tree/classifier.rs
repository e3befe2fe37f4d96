//! Defines the decision tree classifier.
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::hypothesis::Classifier;
use crate::sample::Sample;
use super::node::Node;

/// Decision tree classifier.
/// This struct is just a wrapper of [`Node`].
/// The tree is built once and read many times:
/// nothing in prediction mutates it,
/// so a fitted classifier can be shared freely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionTreeClassifier {
    root: Node,
}

impl From<Node> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}

impl Classifier for DecisionTreeClassifier {
    fn predict(&self, sample: &Sample, row: usize) -> Result<String> {
        self.root.predict(sample, row)
    }
}

impl DecisionTreeClassifier {
    /// The root node of the tree.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Render the tree as indented JSON:
    /// a leaf becomes the single-entry object `{label: count}`,
    /// a branch becomes `{attribute: {value: subtree, ...}}`
    /// with the children in construction order.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }

    /// Parse a tree back from its [`to_json`] output.
    ///
    /// [`to_json`]: DecisionTreeClassifier::to_json
    pub fn from_json(json: &str) -> Result<Self> {
        let f = serde_json::from_str::<Self>(json)?;
        Ok(f)
    }
}
