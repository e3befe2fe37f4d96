//! A node struct used in the decision tree algorithm.
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::criterion::ClassCounts;
use crate::error::Result;
use crate::hypothesis::Classifier;
use crate::sample::Sample;

use std::fmt;

/// A node of an induced decision tree.
/// Both shapes are immutable once constructed:
/// a branch receives its full child list at construction time
/// and never changes afterwards.
#[derive(Clone, PartialEq)]
pub enum Node {
    /// A node that splits on one attribute.
    /// It holds one child per attribute value observed
    /// in the partition that grew this node.
    Branch {
        /// The splitting attribute name.
        attribute: String,
        /// The `value -> subtree` edges,
        /// in first-appearance order of the values.
        children: Vec<(String, Node)>,
    },
    /// A node that predicts a single class label.
    Leaf {
        /// The predicted class label.
        label: String,
        /// The number of training records this leaf represents.
        count: usize,
    },
}

impl Node {
    /// Construct a branch node from the splitting attribute
    /// and its `value -> subtree` edges.
    pub fn branch<T: ToString>(
        attribute: T,
        children:  Vec<(String, Node)>,
    ) -> Self
    {
        assert!(
            !children.is_empty(),
            "A branch node must have at least one child",
        );
        Self::Branch {
            attribute: attribute.to_string(),
            children,
        }
    }

    /// Construct a leaf node predicting `label`,
    /// backed by `count` training records.
    pub fn leaf<T: ToString>(label: T, count: usize) -> Self {
        Self::Leaf {
            label: label.to_string(),
            count,
        }
    }

    /// Returns `true` if `self` is a leaf node.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// All `(label, count)` leaves of the subtree rooted at `self`,
    /// collected in depth-first child order.
    pub fn leaves(&self) -> Vec<(&str, usize)> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<(&'a str, usize)>) {
        match self {
            Self::Branch { children, .. } => {
                for (_, child) in children {
                    child.collect_leaves(leaves);
                }
            },
            Self::Leaf { label, count } => {
                leaves.push((label.as_str(), *count));
            },
        }
    }

    /// The label backed by the most training records over the
    /// whole subtree rooted at `self`,
    /// counts summed across all leaves sharing a label.
    /// The first label reaching the maximum during the depth-first
    /// aggregation wins ties.
    pub fn subtree_majority(&self) -> String {
        let mut counts = ClassCounts::new();
        for (label, count) in self.leaves() {
            counts.observe_many(label, count);
        }

        counts.majority()
            .map(|(label, _)| label.to_string())
            .expect("a tree always contains at least one leaf")
    }
}

impl Classifier for Node {
    fn predict(&self, sample: &Sample, row: usize) -> Result<String> {
        match self {
            Self::Branch { attribute, children } => {
                let value = sample.feature(attribute)?.at(row);
                match children.iter().find(|(v, _)| v.as_str() == value) {
                    Some((_, child)) => child.predict(sample, row),
                    // A value never observed while growing:
                    // vote over every leaf below this node.
                    None => Ok(self.subtree_majority()),
                }
            },
            Self::Leaf { label, .. } => {
                Ok(label.clone())
            },
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Branch {
                attribute,
                children,
            } => {
                f.debug_struct("Branch")
                    .field("attribute", &attribute)
                    .field("children", &children)
                    .finish()
            },
            Self::Leaf {
                label,
                count,
            } => {
                f.debug_struct("Leaf")
                    .field("label", &label)
                    .field("count", &count)
                    .finish()
            },
        }
    }
}

// The wire format of a tree is the nested mapping
// `{label: count}` for a leaf and
// `{attribute: {value: subtree, ...}}` for a branch,
// so the serde implementations are written by hand
// rather than derived from the enum shape.

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S)
        -> std::result::Result<S::Ok, S::Error>
        where S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Self::Branch { attribute, children } => {
                map.serialize_entry(attribute, &Edges(children))?;
            },
            Self::Leaf { label, count } => {
                map.serialize_entry(label, count)?;
            },
        }
        map.end()
    }
}

/// The `value -> subtree` mapping of a branch,
/// serialized in child order.
struct Edges<'a>(&'a [(String, Node)]);

impl Serialize for Edges<'_> {
    fn serialize<S>(&self, serializer: S)
        -> std::result::Result<S::Ok, S::Error>
        where S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (value, child) in self.0 {
            map.serialize_entry(value, child)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D)
        -> std::result::Result<Self, D::Error>
        where D: Deserializer<'de>,
    {
        struct NodeVisitor;

        impl<'de> Visitor<'de> for NodeVisitor {
            type Value = Node;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(
                    "a single-entry map, \
                     either `label: count` or `attribute: {value: subtree}`"
                )
            }

            fn visit_map<A>(self, mut map: A)
                -> std::result::Result<Node, A::Error>
                where A: MapAccess<'de>,
            {
                let key: String = map.next_key()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;

                let node = match map.next_value::<CountOrEdges>()? {
                    CountOrEdges::Count(count) => {
                        Node::Leaf { label: key, count, }
                    },
                    CountOrEdges::Edges(children) => {
                        if children.is_empty() {
                            return Err(de::Error::custom(
                                "a branch node must have at least one child"
                            ));
                        }
                        Node::Branch { attribute: key, children, }
                    },
                };

                if map.next_key::<String>()?.is_some() {
                    return Err(de::Error::custom(
                        "a node must be a single-entry map"
                    ));
                }

                Ok(node)
            }
        }

        deserializer.deserialize_map(NodeVisitor)
    }
}

/// What a node maps its single key to:
/// a leaf count or the child mapping of a branch.
enum CountOrEdges {
    Count(usize),
    Edges(Vec<(String, Node)>),
}

impl<'de> Deserialize<'de> for CountOrEdges {
    fn deserialize<D>(deserializer: D)
        -> std::result::Result<Self, D::Error>
        where D: Deserializer<'de>,
    {
        struct CountOrEdgesVisitor;

        impl<'de> Visitor<'de> for CountOrEdgesVisitor {
            type Value = CountOrEdges;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a leaf count or a map of children")
            }

            fn visit_u64<E>(self, count: u64)
                -> std::result::Result<Self::Value, E>
                where E: de::Error,
            {
                Ok(CountOrEdges::Count(count as usize))
            }

            fn visit_map<A>(self, mut map: A)
                -> std::result::Result<Self::Value, A::Error>
                where A: MapAccess<'de>,
            {
                let mut children = Vec::new();
                while let Some(entry) = map.next_entry::<String, Node>()? {
                    children.push(entry);
                }
                Ok(CountOrEdges::Edges(children))
            }
        }

        deserializer.deserialize_any(CountOrEdgesVisitor)
    }
}
