//! The files in `tree/` directory defines
//! the ID3 learner and the classifier it produces.

/// Defines the tree growing algorithm.
pub mod dtree;
/// Defines the classifier produced by `DecisionTree`.
pub mod classifier;
/// Defines a builder of `DecisionTree`.
pub mod builder;
/// Defines the inner representation of `DecisionTreeClassifier`.
pub mod node;

pub use builder::DecisionTreeBuilder;
pub use classifier::DecisionTreeClassifier;
pub use dtree::DecisionTree;
pub use node::Node;
