#![warn(missing_docs)]

//!
//! A crate that provides the ID3 decision tree learning algorithm
//! for categorical tabular data.
//!
//! The pipeline has two stages, used in sequence.
//!
//! - Tree induction:
//!   [`DecisionTree`] consumes a labeled [`Sample`] and
//!   recursively partitions its records by the feature that
//!   maximizes information gain,
//!   producing a [`DecisionTreeClassifier`].
//!
//! - Prediction:
//!   the classifier walks each unlabeled record from the root to
//!   a leaf, following the branch that matches the observed
//!   attribute value.
//!   A value never observed while growing falls back to the
//!   majority label of the subtree below the current node.
//!
//! The induced tree renders as an indented nested JSON mapping
//! for inspection, and parses back from the same text.
//! Continuous columns can be bucketed into labeled bands with
//! [`Bands`] before induction;
//! the tree only ever sees the band labels.
//!
//! # Example
//! ```no_run
//! use minitree::prelude::*;
//!
//! let train = SampleReader::new()
//!     .file("/path/to/train.csv")
//!     .has_header(true)
//!     .class_feature("Class")
//!     .read()
//!     .unwrap();
//!
//! let tree = DecisionTreeBuilder::new(&train)
//!     .id_feature("ID")
//!     .build();
//! let f = tree.fit(&train).unwrap();
//!
//! println!("{}", f.to_json().unwrap());
//!
//! let instances = SampleReader::new()
//!     .file("/path/to/instances.csv")
//!     .has_header(true)
//!     .read()
//!     .unwrap();
//! for label in f.predict_all(&instances).unwrap() {
//!     println!("{label}");
//! }
//! ```

pub mod binning;
pub mod criterion;
pub mod error;
pub mod hypothesis;
pub mod prelude;
pub mod sample;
pub mod tree;

pub use binning::{Band, Bands};
pub use criterion::{
    best_split,
    entropy,
    information_gain,
    plurality,
    ClassCounts,
};
pub use error::{Error, Result};
pub use hypothesis::Classifier;
pub use sample::{Feature, Sample, SampleReader};
pub use tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Node,
};
