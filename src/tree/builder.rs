use crate::sample::Sample;
use super::dtree::DecisionTree;

/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing
/// [`DecisionTree`].
///
/// # Example
///
/// ```no_run
/// use minitree::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("/path/to/data/file.csv")
///     .has_header(true)
///     .class_feature("Class")
///     .read()
///     .unwrap();
///
/// let tree = DecisionTreeBuilder::new(&sample)
///     .id_feature("ID")
///     .verbose(true)
///     .build();
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder<'a> {
    sample: &'a Sample,
    id_feature: Option<String>,
    verbose: bool,
}

impl<'a> DecisionTreeBuilder<'a> {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, no feature is treated as a record identifier
    /// and fitting stays silent.
    pub fn new(sample: &'a Sample) -> Self {
        Self {
            sample,
            id_feature: None,
            verbose: false,
        }
    }

    /// Name the record-identifier column.
    /// The identifier is excluded from the splitting candidates.
    pub fn id_feature<T: AsRef<str>>(mut self, name: T) -> Self {
        let name = name.as_ref();
        if self.sample.feature_position(name).is_none() {
            panic!("The feature named `{name}` does not exist");
        }
        self.id_feature = Some(name.to_string());

        self
    }

    /// Set the verbose parameter.
    /// When `true`, `DecisionTree::fit` prints a one-line summary
    /// of the fitted tree.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Build a [`DecisionTree`].
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree {
        DecisionTree::new(self.id_feature, self.verbose)
    }
}
