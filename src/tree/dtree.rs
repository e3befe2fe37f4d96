//! The ID3 tree-growing algorithm.
use colored::Colorize;

use crate::criterion::{best_split, partition_by, plurality};
use crate::error::{Error, Result};
use crate::hypothesis::Classifier;
use crate::sample::Sample;

use super::classifier::DecisionTreeClassifier;
use super::node::Node;

const WIDTH: usize = 9;

/// The ID3 decision tree learning algorithm.
/// Given a categorical sample with a class column,
/// [`DecisionTree`] outputs a [`DecisionTreeClassifier`]
/// under the specified parameters.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::tree::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use minitree::prelude::*;
///
/// // Read the training data from the CSV file.
/// let file = "/path/to/data/file.csv";
/// let sample = SampleReader::new()
///     .file(file)
///     .has_header(true)
///     .class_feature("Class")
///     .read()
///     .unwrap();
///
/// // Grow a tree, leaving the record identifier out.
/// let tree = DecisionTreeBuilder::new(&sample)
///     .id_feature("ID")
///     .build();
/// let f = tree.fit(&sample).unwrap();
///
/// // Inspect the tree and classify the training records.
/// println!("{}", f.to_json().unwrap());
/// let predictions = f.predict_all(&sample).unwrap();
/// ```
pub struct DecisionTree {
    id_feature: Option<String>,
    verbose: bool,
}

impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn new(id_feature: Option<String>, verbose: bool) -> Self {
        Self { id_feature, verbose, }
    }

    /// Induce a decision tree from `sample`.
    /// The sample must carry a class column and
    /// at least one record;
    /// every non-identifier feature is a splitting candidate.
    #[inline]
    pub fn fit(&self, sample: &Sample) -> Result<DecisionTreeClassifier> {
        if sample.labels().is_none() {
            return Err(Error::ClassNotSet);
        }

        let n_sample = sample.shape().0;
        if n_sample == 0 {
            return Err(Error::NoTrainingData);
        }
        let indices = (0..n_sample).collect::<Vec<usize>>();

        let candidates = self.candidates(sample)?;

        let root = grow(sample, &indices[..], &candidates[..], &[])?;
        let f = DecisionTreeClassifier::from(root);

        if self.verbose {
            self.report(sample, &f)?;
        }

        Ok(f)
    }

    /// The candidate feature positions, in header order,
    /// with the configured identifier column left out.
    fn candidates(&self, sample: &Sample) -> Result<Vec<usize>> {
        let n_feature = sample.shape().1;
        match &self.id_feature {
            Some(name) => {
                let id = sample.feature_position(name)
                    .ok_or_else(|| Error::MissingFeature {
                        name: name.clone(),
                    })?;
                Ok((0..n_feature).filter(|&i| i != id).collect())
            },
            None => Ok((0..n_feature).collect()),
        }
    }

    /// Print a one-line summary of the fitted tree.
    fn report(
        &self,
        sample: &Sample,
        f:      &DecisionTreeClassifier,
    ) -> Result<()>
    {
        let (n_sample, n_feature) = sample.shape();
        let labels = sample.labels().ok_or(Error::ClassNotSet)?;

        let correct = f.predict_all(sample)?
            .into_iter()
            .zip(labels.iter())
            .filter(|(hx, y)| hx == *y)
            .count();
        let accuracy = correct as f64 / n_sample as f64;
        let n_leaves = f.root().leaves().len();

        println!(
            "{} {} {} {}",
            format!("[TRAIN {n_sample: >WIDTH$}]").bold().green(),
            format!("[FEATURES {n_feature: >3}]").bold().yellow(),
            format!("[LEAVES {n_leaves: >3}]").bold().cyan(),
            format!("[ACCURACY {accuracy: >.5}]").bold().red(),
        );
        Ok(())
    }
}

/// Recursively grow the tree for the records at `indices`.
/// `parent` holds the records one level up;
/// it decides the label when `indices` is empty.
fn grow(
    sample:     &Sample,
    indices:    &[usize],
    candidates: &[usize],
    parent:     &[usize],
) -> Result<Node>
{
    // No record reached this node:
    // fall back to the majority of the parent partition.
    if indices.is_empty() {
        let (label, count) = plurality(sample, parent)
            .ok_or(Error::NoTrainingData)?;
        return Ok(Node::leaf(label, count));
    }

    // Every record carries the same label, so the node is pure.
    if let Some(label) = single_class(sample, indices) {
        return Ok(Node::leaf(label, indices.len()));
    }

    // Nothing left to split on:
    // the majority of the records that reached this node decides.
    if candidates.is_empty() {
        let (label, count) = plurality(sample, indices)
            .expect("a non-empty partition always has a majority label");
        return Ok(Node::leaf(label, count));
    }

    // Split on the first candidate attaining the maximal
    // information gain, then grow one subtree per observed value.
    let best = candidates[best_split(sample, indices, candidates)];
    let rest = candidates.iter()
        .copied()
        .filter(|&candidate| candidate != best)
        .collect::<Vec<_>>();

    let partitions = partition_by(sample, indices, best);
    let mut children = Vec::with_capacity(partitions.len());
    for (value, rows) in partitions {
        let subtree = grow(sample, &rows[..], &rest[..], indices)?;
        children.push((value, subtree));
    }

    let attribute = sample.features()[best].name();
    Ok(Node::branch(attribute, children))
}

/// The shared label of the records at `indices`,
/// if they all carry the same one.
fn single_class(sample: &Sample, indices: &[usize]) -> Option<String> {
    let labels = sample.labels()
        .expect("the class column is not set");

    let first = &labels[indices[0]];
    indices.iter()
        .all(|&i| &labels[i] == first)
        .then(|| first.clone())
}
