//! Entropy-based splitting measures for tree induction.
use rayon::prelude::*;

use crate::sample::Sample;

/// An insertion-ordered table that counts records per class label.
/// Labels keep the order of their first appearance,
/// so the maximum lookup of [`majority`](ClassCounts::majority)
/// breaks ties toward the label seen first.
/// Every aggregation allocates a fresh table;
/// tables never outlive the call that built them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassCounts {
    counts: Vec<(String, usize)>,
}

impl ClassCounts {
    /// Construct an empty table.
    pub fn new() -> Self {
        Self { counts: Vec::new(), }
    }

    /// Construct a table holding a zero count for every label in
    /// `vocabulary`, in the given order.
    /// Partition entropies are computed over such tables so that
    /// every partition ranges over the full class vocabulary.
    pub fn with_vocabulary<'a, I>(vocabulary: I) -> Self
        where I: IntoIterator<Item = &'a str>,
    {
        let counts = vocabulary.into_iter()
            .map(|label| (label.to_string(), 0))
            .collect::<Vec<_>>();
        Self { counts, }
    }

    /// Count one record labeled `label`.
    pub fn observe<S: AsRef<str>>(&mut self, label: S) {
        self.observe_many(label, 1);
    }

    /// Count `count` records labeled `label` at once.
    pub fn observe_many<S: AsRef<str>>(&mut self, label: S, count: usize) {
        let label = label.as_ref();
        match self.counts.iter_mut().find(|(l, _)| l.as_str() == label) {
            Some((_, c)) => { *c += count; },
            None => { self.counts.push((label.to_string(), count)); },
        }
    }

    /// Total number of records counted so far.
    pub fn total(&self) -> usize {
        self.counts.iter()
            .map(|(_, count)| count)
            .sum::<usize>()
    }

    /// The label with the maximal count, paired with that count.
    /// The first label attaining the maximum wins ties.
    /// Returns `None` for a table with no label at all.
    pub fn majority(&self) -> Option<(&str, usize)> {
        let mut best: Option<(&str, usize)> = None;
        for (label, count) in &self.counts {
            match best {
                Some((_, c)) if *count <= c => {},
                _ => { best = Some((label.as_str(), *count)); },
            }
        }
        best
    }

    /// The labels of this table, in first-appearance order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.counts.iter().map(|(label, _)| label.as_str())
    }

    /// The `(label, count)` pairs, in first-appearance order.
    pub fn counts(&self) -> &[(String, usize)] {
        &self.counts[..]
    }
}

/// Shannon entropy, in bits, of the class distribution in `counts`.
/// Labels with a zero count contribute nothing;
/// an empty or single-class table has zero entropy.
#[inline]
pub fn entropy(counts: &ClassCounts) -> f64 {
    let total = counts.total();
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    counts.counts()
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(_, count)| {
            let p = *count as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>()
}

/// The reduction in entropy obtained by partitioning the records
/// at `indices` on the feature at position `feature`.
/// Each partition's count table is seeded with the class
/// vocabulary of the whole subset,
/// so absent classes count zero rather than being missing.
/// The result lies in `[0, log2(#classes)]`.
#[inline]
pub fn information_gain(
    sample:  &Sample,
    indices: &[usize],
    feature: usize,
) -> f64
{
    let labels = sample.labels()
        .expect("the class column is not set");

    // Overall class distribution of the subset.
    let mut overall = ClassCounts::new();
    for &i in indices {
        overall.observe(&labels[i]);
    }

    let total = indices.len() as f64;
    let remainder = partition_by(sample, indices, feature)
        .into_iter()
        .map(|(_, rows)| {
            let mut counts = ClassCounts::with_vocabulary(overall.labels());
            for &i in &rows {
                counts.observe(&labels[i]);
            }
            (rows.len() as f64 / total) * entropy(&counts)
        })
        .sum::<f64>();

    entropy(&overall) - remainder
}

/// The position, within `candidates`, of the first candidate
/// feature attaining the strictly maximal information gain
/// over the records at `indices`.
/// Candidates are scored in parallel;
/// the scores land in candidate order, so the winner is
/// deterministic for a fixed candidate order.
#[inline]
pub fn best_split(
    sample:     &Sample,
    indices:    &[usize],
    candidates: &[usize],
) -> usize
{
    assert!(!candidates.is_empty(), "No candidate features to split on");

    let gains = candidates.par_iter()
        .map(|&feature| information_gain(sample, indices, feature))
        .collect::<Vec<_>>();

    let mut best = 0_usize;
    for (position, &gain) in gains.iter().enumerate() {
        if gain > gains[best] {
            best = position;
        }
    }
    best
}

/// The most frequent class label among the records at `indices`,
/// together with its count.
/// Ties go to the label encountered first in record order.
/// Returns `None` for an empty subset.
#[inline]
pub fn plurality(sample: &Sample, indices: &[usize])
    -> Option<(String, usize)>
{
    let labels = sample.labels()
        .expect("the class column is not set");

    let mut counts = ClassCounts::new();
    for &i in indices {
        counts.observe(&labels[i]);
    }

    counts.majority()
        .map(|(label, count)| (label.to_string(), count))
}

/// Split the records at `indices` into one group per distinct
/// value of the feature at position `feature`.
/// Groups keep the first-appearance order of the values,
/// and rows within a group keep their input order.
pub(crate) fn partition_by(
    sample:  &Sample,
    indices: &[usize],
    feature: usize,
) -> Vec<(String, Vec<usize>)>
{
    let feature = &sample.features()[feature];

    let mut partitions: Vec<(String, Vec<usize>)> = Vec::new();
    for &i in indices {
        let value = feature.at(i);
        match partitions.iter_mut().find(|(v, _)| v.as_str() == value) {
            Some((_, rows)) => { rows.push(i); },
            None => { partitions.push((value.to_string(), vec![i])); },
        }
    }
    partitions
}
