//! The core library for the `Classifier` trait.
use crate::error::Result;
use crate::sample::Sample;

/// A trait that defines the behavior of classifier.
/// You only need to implement the `predict` method.
pub trait Classifier {
    /// Predicts the class label of the `row`-th record of `sample`.
    fn predict(&self, sample: &Sample, row: usize) -> Result<String>;

    /// Predicts the labels of all records in `sample`.
    /// The returned labels preserve the record order;
    /// predictions share no state.
    fn predict_all(&self, sample: &Sample) -> Result<Vec<String>> {
        let n_sample = sample.shape().0;
        (0..n_sample).map(|row| self.predict(sample, row))
            .collect::<Result<Vec<_>>>()
    }
}
