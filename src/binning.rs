//! Equal-width banding for numeric columns.
//! Continuous attributes are mapped to a small fixed set of
//! labeled ranges before tree induction;
//! the induced tree only ever sees the rendered band labels.
use std::fmt;
use std::ops::Range;

/// The perturbation applied to a column that takes a single value,
/// so that the cut still produces a non-degenerate range.
const PERTURBATION: f64 = 1e-10;

/// A half-open interval `[start, end)` of numeric values.
/// Its `Display` rendering is the categorical label
/// the discretization pass writes into the sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Band(pub Range<f64>);

impl Band {
    /// Create a new instance of `Band`.
    #[inline(always)]
    pub fn new(range: Range<f64>) -> Self {
        Self(range)
    }

    /// Check whether the given `value` is contained by `self.`
    #[inline(always)]
    pub fn contains(&self, value: &f64) -> bool {
        self.0.contains(value)
    }
}

/// A wrapper of `Vec<Band>`.
/// The bands of a fitted cut are sorted, half-open, and cover
/// the whole numeric range:
/// the left-most band starts at `f64::MIN` and
/// the right-most one ends at `f64::MAX`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bands(Vec<Band>);

impl Bands {
    /// Returns the number of bands.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there is no band.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cut the given values into `n_band` bands of equal width.
    /// This method naively cuts the observed value range,
    /// then widens the outer bands so that any future value,
    /// seen or unseen, falls into some band.
    #[inline(always)]
    pub fn cut(values: &[f64], n_band: usize) -> Self {
        assert!(n_band > 0, "A cut must produce at least one band");

        let mut min = f64::MAX;
        let mut max = f64::MIN;
        values.iter()
            .copied()
            .for_each(|value| {
                min = min.min(value);
                max = max.max(value);
            });
        if values.is_empty() {
            min = 0.0;
            max = 0.0;
        }

        // If the minimum value equals to the maximum one,
        // slightly perturb them.
        if min == max {
            min -= PERTURBATION;
            max += PERTURBATION;
        }

        let width = (max - min) / n_band as f64;

        let mut bands = Vec::with_capacity(n_band);

        let mut left = min;
        for i in 0..n_band {
            let l = if i == 0 { f64::MIN } else { left };
            let r = if i == n_band - 1 { f64::MAX } else { left + width };
            bands.push(Band::new(l..r));

            left = r;
        }

        assert_eq!(bands.len(), n_band);

        Self(bands)
    }

    /// The label of the band that contains `value`.
    pub fn label_of(&self, value: f64) -> String {
        let band = self.0.iter()
            .find(|band| band.contains(&value))
            .expect("the bands cover the whole numeric range");
        format!("{band}")
    }

    /// Returns a slice over the bands.
    pub fn bands(&self) -> &[Band] {
        &self.0[..]
    }
}

impl fmt::Display for Bands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.0.iter()
            .map(|band| format!("{band}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{line}")
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = if self.0.start == f64::MIN {
            String::from("-Inf")
        } else {
            format!("{: >.2}", self.0.start)
        };
        let end = if self.0.end == f64::MAX {
            String::from("+Inf")
        } else {
            format!("{: >.2}", self.0.end)
        };

        write!(f, "[{start}, {end})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_new() {
        let rng = 0f64..1f64;

        let expect = rng.clone();
        let result = Band::new(rng).0;
        assert_eq!(expect, result, "expected {expect:?}, got {result:?}.");
    }

    #[test]
    fn test_cut_covers_everything() {
        let values = [64.0, 65.0, 68.0, 70.0, 72.0, 75.0, 80.0, 85.0];
        let bands = Bands::cut(&values[..], 3);

        assert_eq!(bands.len(), 3);
        assert_eq!(bands.bands().first().unwrap().0.start, f64::MIN);
        assert_eq!(bands.bands().last().unwrap().0.end, f64::MAX);

        // Values far outside the observed range still get a label.
        assert_eq!(bands.label_of(-1e3), bands.label_of(f64::MIN));
        assert_eq!(bands.label_of(1e3), bands.label_of(f64::MAX / 2.0));
    }

    #[test]
    fn test_cut_single_value() {
        let values = [42.0; 5];
        let bands = Bands::cut(&values[..], 2);

        assert_eq!(bands.len(), 2);
        let label = bands.label_of(42.0);
        assert!(!label.is_empty());
    }

    #[test]
    fn test_labels_are_stable() {
        let values = [1.0, 2.0, 3.0, 4.0];
        let bands = Bands::cut(&values[..], 2);

        assert_eq!(bands.label_of(1.5), bands.label_of(1.5));
        assert_ne!(bands.label_of(1.0), bands.label_of(4.0));
    }
}
