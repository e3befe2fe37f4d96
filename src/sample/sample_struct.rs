use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::collections::HashMap;
use std::ops::Index;

use crate::binning::Bands;
use crate::error::{Error, Result};
use super::feature::Feature;

/// Struct `Sample` holds a batch of categorical records
/// in a column-oriented layout.
/// One column may be designated as the class column with
/// [`set_class`](Sample::set_class);
/// its values then become the training labels and the column
/// no longer counts as a feature.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    name_to_index: HashMap<String, usize>,
    features: Vec<Feature>,
    labels: Option<Vec<String>>,
    class_name: Option<String>,
    n_sample: usize,
    n_feature: usize,
}

impl Sample {
    /// Construct a `Sample` from a set of columns.
    /// All the columns must hold the same number of records.
    pub fn from_features(features: Vec<Feature>) -> Self {
        let n_sample = features.first().map(Feature::len).unwrap_or(0);
        for feature in &features {
            assert_eq!(
                feature.len(), n_sample,
                "all features must hold the same number of records",
            );
        }

        let n_feature = features.len();
        let name_to_index = feature_index(&features);

        Self {
            name_to_index,
            features,
            labels: None,
            class_name: None,
            n_sample,
            n_feature,
        }
    }

    /// Read a CSV format file to `Sample` type.
    /// If the file has no header row,
    /// the columns are named `Feat. [1]`, `Feat. [2]`, and so on.
    pub fn from_csv<P>(file: P, has_header: bool) -> Result<Self>
        where P: AsRef<Path>,
    {
        // Open the given `file`.
        let file = File::open(file)?;
        let lines = BufReader::new(file).lines();

        let mut features: Vec<Feature> = Vec::new();
        let mut n_sample = 0_usize;

        // For each line of the file
        for (number, line) in lines.enumerate() {
            let line = line?;
            let cells = line.split(',')
                .map(str::trim)
                .collect::<Vec<_>>();

            if features.is_empty() {
                if has_header {
                    features = cells.into_iter()
                        .map(Feature::new)
                        .collect::<Vec<_>>();
                    continue;
                }

                // The header does not exist:
                // name the columns after their positions.
                features = (1..=cells.len())
                    .map(|i| Feature::new(format!("Feat. [{i}]")))
                    .collect::<Vec<_>>();
            }

            if cells.len() != features.len() {
                return Err(Error::RaggedRow {
                    line: number + 1,
                    expected: features.len(),
                    got: cells.len(),
                });
            }

            for (feature, cell) in features.iter_mut().zip(cells) {
                feature.append(cell);
            }
            n_sample += 1;
        }

        let n_feature = features.len();
        let name_to_index = feature_index(&features);

        let sample = Self {
            name_to_index,
            features,
            labels: None,
            class_name: None,
            n_sample,
            n_feature,
        };

        Ok(sample)
    }

    /// Set the feature of name `class` to the class column.
    /// The column leaves the feature list;
    /// its values become the training labels.
    /// This method consumes `self`.
    pub fn set_class<S: AsRef<str>>(mut self, class: S) -> Result<Self> {
        let class = class.as_ref();
        let pos = self.features.iter()
            .position(|feature| feature.name() == class)
            .ok_or_else(|| Error::MissingFeature { name: class.to_string() })?;

        let feature = self.features.remove(pos);
        self.class_name = Some(feature.name().to_string());
        self.labels = Some(feature.into_values());
        self.n_feature -= 1;
        self.name_to_index = feature_index(&self.features);

        Ok(self)
    }

    /// Returns the pair of the number of records and
    /// the number of features.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }

    /// Returns a slice of type `Feature`.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }

    /// The class labels, once a class column has been set.
    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    /// The name of the class column, once set.
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// The position of the feature named `name`, if any.
    pub fn feature_position<S: AsRef<str>>(&self, name: S) -> Option<usize> {
        self.name_to_index.get(name.as_ref()).copied()
    }

    /// The feature named `name`.
    /// Unlike the `sample[name]` indexing,
    /// a missing column is surfaced as an error.
    pub fn feature<S: AsRef<str>>(&self, name: S) -> Result<&Feature> {
        let name = name.as_ref();
        self.feature_position(name)
            .map(|pos| &self.features[pos])
            .ok_or_else(|| Error::MissingFeature { name: name.to_string() })
    }

    /// Returns the `row`-th record as `(feature name, value)` pairs,
    /// in header order.
    pub fn at(&self, row: usize) -> Vec<(&str, &str)> {
        self.features.iter()
            .map(|feature| (feature.name(), feature.at(row)))
            .collect::<Vec<_>>()
    }

    /// Cut the numeric feature named `name` into `n_band`
    /// equal-width bands and overwrite each of its values
    /// with the label of the band the value falls in.
    /// Returns the fitted [`Bands`] so that the same cuts can be
    /// applied to another sample with
    /// [`apply_bands`](Sample::apply_bands).
    pub fn discretize<S>(&mut self, name: S, n_band: usize) -> Result<Bands>
        where S: AsRef<str>,
    {
        let values = self.numeric_values(name.as_ref())?;
        let bands = Bands::cut(&values[..], n_band);
        self.overwrite_with_labels(name.as_ref(), &values[..], &bands);
        Ok(bands)
    }

    /// Overwrite the numeric feature named `name` with the labels
    /// of previously fitted `bands`.
    pub fn apply_bands<S>(&mut self, name: S, bands: &Bands) -> Result<()>
        where S: AsRef<str>,
    {
        let values = self.numeric_values(name.as_ref())?;
        self.overwrite_with_labels(name.as_ref(), &values[..], bands);
        Ok(())
    }

    fn numeric_values(&self, name: &str) -> Result<Vec<f64>> {
        let feature = self.feature(name)?;
        feature.values()
            .iter()
            .map(|value| {
                value.parse::<f64>()
                    .map_err(|_| Error::NotNumeric {
                        feature: feature.name().to_string(),
                        value: value.clone(),
                    })
            })
            .collect::<Result<Vec<_>>>()
    }

    fn overwrite_with_labels(
        &mut self,
        name:   &str,
        values: &[f64],
        bands:  &Bands,
    )
    {
        let pos = self.feature_position(name)
            .expect("the feature was looked up just before");
        let labels = values.iter()
            .map(|&value| bands.label_of(value))
            .collect::<Vec<_>>();
        self.features[pos].overwrite(labels);
    }
}

/// Maps each feature name to its position.
fn feature_index(features: &[Feature]) -> HashMap<String, usize> {
    features.iter()
        .enumerate()
        .map(|(i, feature)| (feature.name().to_string(), i))
        .collect::<HashMap<_, _>>()
}

impl<S> Index<S> for Sample
    where S: AsRef<str>
{
    type Output = Feature;

    fn index(&self, name: S) -> &Self::Output {
        let name: &str = name.as_ref();
        let pos = *self.name_to_index.get(name).unwrap();
        &self.features[pos]
    }
}
