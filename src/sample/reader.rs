use std::path::Path;

use crate::error::Result;
use super::sample_struct::Sample;

/// A struct that returns [`Sample`].
/// Using this struct, one can read a CSV format file to [`Sample`].
/// Other formats are not supported.
/// # Example
/// The following code reads a training CSV file
/// whose class column is named `Class`.
/// ```no_run
/// use minitree::SampleReader;
///
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::new()
///     .file(filename)
///     .has_header(true)
///     .class_feature("Class")
///     .read()
///     .unwrap();
/// ```
/// Leave `class_feature` out to read a file of unlabeled
/// records to classify.
pub struct SampleReader<P> {
    file: Option<P>,
    has_header: bool,
    class: Option<String>,
}

impl<P> SampleReader<P> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            has_header: false,
            class: None,
        }
    }

    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }

    /// Set the column name that holds the class label.
    pub fn class_feature<S: AsRef<str>>(mut self, column: S) -> Self {
        self.class = Some(column.as_ref().to_string());
        self
    }
}

impl<P> Default for SampleReader<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }

    /// Reads the file based on the arguments,
    /// and returns the resulting [`Sample`].
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample> {
        if self.file.is_none() {
            panic!("The file name for csv is not set");
        }
        let file = self.file.unwrap();

        let sample = Sample::from_csv(file, self.has_header)?;
        match self.class {
            Some(class) => sample.set_class(class),
            None => Ok(sample),
        }
    }
}
