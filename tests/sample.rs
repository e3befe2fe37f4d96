use minitree::prelude::*;

use std::fs;
use std::path::PathBuf;

/// Write `content` to a uniquely named file under the system
/// temporary directory and return its path.
fn temp_csv(name: &str, content: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("minitree-{}-{name}.csv", std::process::id()));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn read_a_labeled_csv_file() {
    let path = temp_csv(
        "labeled",
        "ID,Outlook,Wind,Play\n\
         1,sunny,weak,no\n\
         2,overcast,weak,yes\n\
         3,rain,strong,no\n",
    );

    let sample = SampleReader::new()
        .file(&path)
        .has_header(true)
        .class_feature("Play")
        .read()
        .unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(sample.shape(), (3, 3));
    assert_eq!(sample.class_name(), Some("Play"));
    assert_eq!(sample.labels().unwrap(), vec!["no", "yes", "no"]);
    assert_eq!(sample["Outlook"].at(1), "overcast");
    assert_eq!(sample.at(0), vec![
        ("ID", "1"), ("Outlook", "sunny"), ("Wind", "weak"),
    ]);
}

#[test]
fn read_an_unlabeled_csv_file() {
    let path = temp_csv(
        "unlabeled",
        "Outlook,Wind\n\
         sunny,weak\n\
         rain,strong\n",
    );

    let sample = SampleReader::new()
        .file(&path)
        .has_header(true)
        .read()
        .unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(sample.shape(), (2, 2));
    assert!(sample.labels().is_none());
}

#[test]
fn headerless_columns_are_named_after_their_positions() {
    let path = temp_csv("headerless", "sunny,weak\nrain,strong\n");

    let sample = SampleReader::new()
        .file(&path)
        .read()
        .unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(sample.shape(), (2, 2));
    assert_eq!(sample.features()[0].name(), "Feat. [1]");
    assert_eq!(sample.features()[1].name(), "Feat. [2]");
}

#[test]
fn a_ragged_row_is_rejected() {
    let path = temp_csv(
        "ragged",
        "A,B,Class\n\
         x,p,yes\n\
         y,no\n",
    );

    let result = Sample::from_csv(&path, true);
    fs::remove_file(&path).unwrap();

    assert!(matches!(
        result,
        Err(Error::RaggedRow { line: 3, expected: 3, got: 2 })
    ));
}

#[test]
fn setting_a_missing_class_column_fails() {
    let a = Feature::from_values("A", ["x"]);
    let result = Sample::from_features(vec![a]).set_class("Class");

    assert!(matches!(
        result,
        Err(Error::MissingFeature { name }) if name == "Class"
    ));
}

#[test]
fn discretize_replaces_numbers_with_band_labels() {
    let temperature = Feature::from_values(
        "Temperature",
        ["64", "65", "68", "70", "72", "75", "80", "85"],
    );
    let mut sample = Sample::from_features(vec![temperature]);

    let bands = sample.discretize("Temperature", 3).unwrap();
    assert_eq!(bands.len(), 3);

    let feature = &sample["Temperature"];
    assert!(feature.distinct_value_count() <= 3);
    for (value, label) in
        [64.0, 65.0, 68.0, 70.0, 72.0, 75.0, 80.0, 85.0]
            .iter()
            .zip(feature.values())
    {
        assert_eq!(&bands.label_of(*value), label);
    }
}

#[test]
fn fitted_bands_carry_over_to_another_sample() {
    let train = Feature::from_values("T", ["1.0", "2.0", "9.0", "10.0"]);
    let mut train = Sample::from_features(vec![train]);
    let bands = train.discretize("T", 2).unwrap();

    // The second sample holds values inside and outside
    // the range seen at fitting time.
    let test = Feature::from_values("T", ["1.5", "9.5", "-100", "100"]);
    let mut test = Sample::from_features(vec![test]);
    test.apply_bands("T", &bands).unwrap();

    assert_eq!(test["T"].at(0), train["T"].at(0));
    assert_eq!(test["T"].at(1), train["T"].at(2));
    assert_eq!(test["T"].at(2), train["T"].at(0));
    assert_eq!(test["T"].at(3), train["T"].at(3));
}

#[test]
fn discretizing_a_categorical_column_fails() {
    let outlook = Feature::from_values("Outlook", ["sunny", "rain"]);
    let mut sample = Sample::from_features(vec![outlook]);

    let result = sample.discretize("Outlook", 2);
    assert!(matches!(
        result,
        Err(Error::NotNumeric { feature, value })
            if feature == "Outlook" && value == "sunny"
    ));
}

#[test]
fn a_discretized_column_behaves_like_any_categorical_one() {
    let temperature = Feature::from_values(
        "Temperature",
        ["60", "62", "95", "98"],
    );
    let class = Feature::from_values("Class", ["no", "no", "yes", "yes"]);
    let mut sample = Sample::from_features(vec![temperature, class]);
    let bands = sample.discretize("Temperature", 2).unwrap();
    let sample = sample.set_class("Class").unwrap();

    let tree = DecisionTreeBuilder::new(&sample).build();
    let f = tree.fit(&sample).unwrap();

    // Both cold records fall in the lower band, both hot ones in
    // the upper band, so the tree is a single split on the bands.
    let instances = Feature::from_values("Temperature", ["61", "96"]);
    let mut instances = Sample::from_features(vec![instances]);
    instances.apply_bands("Temperature", &bands).unwrap();

    let predictions = f.predict_all(&instances).unwrap();
    assert_eq!(predictions, vec!["no", "yes"]);
}
