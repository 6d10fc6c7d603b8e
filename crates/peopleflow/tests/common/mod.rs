use peopleflow::Dataset;
use std::path::PathBuf;

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("sample_dataset.json")
}

pub fn sample_dataset() -> Dataset {
    Dataset::from_path(fixture_path()).expect("sample dataset loads")
}
