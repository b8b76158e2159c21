use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{Builder, NamedTempFile};

use insurance_dashboard::data::aggregate::aggregate;
use insurance_dashboard::data::filter::{apply_filters, Choice, FilterSelection};
use insurance_dashboard::data::loader::load_file;
use insurance_dashboard::data::options::derive_options;

const SAMPLE: &str = "age,sex,bmi,children,smoker,region,charges
19,female,27.9,0,yes,southwest,16884.92
18,male,33.77,1,no,southeast,1725.55
28,male,33.0,3,no,southeast,4449.46
";

fn sample_file() -> NamedTempFile {
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();
    file
}

fn summary_json(args: &[&str]) -> serde_json::Value {
    let file = sample_file();
    let output = Command::cargo_bin("insurance-dashboard")
        .unwrap()
        .arg(file.path())
        .arg("--summary")
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn pipeline_over_loaded_file() {
    let file = sample_file();
    let dataset = load_file(file.path()).unwrap();

    let options = derive_options(&dataset.records);
    assert_eq!(
        options.region,
        vec![
            Choice::All,
            Choice::parse("southeast"),
            Choice::parse("southwest")
        ]
    );

    let selection = FilterSelection {
        sex: Choice::parse("male"),
        ..Default::default()
    };
    let agg = aggregate(&apply_filters(&dataset.records, &selection));
    assert_eq!(agg.count, 2);
    assert!((agg.average_charge - 3087.505).abs() < 1e-6);
    assert_eq!(agg.regions.len(), 1);
    assert_eq!(agg.regions[0].label, "Southeast");
}

#[test]
fn summary_prints_unfiltered_aggregate() {
    let json = summary_json(&[]);
    assert_eq!(json["count"], 3);
    assert_eq!(json["filters"]["region"], "all");
    let avg = json["averageCharge"].as_f64().unwrap();
    assert!((avg - 7686.643333).abs() < 1e-3);
    let regions = json["regions"].as_array().unwrap();
    assert_eq!(regions.len(), 2);
    assert_eq!(regions[0]["label"], "Southwest");
    assert_eq!(regions[1]["region"], "southeast");
}

#[test]
fn summary_applies_filter_flags() {
    let json = summary_json(&["--smoker", "yes"]);
    assert_eq!(json["count"], 1);
    assert_eq!(json["smokerPercentage"], 100.0);
    assert_eq!(json["filters"]["smoker"], "yes");

    let json = summary_json(&["--region", "atlantis"]);
    assert_eq!(json["count"], 0);
    assert_eq!(json["averageCharge"], 0.0);
    assert_eq!(json["smokerPercentage"], 0.0);
    assert!(json["regions"].as_array().unwrap().is_empty());
}

#[test]
fn summary_fails_on_missing_file() {
    Command::cargo_bin("insurance-dashboard")
        .unwrap()
        .args(["/nonexistent/insurance.csv", "--summary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/insurance.csv"));
}
