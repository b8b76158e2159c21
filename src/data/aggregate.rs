use serde::Serialize;

use super::model::Record;

// ---------------------------------------------------------------------------
// Derived aggregate over a filtered view
// ---------------------------------------------------------------------------

/// Label used for records that carry no region.
pub const UNKNOWN_REGION_LABEL: &str = "Unknown";

/// Mean charge of one region present in the filtered view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionAverage {
    /// Raw grouping key; `None` for records without a region.
    pub region: Option<String>,
    /// Display label, the key with its first letter capitalised.
    pub label: String,
    pub count: usize,
    pub average_charge: f64,
}

/// Summary statistics plus per-region averages.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedAggregate {
    pub count: usize,
    pub average_charge: f64,
    pub smoker_percentage: f64,
    pub regions: Vec<RegionAverage>,
}

/// One point of the BMI vs. charges chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub bmi: f64,
    pub charges: f64,
    pub smoker: bool,
}

/// Running sum of charges. Records without a charge do not contribute.
#[derive(Debug, Default)]
struct ChargeSum {
    total: f64,
    n: usize,
}

impl ChargeSum {
    fn add(&mut self, charge: Option<f64>) {
        if let Some(c) = charge {
            self.total += c;
            self.n += 1;
        }
    }

    fn mean(&self) -> f64 {
        if self.n == 0 {
            0.0
        } else {
            self.total / self.n as f64
        }
    }
}

/// Compute the dashboard statistics for a filtered view.
pub fn aggregate(records: &[&Record]) -> DerivedAggregate {
    let count = records.len();
    if count == 0 {
        return DerivedAggregate::default();
    }

    let mut charges = ChargeSum::default();
    let mut smokers = 0usize;
    for r in records {
        charges.add(r.charges);
        if r.is_smoker() {
            smokers += 1;
        }
    }

    DerivedAggregate {
        count,
        average_charge: charges.mean(),
        smoker_percentage: smokers as f64 / count as f64 * 100.0,
        regions: region_averages(records),
    }
}

/// Group by raw region value in first-appearance order.
pub fn region_averages(records: &[&Record]) -> Vec<RegionAverage> {
    let mut groups: Vec<(Option<&str>, usize, ChargeSum)> = Vec::new();

    for r in records {
        let key = r.region.as_deref();
        let idx = match groups.iter().position(|(k, _, _)| *k == key) {
            Some(idx) => idx,
            None => {
                groups.push((key, 0, ChargeSum::default()));
                groups.len() - 1
            }
        };
        let (_, n, sum) = &mut groups[idx];
        *n += 1;
        sum.add(r.charges);
    }

    groups
        .into_iter()
        .map(|(key, count, sum)| RegionAverage {
            region: key.map(str::to_string),
            label: key
                .map(capitalize)
                .unwrap_or_else(|| UNKNOWN_REGION_LABEL.to_string()),
            count,
            average_charge: sum.mean(),
        })
        .collect()
}

/// Points for the scatter chart. Records lacking bmi or charges are skipped.
pub fn scatter_points(records: &[&Record]) -> Vec<ScatterPoint> {
    records
        .iter()
        .filter_map(|r| {
            Some(ScatterPoint {
                bmi: r.bmi?,
                charges: r.charges?,
                smoker: r.is_smoker(),
            })
        })
        .collect()
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
