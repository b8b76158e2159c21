use std::collections::BTreeSet;

use super::filter::{Choice, Dimension};
use super::model::Record;

// ---------------------------------------------------------------------------
// Selectable values per dimension
// ---------------------------------------------------------------------------

/// Choices offered by each filter widget, `All` first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub region: Vec<Choice>,
    pub smoker: Vec<Choice>,
    pub sex: Vec<Choice>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            region: vec![Choice::All],
            smoker: vec![Choice::All],
            sex: vec![Choice::All],
        }
    }
}

impl FilterOptions {
    pub fn get(&self, dim: Dimension) -> &[Choice] {
        match dim {
            Dimension::Region => &self.region,
            Dimension::Smoker => &self.smoker,
            Dimension::Sex => &self.sex,
        }
    }
}

/// Derive the options from the full, unfiltered record set.
pub fn derive_options(records: &[Record]) -> FilterOptions {
    FilterOptions {
        region: distinct_choices(records, Dimension::Region),
        smoker: distinct_choices(records, Dimension::Smoker),
        sex: distinct_choices(records, Dimension::Sex),
    }
}

/// `All` followed by the sorted, de-duplicated non-empty values of `dim`.
fn distinct_choices(records: &[Record], dim: Dimension) -> Vec<Choice> {
    let values: BTreeSet<&str> = records
        .iter()
        .filter_map(|r| dim.value(r))
        .filter(|v| !v.is_empty())
        .collect();

    std::iter::once(Choice::All)
        .chain(values.into_iter().map(|v| Choice::Value(v.to_string())))
        .collect()
}
