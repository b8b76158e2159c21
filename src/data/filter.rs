use std::fmt;

use serde::{Serialize, Serializer};

use super::model::Record;

// ---------------------------------------------------------------------------
// Filter dimensions and choices
// ---------------------------------------------------------------------------

/// A filterable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Region,
    Smoker,
    Sex,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Region, Dimension::Smoker, Dimension::Sex];

    /// CSV column backing this dimension.
    pub fn column(self) -> &'static str {
        match self {
            Dimension::Region => "region",
            Dimension::Smoker => "smoker",
            Dimension::Sex => "sex",
        }
    }

    /// Label used in the filter panel.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Region => "Region",
            Dimension::Smoker => "Smoker",
            Dimension::Sex => "Sex",
        }
    }

    /// The record's raw value for this dimension.
    pub fn value(self, record: &Record) -> Option<&str> {
        match self {
            Dimension::Region => record.region.as_deref(),
            Dimension::Smoker => record.smoker.as_deref(),
            Dimension::Sex => record.sex.as_deref(),
        }
    }
}

/// Selection for one dimension: unconstrained, or one exact value.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Choice {
    #[default]
    All,
    Value(String),
}

impl Choice {
    /// Sentinel text for [`Choice::All`].
    pub const ALL_TEXT: &'static str = "all";

    /// Build a choice from user text, mapping `"all"` to [`Choice::All`].
    pub fn parse(s: &str) -> Self {
        if s == Self::ALL_TEXT {
            Choice::All
        } else {
            Choice::Value(s.to_string())
        }
    }

    /// Whether a raw record value satisfies this choice.
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Choice::All => true,
            Choice::Value(wanted) => value == Some(wanted.as_str()),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => write!(f, "{}", Self::ALL_TEXT),
            Choice::Value(v) => write!(f, "{v}"),
        }
    }
}

impl Serialize for Choice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ---------------------------------------------------------------------------
// Filter selection
// ---------------------------------------------------------------------------

/// One choice per dimension. The default constrains nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    pub region: Choice,
    pub smoker: Choice,
    pub sex: Choice,
}

impl FilterSelection {
    pub fn get(&self, dim: Dimension) -> &Choice {
        match dim {
            Dimension::Region => &self.region,
            Dimension::Smoker => &self.smoker,
            Dimension::Sex => &self.sex,
        }
    }

    pub fn set(&mut self, dim: Dimension, choice: Choice) {
        match dim {
            Dimension::Region => self.region = choice,
            Dimension::Smoker => self.smoker = choice,
            Dimension::Sex => self.sex = choice,
        }
    }

    /// Whether every dimension is unconstrained.
    pub fn is_unconstrained(&self) -> bool {
        Dimension::ALL
            .iter()
            .all(|&dim| *self.get(dim) == Choice::All)
    }

    /// A record passes when every dimension's choice matches its value.
    pub fn accepts(&self, record: &Record) -> bool {
        Dimension::ALL
            .iter()
            .all(|&dim| self.get(dim).matches(dim.value(record)))
    }
}

/// Return the records passing `selection`, in their original order.
pub fn apply_filters<'a>(records: &'a [Record], selection: &FilterSelection) -> Vec<&'a Record> {
    records.iter().filter(|r| selection.accepts(r)).collect()
}
