use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Column schema
// ---------------------------------------------------------------------------

/// Expected type of a known column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Number,
    Text,
}

/// Fixed schema of the insurance dataset: column name → expected type.
pub const SCHEMA: &[(&str, ColumnType)] = &[
    ("age", ColumnType::Number),
    ("sex", ColumnType::Text),
    ("bmi", ColumnType::Number),
    ("children", ColumnType::Number),
    ("smoker", ColumnType::Text),
    ("region", ColumnType::Text),
    ("charges", ColumnType::Number),
];

/// Columns the dashboard cannot do anything meaningful without.
pub const REQUIRED_COLUMNS: &[&str] = &["region", "smoker", "sex", "bmi", "charges"];

/// Look up the schema type of a column, `None` for columns outside the schema.
pub fn column_type(name: &str) -> Option<ColumnType> {
    SCHEMA
        .iter()
        .find(|(col, _)| *col == name)
        .map(|(_, ty)| *ty)
}

// ---------------------------------------------------------------------------
// CellValue – a cell in a column outside the schema
// ---------------------------------------------------------------------------

/// Value of a pass-through column, typed by sniffing the cell text.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Interpret trimmed cell text. Empty cells have no value.
    pub fn sniff(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }
        match parse_finite(s) {
            Some(v) => Some(CellValue::Number(v)),
            None => Some(CellValue::Text(s.to_string())),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Parse a numeric literal, rejecting `inf`, `NaN` and friends.
pub fn parse_finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

// ---------------------------------------------------------------------------
// Record – one row of the CSV
// ---------------------------------------------------------------------------

/// A single insurance record. Absent fields come from short rows, empty
/// cells, or numeric cells that did not parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub age: Option<f64>,
    pub sex: Option<String>,
    pub bmi: Option<f64>,
    pub children: Option<f64>,
    pub smoker: Option<String>,
    pub region: Option<String>,
    pub charges: Option<f64>,
    /// Columns outside the schema, keyed by header name.
    pub extra: BTreeMap<String, CellValue>,
}

impl Record {
    pub fn is_smoker(&self) -> bool {
        self.smoker.as_deref() == Some("yes")
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded file
// ---------------------------------------------------------------------------

/// All records of one loaded file, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub records: Vec<Record>,
    /// Trimmed header names in file order.
    pub headers: Vec<String>,
}

impl Dataset {
    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
