use csv::{ReaderBuilder, StringRecord, Trim};

use super::model::{
    column_type, parse_finite, CellValue, ColumnType, Dataset, Record, REQUIRED_COLUMNS,
};
use crate::error::ParseError;

// ---------------------------------------------------------------------------
// CSV text → Dataset
// ---------------------------------------------------------------------------

/// Parse CSV text (header row + comma-separated rows) into a [`Dataset`].
///
/// Fields are split on commas only; `"` is ordinary text, not a quote.
///
/// Parsing is permissive:
/// * blank and whitespace-only lines are skipped
/// * short rows leave their trailing columns absent, long rows are truncated
/// * schema numeric cells that are not finite numbers become `None`
///
/// Only a reader-level failure is an error.
pub fn parse_csv(text: &str) -> Result<Dataset, ParseError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(ParseError::MissingHeader);
    }

    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            log::warn!("CSV header is missing required column '{required}'");
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = result?;
        if is_blank(&row) {
            continue;
        }
        records.push(build_record(&headers, &row, row_no));
    }

    Ok(Dataset { records, headers })
}

// A line of only commas is not blank: it is a record with every field absent.
fn is_blank(row: &StringRecord) -> bool {
    row.len() <= 1 && row.iter().all(|field| field.is_empty())
}

fn build_record(headers: &[String], row: &StringRecord, row_no: usize) -> Record {
    let mut record = Record::default();

    for (col, value) in headers.iter().zip(row.iter()) {
        match column_type(col) {
            Some(ColumnType::Number) => {
                let parsed = number_cell(value, col, row_no);
                match col.as_str() {
                    "age" => record.age = parsed,
                    "bmi" => record.bmi = parsed,
                    "children" => record.children = parsed,
                    "charges" => record.charges = parsed,
                    _ => {}
                }
            }
            Some(ColumnType::Text) => {
                let text = (!value.is_empty()).then(|| value.to_string());
                match col.as_str() {
                    "sex" => record.sex = text,
                    "smoker" => record.smoker = text,
                    "region" => record.region = text,
                    _ => {}
                }
            }
            None => {
                if let Some(cell) = CellValue::sniff(value) {
                    record.extra.insert(col.clone(), cell);
                }
            }
        }
    }

    record
}

fn number_cell(value: &str, col: &str, row_no: usize) -> Option<f64> {
    if value.is_empty() {
        return None;
    }
    let parsed = parse_finite(value);
    if parsed.is_none() {
        log::debug!("row {row_no}: '{value}' in column '{col}' is not a finite number");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "age,sex,bmi,children,smoker,region,charges\n\
        19,female,27.9,0,yes,southwest,16884.92\n\
        18,male,33.77,1,no,southeast,1725.55\n\
        28,male,33.0,3,no,southeast,4449.46";

    #[test]
    fn parses_typed_records() {
        let ds = parse_csv(SAMPLE).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(
            ds.headers,
            vec!["age", "sex", "bmi", "children", "smoker", "region", "charges"]
        );

        let first = &ds.records[0];
        assert_eq!(first.age, Some(19.0));
        assert_eq!(first.sex.as_deref(), Some("female"));
        assert_eq!(first.bmi, Some(27.9));
        assert_eq!(first.children, Some(0.0));
        assert_eq!(first.smoker.as_deref(), Some("yes"));
        assert_eq!(first.region.as_deref(), Some("southwest"));
        assert_eq!(first.charges, Some(16884.92));
        assert!(first.extra.is_empty());
    }

    #[test]
    fn parsing_is_idempotent() {
        assert_eq!(parse_csv(SAMPLE).unwrap(), parse_csv(SAMPLE).unwrap());
    }

    #[test]
    fn trims_headers_and_values() {
        let ds = parse_csv(" age , region ,charges\n 40 , northwest ,  100.5 \n").unwrap();
        assert_eq!(ds.headers, vec!["age", "region", "charges"]);
        assert_eq!(ds.records[0].age, Some(40.0));
        assert_eq!(ds.records[0].region.as_deref(), Some("northwest"));
        assert_eq!(ds.records[0].charges, Some(100.5));
    }

    #[test]
    fn skips_blank_lines() {
        let text = "region,charges\n\nnortheast,1\n   \n\nsouthwest,2\n\n";
        let ds = parse_csv(text).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[1].region.as_deref(), Some("southwest"));
    }

    #[test]
    fn comma_only_rows_are_records() {
        let ds = parse_csv("sex,smoker,region,charges\n,,,\nmale,no,southeast,10\n").unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0], Record::default());
        assert_eq!(ds.records[1].sex.as_deref(), Some("male"));
    }

    #[test]
    fn double_quotes_are_plain_text() {
        let text = "sex,smoker,region,charges\n\
            \"male,no,southeast,10\n\
            female,yes,southwest,20\n\
            male,no,northwest,30\n";
        let ds = parse_csv(text).unwrap();
        assert_eq!(ds.len(), 3);

        let first = &ds.records[0];
        assert_eq!(first.sex.as_deref(), Some("\"male"));
        assert_eq!(first.region.as_deref(), Some("southeast"));
        assert_eq!(first.charges, Some(10.0));
        assert_eq!(ds.records[2].region.as_deref(), Some("northwest"));
    }

    #[test]
    fn short_rows_leave_trailing_columns_absent() {
        let ds = parse_csv("age,sex,region,charges\n30,male\n").unwrap();
        let rec = &ds.records[0];
        assert_eq!(rec.age, Some(30.0));
        assert_eq!(rec.sex.as_deref(), Some("male"));
        assert_eq!(rec.region, None);
        assert_eq!(rec.charges, None);
    }

    #[test]
    fn long_rows_ignore_extra_fields() {
        let ds = parse_csv("region,charges\nnortheast,10,surplus\n").unwrap();
        assert_eq!(ds.records[0].region.as_deref(), Some("northeast"));
        assert_eq!(ds.records[0].charges, Some(10.0));
        assert!(ds.records[0].extra.is_empty());
    }

    #[test]
    fn bad_numbers_become_absent() {
        let ds = parse_csv("age,bmi,charges\nold,Infinity,NaN\n").unwrap();
        let rec = &ds.records[0];
        assert_eq!(rec.age, None);
        assert_eq!(rec.bmi, None);
        assert_eq!(rec.charges, None);
    }

    #[test]
    fn unknown_columns_pass_through() {
        let ds = parse_csv("region,plan,deductible\nnortheast,gold,500\n").unwrap();
        let extra = &ds.records[0].extra;
        assert_eq!(extra.get("plan"), Some(&CellValue::Text("gold".to_string())));
        assert_eq!(extra.get("deductible"), Some(&CellValue::Number(500.0)));
    }

    #[test]
    fn header_only_input_is_empty_dataset() {
        let ds = parse_csv("age,sex,bmi,children,smoker,region,charges\n").unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.headers.len(), 7);
    }

    #[test]
    fn empty_input_has_no_header() {
        assert!(matches!(parse_csv(""), Err(ParseError::MissingHeader)));
    }
}
