/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///    insurance.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read file → text (background thread)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  parser   │  text → Dataset (Vec<Record>, schema-typed)
///   └──────────┘
///        │
///        ├──────────────────────┐
///        ▼                      ▼
///   ┌──────────┐          ┌──────────┐
///   │  filter   │          │ options  │  distinct values per dimension
///   └──────────┘          └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate │  count / mean charge / smoker % / per-region means
///   └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod options;
pub mod parser;
