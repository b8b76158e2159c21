//! Medical insurance charges dashboard: CSV loading, filtering and
//! aggregation, plus the egui front end that renders them.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;
