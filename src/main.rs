use anyhow::Context;
use clap::Parser;
use eframe::egui;
use serde::Serialize;

use insurance_dashboard::app::DashboardApp;
use insurance_dashboard::config::Cli;
use insurance_dashboard::data::aggregate::{aggregate, DerivedAggregate};
use insurance_dashboard::data::filter::{apply_filters, FilterSelection};
use insurance_dashboard::data::loader::load_file;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.summary {
        return print_summary(&cli);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let data = cli.data.clone();
    let filters = cli.selection();
    eframe::run_native(
        "Insurance Charges Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, data, filters)))),
    )
    .map_err(|e| anyhow::anyhow!("running the UI: {e}"))
}

#[derive(Serialize)]
struct SummaryReport {
    filters: FilterSelection,
    #[serde(flatten)]
    aggregate: DerivedAggregate,
}

/// Headless mode: load, filter and print the aggregate as JSON.
fn print_summary(cli: &Cli) -> anyhow::Result<()> {
    let dataset = load_file(&cli.data)?;
    let filters = cli.selection();
    let view = apply_filters(&dataset.records, &filters);
    let report = SummaryReport {
        aggregate: aggregate(&view),
        filters,
    };

    let json = serde_json::to_string_pretty(&report).context("serializing summary")?;
    println!("{json}");
    Ok(())
}
