use std::path::PathBuf;

use eframe::egui::{self, ScrollArea, Ui};

use crate::data::filter::FilterSelection;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
}

impl DashboardApp {
    /// Create the app and kick off loading of the startup file.
    pub fn new(cc: &eframe::CreationContext<'_>, data: PathBuf, filters: FilterSelection) -> Self {
        let mut state = AppState::default();
        state.filters = filters;
        panels::start_load(&cc.egui_ctx, &mut state, data);
        Self { state }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_load();

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: cards and charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            dashboard(ui, &self.state);
        });
    }
}

fn dashboard(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            if state.loading {
                ui.spinner();
            } else {
                ui.heading("Open a CSV file to view insurance data  (File → Open…)");
            }
        });
        return;
    }

    if state.dataset.as_ref().is_some_and(|ds| ds.is_empty()) {
        ui.label("The dataset contains no records.");
        ui.add_space(8.0);
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            panels::stat_cards(ui, state);
            ui.add_space(12.0);

            ui.heading("BMI vs. charges");
            plot::scatter_plot(ui, state);
            ui.add_space(12.0);

            ui.heading("Average charges by region");
            plot::region_bar_chart(ui, state);
        });
}
