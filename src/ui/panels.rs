use eframe::egui::{self, Color32, RichText, Ui};

use super::{choice_label, format_currency, format_percent};
use crate::data::filter::Dimension;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    for dim in Dimension::ALL {
        ui.strong(dim.label());

        let current = state.filters.get(dim).clone();
        let mut picked = None;
        egui::ComboBox::from_id_salt(dim.column())
            .selected_text(choice_label(&current))
            .width(ui.available_width())
            .show_ui(ui, |ui: &mut Ui| {
                for choice in state.options.get(dim) {
                    if ui
                        .selectable_label(*choice == current, choice_label(choice))
                        .clicked()
                    {
                        picked = Some(choice.clone());
                    }
                }
            });
        if let Some(choice) = picked {
            state.set_choice(dim, choice);
        }
        ui.add_space(6.0);
    }

    ui.separator();
    if ui
        .add_enabled(
            !state.filters.is_unconstrained(),
            egui::Button::new("Reset filters"),
        )
        .clicked()
    {
        state.reset_filters();
    }
}

// ---------------------------------------------------------------------------
// Statistic cards
// ---------------------------------------------------------------------------

/// Render the three summary cards above the charts.
pub fn stat_cards(ui: &mut Ui, state: &AppState) {
    let agg = &state.aggregate;
    let cards = [
        ("Total records", agg.count.to_string()),
        ("Average charge", format_currency(agg.average_charge)),
        ("Smokers", format_percent(agg.smoker_percentage)),
    ];

    ui.columns(cards.len(), |cols: &mut [Ui]| {
        for (col, (title, value)) in cols.iter_mut().zip(cards.iter()) {
            col.group(|ui: &mut Ui| {
                ui.set_min_width(ui.available_width());
                ui.label(RichText::new(*title).weak());
                ui.heading(RichText::new(value).strong());
            });
        }
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(ui.ctx(), state);
                ui.close_menu();
            }
            let reload_path = state.data_path.clone();
            if ui
                .add_enabled(
                    reload_path.is_some() && !state.loading,
                    egui::Button::new("Reload"),
                )
                .clicked()
            {
                if let Some(path) = reload_path {
                    start_load(ui.ctx(), state, path);
                }
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.separator();

        if state.loading {
            ui.spinner();
            ui.label("Loading…");
        } else if state.dataset.is_some() {
            ui.label(format!(
                "{} records loaded, {} visible",
                state.total_records(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Start a background load that repaints the UI when it finishes.
pub fn start_load(ctx: &egui::Context, state: &mut AppState, path: std::path::PathBuf) {
    let ctx = ctx.clone();
    state.start_load(path, move || ctx.request_repaint());
}

pub fn open_file_dialog(ctx: &egui::Context, state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open insurance data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        start_load(ctx, state, path);
    }
}
