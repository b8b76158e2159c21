use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, Points};

use super::format_currency;
use crate::color::{NON_SMOKER_COLOR, SMOKER_COLOR};
use crate::data::aggregate::ScatterPoint;
use crate::state::AppState;

const CHART_HEIGHT: f32 = 300.0;

// ---------------------------------------------------------------------------
// BMI vs. charges (scatter)
// ---------------------------------------------------------------------------

/// Render the BMI vs. charges scatter chart, smokers and non-smokers as
/// separate series.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) {
    let (smokers, others): (Vec<_>, Vec<_>) = state.scatter.iter().partition(|p| p.smoker);
    let to_points = |pts: Vec<&ScatterPoint>| -> PlotPoints {
        pts.iter().map(|p| [p.bmi, p.charges]).collect()
    };

    Plot::new("bmi_vs_charges")
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .x_axis_label("BMI")
        .y_axis_label("Charges")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(to_points(others))
                    .name("Non-smoker")
                    .color(NON_SMOKER_COLOR)
                    .radius(2.5),
            );
            plot_ui.points(
                Points::new(to_points(smokers))
                    .name("Smoker")
                    .color(SMOKER_COLOR)
                    .radius(2.5),
            );
        });
}

// ---------------------------------------------------------------------------
// Average charges by region (bars)
// ---------------------------------------------------------------------------

/// Render one bar per region present in the filtered view.
pub fn region_bar_chart(ui: &mut Ui, state: &AppState) {
    let regions = &state.aggregate.regions;
    let labels: Vec<String> = regions.iter().map(|r| r.label.clone()).collect();

    let bars: Vec<Bar> = regions
        .iter()
        .enumerate()
        .map(|(i, r)| {
            Bar::new(i as f64, r.average_charge)
                .name(format!("{}: {}", r.label, format_currency(r.average_charge)))
                .fill(state.region_colors.color_for(r.region.as_deref()))
                .width(0.6)
        })
        .collect();

    Plot::new("charges_by_region")
        .height(CHART_HEIGHT)
        .y_axis_label("Average charge")
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Average charge"));
        });
}
