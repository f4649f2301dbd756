use eframe::egui::Ui;
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::config::PlotConfig;
use crate::state::PlotState;

// ---------------------------------------------------------------------------
// Regression plot (central panel)
// ---------------------------------------------------------------------------

/// Draw the observed points and the fitted line on shared axes.
pub fn regression_plot(ui: &mut Ui, state: &PlotState, config: &PlotConfig) {
    Plot::new("regression_plot")
        .legend(Legend::default())
        .x_axis_label(config.x_label.as_str())
        .y_axis_label(config.y_label.as_str())
        .show_grid(config.show_grid)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let data: PlotPoints = state.scatter.iter().copied().collect();
            plot_ui.points(
                Points::new(data)
                    .name("Data")
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(config.marker_radius)
                    .color(config.data_color),
            );

            let fitted: PlotPoints = state.fitted.iter().copied().collect();
            plot_ui.line(
                Line::new(fitted)
                    .name("Linear regression")
                    .color(config.fit_color)
                    .width(config.line_width),
            );
        });
}
