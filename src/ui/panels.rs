use eframe::egui::{self, Ui};

use crate::state::PlotState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Point count and the model equation.
pub fn top_bar(ui: &mut Ui, state: &PlotState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(format!("{} points", state.len()));
        ui.separator();
        ui.monospace(state.model.to_string());
    });
}
