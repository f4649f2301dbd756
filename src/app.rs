use eframe::egui;

use crate::config::PlotConfig;
use crate::error::PlotError;
use crate::state::PlotState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RegressionPlotApp {
    pub state: PlotState,
    pub config: PlotConfig,
}

impl RegressionPlotApp {
    pub fn new(state: PlotState, config: PlotConfig) -> Self {
        Self { state, config }
    }

    /// Open the chart window and block until the user closes it.
    pub fn run(self) -> Result<(), PlotError> {
        let options = self.config.native_options();
        let title = self.config.title.clone();

        eframe::run_native(&title, options, Box::new(move |_cc| Ok(Box::new(self))))?;
        Ok(())
    }
}

impl eframe::App for RegressionPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::regression_plot(ui, &self.state, &self.config);
        });
    }
}
