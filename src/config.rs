use eframe::egui::{self, Color32};

// ---------------------------------------------------------------------------
// Plot configuration
// ---------------------------------------------------------------------------

/// Window and chart styling.
///
/// Construct with [`PlotConfig::default`] and chain builder methods as needed.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    pub x_label: String,
    pub y_label: String,
    pub show_grid: bool,
    pub marker_radius: f32,
    pub line_width: f32,
    pub data_color: Color32,
    pub fit_color: Color32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: "Linear regression".to_string(),
            inner_size: [900.0, 600.0],
            min_inner_size: [400.0, 300.0],
            x_label: "km".to_string(),
            y_label: "price".to_string(),
            show_grid: true,
            marker_radius: 3.0,
            line_width: 2.0,
            // matplotlib's default first-series blue
            data_color: Color32::from_rgb(31, 119, 180),
            fit_color: Color32::RED,
        }
    }
}

impl PlotConfig {
    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Native window options derived from this configuration.
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.title.clone())
                .with_inner_size(self.inner_size)
                .with_min_inner_size(self.min_inner_size),
            ..Default::default()
        }
    }
}
