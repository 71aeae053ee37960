//! Configuration for the visualizer window.

use std::path::PathBuf;

use crate::data::plot::PlotMode;

// ─────────────────────────────────────────────────────────────────────────────
// Plot labels
// ─────────────────────────────────────────────────────────────────────────────

/// Texts drawn around the temperature plot.
#[derive(Clone, Debug)]
pub struct PlotLabels {
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
}

impl Default for PlotLabels {
    fn default() -> Self {
        Self {
            title: "Temperature Decay Curve".to_string(),
            x_axis: "Time (minutes)".to_string(),
            y_axis: "Temperature (°C)".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TeacupConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// | Field              | Purpose |
/// |--------------------|---------|
/// | `title`            | Native window title |
/// | `plot`             | Plot heading and axis labels |
/// | `plot_mode`        | Initial single/combine mode when no settings are stored |
/// | `settings_path`    | Where folders and plot mode are remembered; `None` disables it |
/// | `native_options`   | eframe window options |
pub struct TeacupConfig {
    /// Native window title.
    pub title: String,
    /// Plot heading and axis labels.
    pub plot: PlotLabels,
    /// Plot mode used when the settings file does not provide one.
    pub plot_mode: PlotMode,
    /// JSON file for remembered settings.
    pub settings_path: Option<PathBuf>,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for TeacupConfig {
    fn default() -> Self {
        Self {
            title: "Teacup Temperature Data Visualizer".to_string(),
            plot: PlotLabels::default(),
            plot_mode: PlotMode::Single,
            settings_path: crate::persistence::default_settings_path(),
            native_options: None,
        }
    }
}
