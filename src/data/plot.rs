//! Curves currently on the temperature plot.

use serde::{Deserialize, Serialize};

use crate::data::curve_look::CurveLook;
use crate::data::reading::Series;

/// Whether a newly plotted file replaces the plot or is drawn on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlotMode {
    #[default]
    Single,
    Combine,
}

impl PlotMode {
    pub fn label(self) -> &'static str {
        match self {
            PlotMode::Single => "Single Plot",
            PlotMode::Combine => "Combine Plot",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub label: String,
    pub points: Vec<[f64; 2]>,
    pub look: CurveLook,
}

/// The plot contents, owned by the app state and drawn by the plot panel.
#[derive(Debug, Clone, Default)]
pub struct PlotModel {
    mode: PlotMode,
    curves: Vec<Curve>,
    /// Bumped on every change so the renderer knows to refit the view.
    revision: u64,
    colors_used: usize,
}

impl PlotModel {
    pub fn new(mode: PlotMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn mode(&self) -> PlotMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: PlotMode) {
        if self.mode != mode {
            log::debug!("plot mode -> {}", mode.label());
            self.mode = mode;
        }
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Add `series` to the plot. In [`PlotMode::Single`] the existing curves go first.
    pub fn show_series(&mut self, series: Series) {
        if self.mode == PlotMode::Single {
            self.clear();
        }
        let look = CurveLook::new(self.colors_used);
        self.colors_used += 1;
        self.curves.push(Curve {
            points: series.points(),
            label: series.label,
            look,
        });
        self.revision += 1;
    }

    pub fn clear(&mut self) {
        self.curves.clear();
        self.colors_used = 0;
        self.revision += 1;
    }
}
