use egui::Ui;
use egui_phosphor::regular::{BROOM, CHART_LINE};
use egui_plot::{Legend, Line, Plot, Points};

use super::panel_trait::Panel;
use crate::app::AppState;
use crate::config::PlotLabels;
use crate::data::plot::PlotMode;
use crate::events::{AppCommand, CommandQueue};

/// Plot style selection and the time/temperature plot.
pub struct PlotPanel {
    labels: PlotLabels,
    /// Last [`PlotModel`](crate::data::plot::PlotModel) revision drawn; the view is refit when it changes.
    drawn_revision: Option<u64>,
}

impl PlotPanel {
    pub const CLEAR_LABEL: &'static str = "Clear Plot";

    pub fn new(labels: PlotLabels) -> Self {
        Self {
            labels,
            drawn_revision: None,
        }
    }

    fn render_controls(&mut self, ui: &mut Ui, state: &AppState, commands: &mut CommandQueue) {
        ui.horizontal(|ui| {
            ui.label("Select Plot Style:");
            let mut mode = state.plot.mode();
            for option in [PlotMode::Single, PlotMode::Combine] {
                if ui.radio_value(&mut mode, option, option.label()).changed() {
                    commands.push(AppCommand::SetPlotMode(option));
                }
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(format!("{BROOM} {}", Self::CLEAR_LABEL))
                    .on_hover_text("Remove all curves from the plot")
                    .clicked()
                {
                    commands.push(AppCommand::ClearPlot);
                }
            });
        });
    }

    fn render_plot(&mut self, ui: &mut Ui, state: &AppState) {
        ui.vertical_centered(|ui| {
            ui.heading(&self.labels.title);
        });

        let mut plot = Plot::new("temperature_plot")
            .legend(Legend::default())
            .x_axis_label(self.labels.x_axis.clone())
            .y_axis_label(self.labels.y_axis.clone());
        let revision = state.plot.revision();
        if self.drawn_revision != Some(revision) {
            plot = plot.reset();
            self.drawn_revision = Some(revision);
        }

        plot.show(ui, |plot_ui| {
            for curve in state.plot.curves() {
                let look = &curve.look;
                let line = Line::new(curve.label.clone(), curve.points.clone())
                    .color(look.color)
                    .width(look.width.max(0.1))
                    .style(look.style);
                plot_ui.line(line);
                if look.show_points && !curve.points.is_empty() {
                    let points = Points::new(curve.label.clone(), curve.points.clone())
                        .radius(look.point_size.max(0.5))
                        .shape(look.marker)
                        .color(look.color);
                    plot_ui.points(points);
                }
            }
        });
    }
}

impl Panel for PlotPanel {
    fn title(&self) -> &'static str {
        "Data Visualizer"
    }

    fn icon(&self) -> &'static str {
        CHART_LINE
    }

    fn render(&mut self, ui: &mut Ui, state: &AppState, commands: &mut CommandQueue) {
        self.render_controls(ui, state, commands);
        ui.separator();
        self.render_plot(ui, state);
    }
}
