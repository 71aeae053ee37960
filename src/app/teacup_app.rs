//! Native window wrapper.
//!
//! [`TeacupApp`] owns the [`AppState`] and the three panels and implements
//! [`eframe::App`]. Each frame it draws the panels, which only queue
//! [`AppCommand`](crate::events::AppCommand)s, and then applies the queue.

use eframe::egui;

use crate::config::TeacupConfig;
use crate::events::CommandQueue;
use crate::panels::{FileBrowserPanel, LoggerPanel, Panel, PlotPanel};

use super::picker::{FolderPicker, RfdFolderPicker};
use super::state::AppState;

pub struct TeacupApp {
    pub state: AppState,
    picker: Box<dyn FolderPicker>,
    commands: CommandQueue,
    browser_panel: FileBrowserPanel,
    plot_panel: PlotPanel,
    logger_panel: LoggerPanel,
}

impl TeacupApp {
    /// Create the app with the native folder dialog.
    pub fn new(cfg: &TeacupConfig) -> Self {
        Self::with_picker(cfg, Box::new(RfdFolderPicker))
    }

    pub fn with_picker(cfg: &TeacupConfig, picker: Box<dyn FolderPicker>) -> Self {
        Self {
            state: AppState::new(cfg),
            picker,
            commands: CommandQueue::default(),
            browser_panel: FileBrowserPanel::default(),
            plot_panel: PlotPanel::new(cfg.plot.clone()),
            logger_panel: LoggerPanel::default(),
        }
    }

    /// Apply everything the panels queued this frame.
    fn apply_commands(&mut self) {
        if self.commands.is_empty() {
            return;
        }
        let now = chrono::Local::now().naive_local();
        for cmd in self.commands.drain() {
            log::debug!("dispatch {cmd:?}");
            self.state.dispatch(cmd, self.picker.as_ref(), now);
        }
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        match &self.state.status {
            Some(status) if status.is_error => {
                ui.colored_label(ui.visuals().error_fg_color, &status.message);
            }
            Some(status) => {
                ui.label(&status.message);
            }
            None => {
                ui.weak("Ready");
            }
        }
    }
}

impl eframe::App for TeacupApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("teacup_status").show(ctx, |ui| {
            self.render_status(ui);
        });

        egui::SidePanel::left("teacup_file_browser")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                self.browser_panel
                    .show(ui, &self.state, &mut self.commands);
            });

        egui::SidePanel::right("teacup_data_logger")
            .resizable(true)
            .min_width(320.0)
            .show(ctx, |ui| {
                self.logger_panel
                    .show(ui, &self.state, &mut self.commands);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.plot_panel.show(ui, &self.state, &mut self.commands);
        });

        self.apply_commands();
    }
}
