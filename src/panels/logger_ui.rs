use egui::Ui;
use egui_phosphor::regular::{FLOPPY_DISK, FOLDER_OPEN, PLAY, THERMOMETER};
use egui_table::{HeaderRow, Table, TableDelegate};

use super::panel_trait::Panel;
use crate::app::AppState;
use crate::data::reading::Reading;
use crate::data::session::{SessionCommand, SessionState};
use crate::events::{AppCommand, CommandQueue};

/// Manual temperature entry: choose a folder, name the file, type readings, save.
#[derive(Debug, Default)]
pub struct LoggerPanel {
    file_name: String,
    temperature: String,
    focus_entry: bool,
}

impl LoggerPanel {
    pub const FILE_NAME_PROMPT: &'static str = "Enter file name. Leave Empty to use default";
    pub const TEMPERATURE_PROMPT: &'static str = "Enter the temperature (in deg. C)";
    pub const START_LABEL: &'static str = "Start Logging";
    pub const SAVE_LABEL: &'static str = "Save Data";

    fn render_name_entry(&mut self, ui: &mut Ui, commands: &mut CommandQueue) {
        ui.label(Self::FILE_NAME_PROMPT);
        let resp = ui.text_edit_singleline(&mut self.file_name);
        let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button(format!("{PLAY} {}", Self::START_LABEL)).clicked() || submitted {
            commands.push(AppCommand::Session(SessionCommand::Start {
                name: std::mem::take(&mut self.file_name),
            }));
            self.focus_entry = true;
        }
    }

    fn render_logging(&mut self, ui: &mut Ui, readings: &[Reading], commands: &mut CommandQueue) {
        ui.label(Self::TEMPERATURE_PROMPT);
        let resp = ui.text_edit_singleline(&mut self.temperature);
        if self.focus_entry {
            resp.request_focus();
            self.focus_entry = false;
        }
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            // Cleared whether or not the session accepts the value.
            commands.push(AppCommand::Session(SessionCommand::EnterTemperature(
                std::mem::take(&mut self.temperature),
            )));
            resp.request_focus();
        }
        ui.add_space(6.0);

        readings_table(ui, readings);

        ui.add_space(6.0);
        if ui
            .button(format!("{FLOPPY_DISK} {}", Self::SAVE_LABEL))
            .on_hover_text("Write the readings to the CSV file and finish this log")
            .clicked()
        {
            commands.push(AppCommand::Session(SessionCommand::Save));
        }
    }
}

impl Panel for LoggerPanel {
    fn title(&self) -> &'static str {
        "Data Logger"
    }

    fn icon(&self) -> &'static str {
        THERMOMETER
    }

    fn render(&mut self, ui: &mut Ui, state: &AppState, commands: &mut CommandQueue) {
        if ui
            .add_enabled(
                !state.session.is_logging(),
                egui::Button::new(format!("{FOLDER_OPEN} Select Folder")),
            )
            .on_hover_text("Choose the folder the new log is saved in")
            .clicked()
        {
            commands.push(AppCommand::ChooseLogFolder);
        }
        if let Some(folder) = state.session.folder() {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add(egui::Label::new(folder.display().to_string()).truncate());
            });
        }
        ui.add_space(8.0);

        match state.session.state() {
            SessionState::Idle => {
                ui.weak("Select a folder to start a new temperature log.");
            }
            SessionState::FolderSelected { .. } => self.render_name_entry(ui, commands),
            SessionState::Logging { path, readings } => {
                if let Some(name) = path.file_name() {
                    ui.label(format!("Logging to {}", name.to_string_lossy()));
                }
                self.render_logging(ui, readings, commands);
            }
        }
    }
}

struct ReadingsDelegate<'a> {
    readings: &'a [Reading],
}

impl TableDelegate for ReadingsDelegate<'_> {
    fn header_cell_ui(&mut self, ui: &mut egui::Ui, cell: &egui_table::HeaderCellInfo) {
        let text = match cell.col_range.start {
            0 => "Time",
            1 => "Temperature",
            _ => "",
        };
        ui.add_space(4.0);
        ui.strong(text);
    }

    fn cell_ui(&mut self, ui: &mut egui::Ui, cell: &egui_table::CellInfo) {
        let Some(reading) = self.readings.get(cell.row_nr as usize) else {
            return;
        };
        ui.add_space(4.0);
        match cell.col_nr {
            0 => {
                ui.label(&reading.time);
            }
            1 => {
                ui.label(&reading.temperature);
            }
            _ => {}
        }
    }
}

fn readings_table(ui: &mut Ui, readings: &[Reading]) {
    let avail_w = ui.available_width();
    let height = (ui.available_height() - 40.0).clamp(120.0, 360.0);
    let (rect, _resp) = ui.allocate_exact_size(egui::vec2(avail_w, height), egui::Sense::hover());
    let ui_builder = egui::UiBuilder::new()
        .max_rect(rect)
        .layout(egui::Layout::left_to_right(egui::Align::Min));
    let mut table_ui = ui.new_child(ui_builder);

    let col_w = (avail_w / 2.0).max(80.0);
    let mut delegate = ReadingsDelegate { readings };
    Table::new()
        .id_salt("readings_table")
        .num_rows(readings.len() as u64)
        .columns(vec![egui_table::Column::new(col_w), egui_table::Column::new(col_w)])
        .headers(vec![HeaderRow::new(24.0)])
        .show(&mut table_ui, &mut delegate);
}
