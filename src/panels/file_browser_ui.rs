use std::path::{Path, PathBuf};

use egui::Ui;
use egui_phosphor::regular::{FOLDER_OPEN, WARNING};

use super::panel_trait::Panel;
use crate::app::{AppState, BrowserView, EMPTY_FOLDER_NOTICE};
use crate::events::{AppCommand, CommandQueue};

/// Data folder chooser and the list of CSV files in it.
#[derive(Debug, Default)]
pub struct FileBrowserPanel {
    selected: Option<String>,
    folder: Option<PathBuf>,
}

impl FileBrowserPanel {
    pub const SELECT_FOLDER_LABEL: &'static str = "Select Folder";

    /// Name of the highlighted file in the current folder, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn select(&mut self, name: impl Into<String>) {
        self.selected = Some(name.into());
    }

    /// Track the listed folder; a different folder drops the highlight.
    pub fn follow_folder(&mut self, folder: &Path) {
        if self.folder.as_deref() != Some(folder) {
            self.folder = Some(folder.to_path_buf());
            self.selected = None;
        }
    }
}

impl Panel for FileBrowserPanel {
    fn title(&self) -> &'static str {
        "Select Folder"
    }

    fn icon(&self) -> &'static str {
        FOLDER_OPEN
    }

    fn render(&mut self, ui: &mut Ui, state: &AppState, commands: &mut CommandQueue) {
        if ui
            .button(format!("{FOLDER_OPEN} {}", Self::SELECT_FOLDER_LABEL))
            .on_hover_text("Choose a folder containing temperature CSV files")
            .clicked()
        {
            commands.push(AppCommand::BrowseDataFolder);
        }
        ui.add_space(4.0);

        match &state.browser {
            BrowserView::NoFolder => {
                ui.weak("No folder selected");
            }
            BrowserView::Unreadable { folder, message } => {
                ui.label(folder.display().to_string());
                ui.colored_label(ui.visuals().warn_fg_color, format!("{WARNING} {message}"));
            }
            BrowserView::Listing(listing) => {
                self.follow_folder(&listing.folder);
                ui.add(egui::Label::new(listing.folder.display().to_string()).truncate());
                ui.separator();
                if listing.is_empty() {
                    // The notice is not a file; clicking it does nothing.
                    ui.weak(EMPTY_FOLDER_NOTICE);
                    return;
                }
                egui::ScrollArea::vertical()
                    .id_salt("csv_file_list")
                    .show(ui, |ui| {
                        for name in &listing.files {
                            let is_selected = self.selected.as_deref() == Some(name.as_str());
                            if ui.selectable_label(is_selected, name).clicked() {
                                self.select(name.as_str());
                                commands.push(AppCommand::PlotFile(name.clone()));
                            }
                        }
                    });
            }
        }
    }
}
