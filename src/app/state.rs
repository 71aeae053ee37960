//! Toolkit-independent application state and command dispatch.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::config::TeacupConfig;
use crate::data::csv_io;
use crate::data::plot::PlotModel;
use crate::data::scanner::{self, FolderListing};
use crate::data::session::{LoggingSession, SessionCommand, SessionOutcome};
use crate::events::AppCommand;
use crate::persistence::Settings;

use super::picker::FolderPicker;

/// Shown in the file list when a folder holds no CSV files.
pub const EMPTY_FOLDER_NOTICE: &str = "CSV Files not found in the selected folder";

/// What the file browser currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BrowserView {
    #[default]
    NoFolder,
    Listing(FolderListing),
    Unreadable { folder: PathBuf, message: String },
}

impl BrowserView {
    pub fn listing(&self) -> Option<&FolderListing> {
        match self {
            BrowserView::Listing(l) => Some(l),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub is_error: bool,
}

impl Status {
    fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

/// Everything the window shows, with one owner.
#[derive(Debug)]
pub struct AppState {
    pub browser: BrowserView,
    pub plot: PlotModel,
    pub session: LoggingSession,
    pub status: Option<Status>,
    pub settings: Settings,
    settings_path: Option<PathBuf>,
}

impl AppState {
    /// Build the state from `cfg`, restoring remembered settings if any.
    pub fn new(cfg: &TeacupConfig) -> Self {
        let settings = cfg
            .settings_path
            .as_deref()
            .map(Settings::load_or_default)
            .unwrap_or_default();
        let mut state = Self::with_settings(settings, cfg.settings_path.clone(), cfg);
        if let Some(dir) = state.settings.last_data_folder.clone() {
            if dir.is_dir() {
                state.scan_data_folder(dir);
            }
        }
        state
    }

    pub fn with_settings(settings: Settings, settings_path: Option<PathBuf>, cfg: &TeacupConfig) -> Self {
        let mode = settings.plot_mode.unwrap_or(cfg.plot_mode);
        Self {
            browser: BrowserView::NoFolder,
            plot: PlotModel::new(mode),
            session: LoggingSession::new(),
            status: None,
            settings,
            settings_path,
        }
    }

    pub fn settings_path(&self) -> Option<&Path> {
        self.settings_path.as_deref()
    }

    /// Apply one user action. Failures end up in [`AppState::status`]; nothing panics.
    pub fn dispatch(&mut self, cmd: AppCommand, picker: &dyn FolderPicker, now: NaiveDateTime) {
        match cmd {
            AppCommand::BrowseDataFolder => {
                let start = self.settings.last_data_folder.clone();
                if let Some(dir) = picker.pick_folder("Select data folder", start.as_deref()) {
                    self.scan_data_folder(dir);
                }
            }
            AppCommand::ScanDataFolder(dir) => self.scan_data_folder(dir),
            AppCommand::PlotFile(name) => self.plot_file(&name),
            AppCommand::SetPlotMode(mode) => {
                self.plot.set_mode(mode);
                self.settings.plot_mode = Some(mode);
                self.persist();
            }
            AppCommand::ClearPlot => self.plot.clear(),
            AppCommand::ChooseLogFolder => {
                if self.session.is_logging() {
                    self.status = Some(Status::error(
                        "Save the current log before choosing another folder",
                    ));
                    return;
                }
                let start = self.settings.last_log_folder.clone();
                let folder = picker.pick_folder("Select log folder", start.as_deref());
                self.apply_session(SessionCommand::SelectFolder(folder), now);
            }
            AppCommand::Session(cmd) => self.apply_session(cmd, now),
        }
    }

    fn scan_data_folder(&mut self, dir: PathBuf) {
        match scanner::scan_csv_folder(&dir) {
            Ok(listing) => {
                self.browser = BrowserView::Listing(listing);
                self.settings.last_data_folder = Some(dir);
                self.persist();
            }
            Err(e) => {
                log::warn!("{e}");
                self.browser = BrowserView::Unreadable {
                    folder: dir,
                    message: e.to_string(),
                };
            }
        }
    }

    fn plot_file(&mut self, name: &str) {
        let Some(listing) = self.browser.listing().filter(|l| l.contains(name)) else {
            log::debug!("ignoring plot request for {name:?}: not in the current listing");
            return;
        };
        match csv_io::read_series(listing.path_of(name)) {
            Ok(series) => {
                self.status = Some(Status::info(format!(
                    "Plotted {name} ({} samples)",
                    series.len()
                )));
                self.plot.show_series(series);
            }
            Err(e) => {
                log::warn!("{e}");
                self.status = Some(Status::error(e.to_string()));
            }
        }
    }

    fn apply_session(&mut self, cmd: SessionCommand, now: NaiveDateTime) {
        match self.session.handle(cmd, now) {
            Ok(SessionOutcome::FolderSelected(folder)) => {
                self.settings.last_log_folder = Some(folder);
                self.persist();
            }
            Ok(SessionOutcome::Started(path)) => {
                self.status = Some(Status::info(format!("Logging to {}", path.display())));
            }
            Ok(SessionOutcome::Saved { path, rows }) => {
                self.status = Some(Status::info(format!(
                    "Saved {rows} readings to {}",
                    path.display()
                )));
            }
            Ok(SessionOutcome::Accepted(_) | SessionOutcome::Rejected(_) | SessionOutcome::Ignored) => {}
            Err(e) => {
                log::error!("{e}");
                self.status = Some(Status::error(e.to_string()));
            }
        }
    }

    fn persist(&self) {
        let Some(path) = &self.settings_path else {
            return;
        };
        if let Err(e) = self.settings.save(path) {
            log::warn!("could not save settings: {e}");
        }
    }
}
