//! The manual logging session: pick a folder, name the file, type readings, save.

use std::path::{Path, PathBuf};

use chrono::{NaiveDateTime, NaiveTime};

use crate::data::csv_io;
use crate::data::reading::Reading;
use crate::error::{Error, Result};

/// File name used when the user leaves the name box empty.
pub const DEFAULT_LOG_NAME: &str = "TemperatureLog";
/// Prefix stamped in front of every log file name.
pub const FILE_PREFIX_FORMAT: &str = "%Y_%m_%d_%H_%M_%S_";
/// Format of the time column written for each reading.
pub const READING_TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No target folder.
    #[default]
    Idle,
    /// Target folder chosen, waiting for a file name.
    FolderSelected { folder: PathBuf },
    /// Accepting readings for `path`.
    Logging { path: PathBuf, readings: Vec<Reading> },
}

/// A user action aimed at the logging session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Result of the folder picker; `None` when the user cancelled.
    SelectFolder(Option<PathBuf>),
    /// Start logging with the given (possibly empty) file name.
    Start { name: String },
    /// A temperature typed into the entry box.
    EnterTemperature(String),
    Save,
}

/// What a command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    FolderSelected(PathBuf),
    Started(PathBuf),
    Accepted(Reading),
    /// The text was not a digits-only temperature; nothing was recorded.
    Rejected(String),
    Saved { path: PathBuf, rows: usize },
    /// The command does not apply in the current state.
    Ignored,
}

/// Returns `true` if `text` is a temperature the logger accepts: one or more
/// ASCII digits and nothing else, so no sign and no decimal point.
pub fn is_valid_temperature(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// `<folder>/<YYYY_MM_DD_HH_MM_SS_><name>.csv`, with a blank name replaced by
/// [`DEFAULT_LOG_NAME`].
pub fn log_file_path(folder: &Path, name: &str, started: NaiveDateTime) -> Result<PathBuf> {
    let name = if name.trim().is_empty() {
        DEFAULT_LOG_NAME
    } else {
        name
    };
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(Error::InvalidFileName(name.to_string()));
    }
    let prefix = started.format(FILE_PREFIX_FORMAT);
    Ok(folder.join(format!("{prefix}{name}.csv")))
}

/// Owner of the in-memory reading buffer.
///
/// The session never reads the clock; callers pass the current time in so the
/// state machine stays deterministic.
#[derive(Debug, Default)]
pub struct LoggingSession {
    state: SessionState,
}

impl LoggingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_logging(&self) -> bool {
        matches!(self.state, SessionState::Logging { .. })
    }

    /// Readings collected so far; empty outside of `Logging`.
    pub fn readings(&self) -> &[Reading] {
        match &self.state {
            SessionState::Logging { readings, .. } => readings.as_slice(),
            _ => &[],
        }
    }

    /// The selected folder, in `FolderSelected` or `Logging`.
    pub fn folder(&self) -> Option<&Path> {
        match &self.state {
            SessionState::Idle => None,
            SessionState::FolderSelected { folder } => Some(folder),
            SessionState::Logging { path, .. } => path.parent(),
        }
    }

    /// Output file of the running log.
    pub fn target_path(&self) -> Option<&Path> {
        match &self.state {
            SessionState::Logging { path, .. } => Some(path),
            _ => None,
        }
    }

    pub fn handle(&mut self, cmd: SessionCommand, now: NaiveDateTime) -> Result<SessionOutcome> {
        match cmd {
            SessionCommand::SelectFolder(folder) => Ok(self.select_folder(folder)),
            SessionCommand::Start { name } => self.start(&name, now),
            SessionCommand::EnterTemperature(text) => Ok(self.enter_temperature(&text, now.time())),
            SessionCommand::Save => self.save(),
        }
    }

    pub fn select_folder(&mut self, folder: Option<PathBuf>) -> SessionOutcome {
        let Some(folder) = folder else {
            return SessionOutcome::Ignored;
        };
        if self.is_logging() {
            log::warn!("log in progress, save it before choosing another folder");
            return SessionOutcome::Ignored;
        }
        log::info!("logging folder set to {}", folder.display());
        self.state = SessionState::FolderSelected {
            folder: folder.clone(),
        };
        SessionOutcome::FolderSelected(folder)
    }

    pub fn start(&mut self, name: &str, now: NaiveDateTime) -> Result<SessionOutcome> {
        let SessionState::FolderSelected { folder } = &self.state else {
            return Ok(SessionOutcome::Ignored);
        };
        let path = log_file_path(folder, name, now)?;
        log::info!("started logging to {}", path.display());
        self.state = SessionState::Logging {
            path: path.clone(),
            readings: Vec::new(),
        };
        Ok(SessionOutcome::Started(path))
    }

    pub fn enter_temperature(&mut self, text: &str, now: NaiveTime) -> SessionOutcome {
        let SessionState::Logging { readings, .. } = &mut self.state else {
            return SessionOutcome::Ignored;
        };
        if !is_valid_temperature(text) {
            log::debug!("rejected temperature entry {text:?}");
            return SessionOutcome::Rejected(text.to_string());
        }
        let reading = Reading::new(now.format(READING_TIME_FORMAT).to_string(), text);
        readings.push(reading.clone());
        SessionOutcome::Accepted(reading)
    }

    /// Write the buffer to the target file and go back to `Idle`.
    ///
    /// On failure the session stays in `Logging` with its readings intact.
    pub fn save(&mut self) -> Result<SessionOutcome> {
        let SessionState::Logging { path, readings } = &self.state else {
            return Ok(SessionOutcome::Ignored);
        };
        let rows = csv_io::write_readings(path, readings)?;
        let path = path.clone();
        self.state = SessionState::Idle;
        Ok(SessionOutcome::Saved { path, rows })
    }
}
