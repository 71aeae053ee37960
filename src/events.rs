//! Typed user actions.
//!
//! Panels never mutate the application directly. Each click or key press
//! becomes an [`AppCommand`] that is queued while the frame is drawn and
//! applied afterwards by [`AppState::dispatch`](crate::app::AppState::dispatch).

use std::path::PathBuf;

use crate::data::plot::PlotMode;
use crate::data::session::SessionCommand;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// Ask the user for a data folder, then scan it.
    BrowseDataFolder,
    /// Scan a known folder for CSV files.
    ScanDataFolder(PathBuf),
    /// Plot a file from the current listing.
    PlotFile(String),
    SetPlotMode(PlotMode),
    ClearPlot,
    /// Ask the user for the folder new logs go into.
    ChooseLogFolder,
    Session(SessionCommand),
}

/// Commands collected during one frame.
#[derive(Debug, Default)]
pub struct CommandQueue {
    pending: Vec<AppCommand>,
}

impl CommandQueue {
    pub fn push(&mut self, cmd: AppCommand) {
        self.pending.push(cmd);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, AppCommand> {
        self.pending.drain(..)
    }
}
