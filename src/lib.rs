//! Teacup crate root: re-exports and module wiring.
//!
//! A desktop tool for logging temperatures by hand and plotting
//! time/temperature curves from CSV files, built on egui/eframe.
//!
//! - `data`: readings, folder scanning, CSV reading/writing, the logging
//!   session state machine and the plot model
//! - `events`: typed user commands
//! - `app`: the application state, command dispatch and the native window
//! - `panels`: egui renderers for the file browser, plot and logger
//! - `config` / `persistence`: window configuration and remembered settings

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod panels;
pub mod persistence;

// Public re-exports for a compact external API
pub use app::{run_app, AppState, FolderPicker, TeacupApp};
pub use config::{PlotLabels, TeacupConfig};
pub use data::csv_io::{read_series, write_csv};
pub use data::plot::{PlotMode, PlotModel};
pub use data::reading::{Reading, Series};
pub use data::scanner::{scan_csv_folder, FolderListing};
pub use data::session::{LoggingSession, SessionCommand, SessionOutcome, SessionState};
pub use error::{Error, Result};
pub use events::AppCommand;
