//! Application wiring.
//!
//! | Sub-module      | Responsibility |
//! | --------------- | -------------- |
//! | [`state`]       | [`AppState`]: the single owner of listing, plot and logging session; command dispatch |
//! | [`picker`]      | [`FolderPicker`] seam and its `rfd` implementation |
//! | [`teacup_app`]  | [`TeacupApp`] (eframe) wrapper that draws the panels and applies queued commands |
//! | [`run`]         | [`run_app()`] entry point and icon loading |

mod picker;
mod run;
mod state;
mod teacup_app;

pub use picker::{FolderPicker, RfdFolderPicker};
pub use run::run_app;
pub use state::{AppState, BrowserView, Status, EMPTY_FOLDER_NOTICE};
pub use teacup_app::TeacupApp;
